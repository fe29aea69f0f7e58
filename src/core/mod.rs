pub mod convert;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ConvertedItem, IngestReport, Record};
pub use crate::domain::ports::{CaptureStore, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::utils::error::{IngestError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    if region.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "Region cannot be empty".to_string(),
        });
    }

    // us-east-2, ap-southeast-2, us-gov-west-1, ...
    let pattern =
        Regex::new(r"^[a-z]{2,3}(-[a-z]+)+-\d$").map_err(|e| IngestError::ConfigError {
            message: format!("Invalid region pattern: {}", e),
        })?;

    if !pattern.is_match(region) {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "Not a recognized AWS region format".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("table_name", "ivvm-captures").is_ok());
        assert!(validate_non_empty_string("table_name", "").is_err());
        assert!(validate_non_empty_string("table_name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "dynamodb-mock-data.json").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "us-east-2").is_ok());
        assert!(validate_aws_region("region", "ap-southeast-2").is_ok());
        assert!(validate_aws_region("region", "us-gov-west-1").is_ok());
        assert!(validate_aws_region("region", "").is_err());
        assert!(validate_aws_region("region", "not a region").is_err());
        assert!(validate_aws_region("region", "US-EAST-2").is_err());
    }
}

// Adapters layer: concrete implementations for external systems.
// File storage stays under src/config (cli) for now; this module holds the DynamoDB client.

pub mod dynamo;

//! Browser adapters for the Career Navigator ports.

pub mod llm;
pub mod page_config;
pub mod secrets;

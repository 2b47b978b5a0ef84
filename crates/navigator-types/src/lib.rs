pub mod message;
pub mod conversation;
pub mod event;
pub mod topic;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::{CompletionError, FailureKind, NavigatorError};
pub type Result<T> = std::result::Result<T, NavigatorError>;

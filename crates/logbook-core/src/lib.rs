pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::LogbookError;
pub use logging::{LogEntry, LogLevel};
pub use result::LogbookResult;

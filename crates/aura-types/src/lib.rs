pub mod message;
pub mod event;
pub mod plan;
pub mod dataset;
pub mod config;
pub mod error;
pub mod session;


pub use error::ConsoleError;

pub type Result<T> = std::result::Result<T, ConsoleError>;

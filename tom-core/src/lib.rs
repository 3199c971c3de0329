//! Shared foundation for the tom workspace: the error type, output macros,
//! child-process plumbing and small file system helpers.

pub mod command_stream;
pub mod error;
pub mod file_system;
pub mod output_macros;

pub use error::{Result, TomError};

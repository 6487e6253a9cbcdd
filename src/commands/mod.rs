//! # CLI Commands
//!
//! Configuration is gathered from the command line once, up front,
//! then the merge runs as a single pass.

pub mod merge;


#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Could not find file {0}")]
    FileNotFound(String),
    #[error("Line entry is not supported, please pipe a level in or use --input")]
    LineEntry
}

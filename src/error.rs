//! Error types for varlex operations.
//!
//! Classification itself is total and never fails; errors only arise at the
//! edges, when loading the gene-symbol list or building the pattern library.

use thiserror::Error;

/// Main error type for varlex operations.
#[derive(Error, Debug)]
pub enum VarlexError {
    /// I/O failure while reading an input or the gene-symbol list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The gene-symbol file did not have the expected shape.
    #[error("invalid gene-symbol list: {msg}")]
    GeneList {
        /// Description of the problem.
        msg: String,
    },

    /// A pattern in the library failed to compile.
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

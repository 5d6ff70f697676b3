//! varlex: lexical classifier for free-text cancer variant descriptors
//!
//! Classifies the short free-text variant names found in public cancer
//! knowledgebases ("V600E", "EGFR FUSION", "EXON 19 DELETION", ...) into a
//! fixed set of semantic categories, for comparing how different sources
//! describe variants.
//!
//! # Example
//!
//! ```
//! use varlex::{Classifier, GeneSymbols};
//!
//! let genes = GeneSymbols::from_symbols(["BRAF", "EGFR", "ALK"]);
//! let classifier = Classifier::new(&genes).unwrap();
//!
//! let result = classifier.classify("EGFR-ALK FUSION");
//! assert_eq!(result.category.to_string(), "TWO_FUS");
//!
//! let groups = classifier.classify_many(["V600E", "EGFR FUSION"]);
//! assert_eq!(groups.len(), 2);
//! ```

pub mod alphabet;
pub mod classify;
pub mod cli;
pub mod error;
pub mod genes;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod patterns;
pub mod summary;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use classify::{Category, Classification, Classifier};
pub use error::VarlexError;
pub use genes::GeneSymbols;
pub use patterns::PatternLibrary;
pub use summary::{CategoryCount, CategorySummary};
pub use token::{Token, TokenKind};

/// Result type alias for varlex operations
pub type Result<T> = std::result::Result<T, VarlexError>;

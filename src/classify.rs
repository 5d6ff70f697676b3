//! Descriptor classification.
//!
//! Reduces the token-kind sequence of a descriptor to exactly one category
//! label via an ordered rule chain. Classification is total: every input
//! string, the empty string included, yields a label from the closed set.

use crate::genes::GeneSymbols;
use crate::patterns::PatternLibrary;
use crate::token::TokenKind;
use crate::Result;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Final semantic category of a whole descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// The descriptor reduced to exactly one token kind.
    Kind(TokenKind),
    /// Fusion involving at most one recognized gene (e.g. "EGFR FUSION").
    OneFusion,
    /// Fusion naming two genes (e.g. "EGFR-ALK FUSION").
    TwoFusion,
    /// Exon reference plus a mutation keyword.
    ///
    /// Structurally unreachable under the current rule order: the keyword
    /// stripping step removes `MUT_KW` whenever more than one kind is
    /// present. Kept pending clarification; see DESIGN.md.
    ExonMutation,
    /// More than one kind remained and no earlier rule applied.
    Complex,
    /// Unclassifiable: an unrecognized word, or no visible tokens at all.
    Unknown,
}

impl Category {
    /// Wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kind(kind) => kind.as_str(),
            Category::OneFusion => "ONE_FUS",
            Category::TwoFusion => "TWO_FUS",
            Category::ExonMutation => "EXON_MUT",
            Category::Complex => "complex",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers in table output apply.
        f.pad(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One classified descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The original descriptor text.
    pub descriptor: String,
    /// The category it was assigned.
    pub category: Category,
}

/// Rule-based descriptor classifier.
///
/// Owns the immutable pattern library; `classify` is a pure function of its
/// input, so a `Classifier` can be shared freely across threads.
#[derive(Debug)]
pub struct Classifier {
    library: PatternLibrary,
}

impl Classifier {
    /// Build a classifier for the given gene-symbol table.
    pub fn new(genes: &GeneSymbols) -> Result<Self> {
        Ok(Classifier {
            library: PatternLibrary::new(genes)?,
        })
    }

    /// The underlying pattern library.
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Classify one descriptor. Never fails.
    pub fn classify(&self, descriptor: &str) -> Classification {
        let mut types: Vec<TokenKind> = self
            .library
            .tokenize(descriptor)
            .iter()
            .map(|t| t.kind)
            .collect();

        // Parenthetical annotations and bare mutation keywords carry no
        // signal when anything else is present.
        if types.len() > 1 && types.contains(&TokenKind::Annot) {
            types.retain(|k| *k != TokenKind::Annot);
        }
        if types.len() > 1 && types.contains(&TokenKind::MutKw) {
            types.retain(|k| *k != TokenKind::MutKw);
        }

        let gene_count = types.iter().filter(|k| **k == TokenKind::Gene).count();
        let fusion_shaped = !types.is_empty()
            && types
                .iter()
                .all(|k| matches!(*k, TokenKind::FusKw | TokenKind::Gene));

        let category = if fusion_shaped && gene_count < 2 {
            Category::OneFusion
        } else if fusion_shaped && gene_count == 2 {
            Category::TwoFusion
        } else if types.contains(&TokenKind::Ow) {
            Category::Unknown
        } else if types.len() == 1 {
            Category::Kind(types[0])
        } else if types == [TokenKind::Exon, TokenKind::MutKw] {
            // Unreachable today: the stripping step above removes MUT_KW from
            // any multi-kind sequence. Kept verbatim pending clarification of
            // the intended precedence.
            Category::ExonMutation
        } else if types.len() == 2 && types.contains(&TokenKind::Exon) {
            let other = if types[0] == TokenKind::Exon {
                types[1]
            } else {
                types[0]
            };
            Category::Kind(other)
        } else if types.len() > 1 {
            Category::Complex
        } else {
            Category::Unknown
        };

        Classification {
            descriptor: descriptor.to_string(),
            category,
        }
    }

    /// Classify a batch of descriptors and group them by category.
    ///
    /// Equivalent to independent `classify` calls; the `BTreeMap` gives a
    /// reproducible iteration order for reporting.
    pub fn classify_many<I, S>(&self, descriptors: I) -> BTreeMap<Category, Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for descriptor in descriptors {
            let result = self.classify(descriptor.as_ref());
            groups
                .entry(result.category)
                .or_default()
                .push(result.descriptor);
        }
        groups
    }
}

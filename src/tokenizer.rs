//! Left-to-right descriptor scanner.
//!
//! At each position the ordered pattern set is attempted and the scan commits
//! to the first pattern that matches exactly there, consuming its span. There
//! is no backtracking across already-tokenized spans. `Skip` matches are
//! consumed silently. Tokenization is total: the catch-all single-character
//! pattern guarantees every input, including the empty string, scans to
//! completion without error.

use crate::patterns::PatternLibrary;
use crate::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Keyword table applied to `Ow` tokens after matching.
///
/// An unclassified word whose upper-cased value appears here is rewritten to
/// the mapped kind; the captured value is left untouched.
static KEYWORD_KINDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("FUSION", TokenKind::FusKw),
        ("FUSIONS", TokenKind::FusKw),
        ("MUTATION", TokenKind::MutKw),
        ("MUTATIONS", TokenKind::MutKw),
        ("ALTERATION", TokenKind::MutKw),
        ("ABL", TokenKind::Gene),
        ("SPLICING", TokenKind::Splice),
        ("SPLICE", TokenKind::Splice),
        ("NULL", TokenKind::Lof),
        ("DELETERIOUS", TokenKind::Lof),
        ("INACTIVATING", TokenKind::Lof),
        ("ACTIVATING", TokenKind::Gof),
        ("ONCOGENIC", TokenKind::Onc),
        ("FRAMESHIFT", TokenKind::PFs),
        ("TRUNCATING", TokenKind::PFs),
        ("INSERTION", TokenKind::PDelins),
        ("DELETION", TokenKind::PDelins),
        ("AMPLIFICATION", TokenKind::Amp),
        ("WILDTYPE", TokenKind::Wt),
        ("DUPLICATION", TokenKind::Dup),
    ])
});

/// Look up the normalized kind for an `Ow` token value, if any.
fn keyword_kind(value: &str) -> Option<TokenKind> {
    KEYWORD_KINDS
        .get(value.to_ascii_uppercase().as_str())
        .copied()
}

impl PatternLibrary {
    /// Tokenize a descriptor.
    ///
    /// Every character of the input is consumed by exactly one match; `Skip`
    /// spans are dropped from the output. Never fails: characters no pattern
    /// recognizes come back as single-character `Oc` tokens.
    pub fn tokenize(&self, descriptor: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < descriptor.len() {
            let (kind, end) = self.match_at(descriptor, pos);
            if kind != TokenKind::Skip {
                let value = descriptor[pos..end].to_string();
                let kind = match kind {
                    TokenKind::Ow => keyword_kind(&value).unwrap_or(TokenKind::Ow),
                    other => other,
                };
                tokens.push(Token {
                    kind,
                    value,
                    source: descriptor.to_string(),
                    offset: pos,
                });
            }
            pos = end;
        }

        tokens
    }

    /// Find the highest-priority pattern matching at `pos`; returns its kind
    /// and the end of the matched span.
    fn match_at(&self, descriptor: &str, pos: usize) -> (TokenKind, usize) {
        for (kind, re) in self.patterns() {
            if let Some(m) = re.find_at(descriptor, pos) {
                if m.start() == pos && !m.is_empty() {
                    return (*kind, m.end());
                }
            }
        }
        // The catch-all pattern matches any character, so this is only a
        // totality backstop for positions it could not see.
        let end = descriptor[pos..]
            .chars()
            .next()
            .map_or(descriptor.len(), |c| pos + c.len_utf8());
        (TokenKind::Oc, end)
    }
}

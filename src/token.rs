//! Token and token-kind definitions.

use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of a lexed token.
///
/// The first group is produced directly by the pattern library; the second
/// group (`FusKw` through `Dup`) is produced only by keyword normalization of
/// an `Ow` token. `Skip` is matched during scanning but never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Gene symbol from the supplied list.
    Gene,
    /// Exon reference, including any attached exon numbers.
    Exon,
    /// Protein frameshift (e.g. `V2288fs*1`).
    PFs,
    /// Protein substitution (e.g. `V600E`).
    PSub,
    /// Protein termination (e.g. `E636*`).
    PTer,
    /// Unqualified protein position (e.g. `V600`).
    PAlt,
    /// Protein duplication (e.g. `A767_V769dup`).
    PDup,
    /// Protein deletion/insertion/indel (e.g. `E709_T710delinsD`).
    PDelins,
    /// Loss of function.
    Lof,
    /// Gain of function.
    Gof,
    /// Amplification.
    Amp,
    /// Gene-level deletion (`DEL` as a standalone word).
    Del,
    /// Expression change (over-/underexpression).
    Exp,
    /// Wild type.
    Wt,
    /// Microsatellite instability, high.
    Msih,
    /// Internal tandem duplication.
    Itd,
    /// Protein domain reference.
    Dom,
    /// Parenthetical annotation.
    Annot,
    /// Whitespace/separator run; consumed, never emitted.
    Skip,
    /// Unbalanced opening parenthesis.
    OpenGroup,
    /// Unbalanced closing parenthesis.
    CloseGroup,
    /// Unclassified word.
    Ow,
    /// Unclassified single character.
    Oc,
    /// "FUSION"/"FUSIONS" keyword.
    FusKw,
    /// "MUTATION"/"MUTATIONS"/"ALTERATION" keyword.
    MutKw,
    /// "SPLICE"/"SPLICING" keyword.
    Splice,
    /// "ONCOGENIC" keyword.
    Onc,
    /// "DUPLICATION" keyword (distinct from the protein-change `PDup`).
    Dup,
}

impl TokenKind {
    /// Wire name of this kind, as used in knowledgebase comparisons.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Gene => "GENE",
            TokenKind::Exon => "EXON",
            TokenKind::PFs => "P_FS",
            TokenKind::PSub => "P_SUB",
            TokenKind::PTer => "P_TER",
            TokenKind::PAlt => "P_ALT",
            TokenKind::PDup => "P_DUP",
            TokenKind::PDelins => "P_DELINS",
            TokenKind::Lof => "LOF",
            TokenKind::Gof => "GOF",
            TokenKind::Amp => "AMP",
            TokenKind::Del => "DEL",
            TokenKind::Exp => "EXP",
            TokenKind::Wt => "WT",
            TokenKind::Msih => "MSIH",
            TokenKind::Itd => "ITD",
            TokenKind::Dom => "DOM",
            TokenKind::Annot => "ANNOT",
            TokenKind::Skip => "SKIP",
            TokenKind::OpenGroup => "OPEN_GROUP",
            TokenKind::CloseGroup => "CLOSE_GROUP",
            TokenKind::Ow => "OW",
            TokenKind::Oc => "OC",
            TokenKind::FusKw => "FUS_KW",
            TokenKind::MutKw => "MUT_KW",
            TokenKind::Splice => "SPLICE",
            TokenKind::Onc => "ONC",
            TokenKind::Dup => "DUP",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A classified, contiguous substring of a descriptor.
///
/// Tokens are transient: they are produced by the tokenizer, inspected by the
/// classifier, and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token kind, after keyword normalization.
    pub kind: TokenKind,
    /// The matched substring, exactly as it appeared.
    pub value: String,
    /// The full original descriptor this token came from.
    pub source: String,
    /// Byte offset of `value` within `source`.
    pub offset: usize,
}

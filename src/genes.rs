//! Gene-symbol list handling.
//!
//! The authoritative symbol list comes from an external tab-delimited file
//! (e.g. an HGNC export). The lexer needs only the unique symbol strings,
//! ordered longest-first so that a symbol which is a textual prefix of a
//! longer one (say `ALK` and `ALKBH1`) never shadows the longer match inside
//! the `GENE` alternation.

use crate::error::VarlexError;
use crate::Result;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// The gene-symbol table embedded into the `GENE` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneSymbols {
    // Sorted descending by length, ties broken lexicographically.
    symbols: Vec<String>,
}

impl GeneSymbols {
    /// Build from an iterator of symbol strings.
    ///
    /// Duplicates and blank entries are dropped; the result is sorted
    /// longest-first (ties lexicographic) for a reproducible alternation.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let mut symbols: Vec<String> = unique.into_iter().collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        GeneSymbols { symbols }
    }

    /// Build an empty table. The `GENE` pattern then matches nothing, but
    /// tokenization and classification remain total.
    pub fn empty() -> Self {
        GeneSymbols::default()
    }

    /// Load symbols from a tab-delimited file.
    ///
    /// If the first non-comment line contains a `symbol` column header
    /// (case-insensitive), symbols are read from that column; otherwise every
    /// line's first field is taken as a symbol. Blank lines and `#` comments
    /// are skipped.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let symbols = Self::from_tsv_reader(file)?;
        debug!(
            path = %path.as_ref().display(),
            count = symbols.len(),
            "loaded gene symbols"
        );
        Ok(symbols)
    }

    /// Load symbols from a tab-delimited reader. See [`Self::from_tsv_path`].
    pub fn from_tsv_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut column: Option<usize> = None;
        let mut first_data_line = true;
        let mut raw: Vec<String> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();

            if first_data_line {
                first_data_line = false;
                if let Some(idx) = fields
                    .iter()
                    .position(|f| f.trim().eq_ignore_ascii_case("symbol"))
                {
                    column = Some(idx);
                    continue; // header line carries no symbol
                }
                column = Some(0);
            }

            let idx = column.unwrap_or(0);
            match fields.get(idx) {
                Some(field) if !field.trim().is_empty() => raw.push(field.trim().to_string()),
                _ => {
                    return Err(VarlexError::GeneList {
                        msg: format!("line has no field in column {}: {:?}", idx, line),
                    })
                }
            }
        }

        if raw.is_empty() {
            return Err(VarlexError::GeneList {
                msg: "no symbols found".to_string(),
            });
        }

        Ok(Self::from_symbols(raw))
    }

    /// The symbols, longest-first.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Regex alternation over all symbols, longest-first, each escaped.
    ///
    /// Returns `None` when the table is empty (an empty alternation would
    /// match the empty string, breaking scan progress).
    pub(crate) fn alternation(&self) -> Option<String> {
        if self.symbols.is_empty() {
            return None;
        }
        let escaped: Vec<String> = self.symbols.iter().map(|s| regex::escape(s)).collect();
        Some(escaped.join("|"))
    }
}

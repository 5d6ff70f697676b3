//! CLI utilities for varlex.
//!
//! Testable helpers used by the `varlex` binary: input-line hygiene and
//! output formatting live here so the binary stays a thin argument shell.

use crate::classify::Classification;
use crate::token::Token;
use crate::Result;
use std::fmt;
use std::str::FromStr;

/// UTF-8 BOM, common on files exported from Windows tools.
const UTF8_BOM: &str = "\u{feff}";

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated text, one record per line.
    #[default]
    Text,
    /// JSON, one document for the whole invocation.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.pad("text"),
            OutputFormat::Json => f.pad("json"),
        }
    }
}

/// Clean one input line: trim, strip a BOM on the first line, drop `#`
/// comments. Returns `None` for blank or comment-only lines.
pub fn process_input_line(line: &str, is_first_line: bool) -> Option<&str> {
    let line = if is_first_line {
        line.strip_prefix(UTF8_BOM).unwrap_or(line)
    } else {
        line
    };
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Read descriptors from a reader, applying [`process_input_line`] per line.
pub fn read_descriptors<R: std::io::BufRead>(reader: R) -> Result<Vec<String>> {
    let mut descriptors = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(descriptor) = process_input_line(&line, i == 0) {
            descriptors.push(descriptor.to_string());
        }
    }
    Ok(descriptors)
}

/// Render classifications in the given format.
pub fn format_classifications(
    results: &[Classification],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for r in results {
                out.push_str(&format!("{}\t{}\n", r.descriptor, r.category));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(results)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Render a token stream as an aligned debug listing.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        out.push_str(&format!("{:>4}  {:<12} {:?}\n", t.offset, t.kind, t.value));
    }
    out
}

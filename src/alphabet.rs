//! Amino-acid alphabets used inside protein-change notation.
//!
//! Two fixed tables: the one-letter codes (20 standard residues plus the
//! ambiguous/non-standard letters) and the three-letter codes (standard
//! residues only; the ambiguous placeholders `Asx`, `Glx`, `Xaa`, and `Xle`
//! are excluded because they never appear in knowledgebase descriptors and
//! would collide with gene symbols and plain English words).

/// One-letter amino-acid codes: the 20 standard residues plus the
/// ambiguous/non-standard IUPAC letters (B, Z, X, J, U, O).
pub const ONE_LETTER_CODES: &str = "ARNDCQEGHILKMFPSTWYVBZXJUO";

/// Three-letter amino-acid codes for the 20 standard residues.
pub const THREE_LETTER_CODES: [&str; 20] = [
    "Ala", "Arg", "Asn", "Asp", "Cys", "Gln", "Glu", "Gly", "His", "Ile", "Leu", "Lys", "Met",
    "Phe", "Pro", "Ser", "Thr", "Trp", "Tyr", "Val",
];

/// Three-letter codes excluded from the alphabet: biologically ambiguous or
/// placeholder residues.
pub const EXCLUDED_THREE_LETTER_CODES: [&str; 4] = ["Asx", "Glx", "Xaa", "Xle"];

/// Regex fragment matching a single amino acid, one- or three-letter form.
///
/// Three-letter codes are attempted first so that `Val` never lexes as the
/// one-letter code `V` followed by the stray characters `al`.
pub(crate) fn amino_acid() -> String {
    format!(
        "(?:{}|[{}])",
        THREE_LETTER_CODES.join("|"),
        ONE_LETTER_CODES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_one_letter_codes_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in ONE_LETTER_CODES.chars() {
            assert!(seen.insert(c), "duplicate one-letter code: {}", c);
        }
        assert_eq!(ONE_LETTER_CODES.len(), 26);
    }

    #[test]
    fn test_excluded_codes_absent() {
        for code in EXCLUDED_THREE_LETTER_CODES {
            assert!(
                !THREE_LETTER_CODES.contains(&code),
                "{} must not be in the three-letter table",
                code
            );
        }
    }

    #[test]
    fn test_amino_acid_fragment_matches_both_forms() {
        let re = Regex::new(&format!("^{}$", amino_acid())).unwrap();
        assert!(re.is_match("V"));
        assert!(re.is_match("Val"));
        assert!(!re.is_match("Ter"));
        assert!(!re.is_match("Xaa"));
        assert!(!re.is_match("v"));
    }

    #[test]
    fn test_amino_acid_fragment_prefers_three_letter() {
        let re = Regex::new(&amino_acid()).unwrap();
        let m = re.find("Val600").unwrap();
        assert_eq!(m.as_str(), "Val");
    }
}

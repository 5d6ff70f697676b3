//! The ordered pattern library.
//!
//! One immutable, explicitly constructed set of `(TokenKind, Regex)` pairs
//! covering the full recognizable grammar of cancer-variant descriptors. The
//! order is load-bearing: during scanning, the earliest pattern that matches
//! at the current position wins, regardless of whether a later pattern would
//! match a longer span there. Priority, not longest-match.

use crate::alphabet::amino_acid;
use crate::genes::GeneSymbols;
use crate::token::TokenKind;
use crate::Result;
use regex::Regex;
use tracing::debug;

/// Immutable, priority-ordered pattern set.
///
/// Built once (per gene-symbol list) at startup and shared read-only by all
/// tokenization calls; construction is the only fallible step.
#[derive(Debug)]
pub struct PatternLibrary {
    patterns: Vec<(TokenKind, Regex)>,
}

impl PatternLibrary {
    /// Build the library for the given gene-symbol table.
    pub fn new(genes: &GeneSymbols) -> Result<Self> {
        let aa = amino_acid();

        let mut specs: Vec<(TokenKind, String)> = Vec::new();

        if let Some(alternation) = genes.alternation() {
            specs.push((TokenKind::Gene, format!(r"\b(?:{})\b", alternation)));
        }
        specs.push((
            TokenKind::Exon,
            r"(?i)\bEXONS?\b(?:[ \t/-]*[0-9]+)*".to_string(),
        ));
        specs.push((
            TokenKind::PFs,
            format!(r"\b{aa}[0-9]+(?:{aa})?(?:FS|fs)(?:\*[0-9]+)?\b"),
        ));
        specs.push((TokenKind::PSub, format!(r"\b{aa}[0-9]+{aa}\b")));
        specs.push((TokenKind::PTer, format!(r"\b{aa}[0-9]+(?:\*|Ter\b)")));
        specs.push((TokenKind::PAlt, format!(r"\b{aa}[0-9]+\b")));
        specs.push((
            TokenKind::PDup,
            format!(r"\b{aa}[0-9]+_{aa}[0-9]+(?:DUP|dup)\b"),
        ));
        specs.push((
            TokenKind::PDelins,
            format!(r"\b{aa}[0-9]+(?:_{aa}[0-9]+)?(?:DEL|del|INS|ins|>)+(?:{aa})*\b"),
        ));
        specs.push((
            TokenKind::Lof,
            r"(?i)\bLOSS[ -]OF[ -]FUNCTION\b".to_string(),
        ));
        specs.push((
            TokenKind::Gof,
            r"(?i)\bGAIN[ -]OF[ -]FUNCTION\b".to_string(),
        ));
        specs.push((TokenKind::Amp, r"(?i)\b(?:AMPLIFICATION|AMP)\b".to_string()));
        specs.push((TokenKind::Del, r"(?i)\bDEL\b".to_string()));
        specs.push((
            TokenKind::Exp,
            r"(?i)\b(?:OVER|UNDER)?EXPRESSION\b".to_string(),
        ));
        specs.push((TokenKind::Wt, r"(?i)\bWILD[ -]TYPE\b".to_string()));
        specs.push((
            TokenKind::Msih,
            r"(?i)\b(?:MICROSATELLITE[ -]INSTABILITY[ -]HIGH|MSI[ -]?H(?:IGH)?)\b".to_string(),
        ));
        specs.push((
            TokenKind::Itd,
            r"(?i)\b(?:INTERNAL[ -]TANDEM[ -]DUPLICATIONS?|ITD)\b".to_string(),
        ));
        specs.push((TokenKind::Dom, r"(?i)\bDOMAINS?\b".to_string()));
        specs.push((TokenKind::Annot, r"\(.*\)".to_string()));
        specs.push((TokenKind::Skip, r"[ \t/-]+".to_string()));
        specs.push((TokenKind::OpenGroup, r"\(".to_string()));
        specs.push((TokenKind::CloseGroup, r"\)".to_string()));
        specs.push((TokenKind::Ow, r"\w+".to_string()));
        specs.push((TokenKind::Oc, r"(?s).".to_string()));

        let mut patterns = Vec::with_capacity(specs.len());
        for (kind, pattern) in specs {
            patterns.push((kind, Regex::new(&pattern)?));
        }

        debug!(
            patterns = patterns.len(),
            genes = genes.len(),
            "built pattern library"
        );
        Ok(PatternLibrary { patterns })
    }

    /// The patterns in priority order.
    pub(crate) fn patterns(&self) -> &[(TokenKind, Regex)] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::new(&GeneSymbols::from_symbols(["BRAF", "EGFR", "ALK"])).unwrap()
    }

    fn kind_order(lib: &PatternLibrary) -> Vec<TokenKind> {
        lib.patterns().iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_priority_order() {
        use TokenKind::*;
        assert_eq!(
            kind_order(&library()),
            vec![
                Gene, Exon, PFs, PSub, PTer, PAlt, PDup, PDelins, Lof, Gof, Amp, Del, Exp, Wt,
                Msih, Itd, Dom, Annot, Skip, OpenGroup, CloseGroup, Ow, Oc
            ]
        );
    }

    #[test]
    fn test_empty_gene_list_omits_gene_pattern() {
        let lib = PatternLibrary::new(&GeneSymbols::empty()).unwrap();
        assert!(!kind_order(&lib).contains(&TokenKind::Gene));
    }

    #[test]
    fn test_no_pattern_matches_empty_string() {
        for (kind, re) in library().patterns() {
            assert!(
                re.find("").is_none(),
                "{} matched the empty string",
                kind
            );
        }
    }

    #[test]
    fn test_exon_consumes_attached_numbers() {
        let lib = library();
        let (_, re) = &lib.patterns()[1];
        assert_eq!(re.find("EXON 19 DELETION").unwrap().as_str(), "EXON 19");
        assert_eq!(re.find("EXONS 18-21").unwrap().as_str(), "EXONS 18-21");
        assert_eq!(re.find("EXON").unwrap().as_str(), "EXON");
    }

    #[test]
    fn test_protein_change_fragments() {
        let lib = library();
        let find = |kind: TokenKind, input: &str| -> Option<String> {
            lib.patterns()
                .iter()
                .find(|(k, _)| *k == kind)
                .and_then(|(_, re)| re.find(input))
                .map(|m| m.as_str().to_string())
        };

        assert_eq!(find(TokenKind::PSub, "V600E").as_deref(), Some("V600E"));
        assert_eq!(
            find(TokenKind::PSub, "Val600Glu").as_deref(),
            Some("Val600Glu")
        );
        assert_eq!(
            find(TokenKind::PFs, "V2288fs*1").as_deref(),
            Some("V2288fs*1")
        );
        assert_eq!(
            find(TokenKind::PFs, "N1333Gfs*10").as_deref(),
            Some("N1333Gfs*10")
        );
        assert_eq!(find(TokenKind::PTer, "E636*").as_deref(), Some("E636*"));
        assert_eq!(find(TokenKind::PAlt, "V600").as_deref(), Some("V600"));
        assert_eq!(
            find(TokenKind::PDup, "A767_V769dup").as_deref(),
            Some("A767_V769dup")
        );
        assert_eq!(
            find(TokenKind::PDelins, "E709_T710delinsD").as_deref(),
            Some("E709_T710delinsD")
        );
        assert_eq!(
            find(TokenKind::PDelins, "V769_D770insASV").as_deref(),
            Some("V769_D770insASV")
        );
        assert_eq!(find(TokenKind::PDelins, "V600del").as_deref(), Some("V600del"));
    }

    #[test]
    fn test_del_does_not_match_inside_deletion() {
        let lib = library();
        let (_, re) = lib
            .patterns()
            .iter()
            .find(|(k, _)| *k == TokenKind::Del)
            .unwrap();
        assert!(re.find("DELETION").is_none());
        assert_eq!(re.find("EGFR DEL").unwrap().as_str(), "DEL");
    }

    #[test]
    fn test_effect_term_variants() {
        let lib = library();
        let matches = |kind: TokenKind, input: &str| -> bool {
            lib.patterns()
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, re)| re.is_match(input))
                .unwrap_or(false)
        };

        assert!(matches(TokenKind::Lof, "LOSS-OF-FUNCTION"));
        assert!(matches(TokenKind::Lof, "loss of function"));
        assert!(matches(TokenKind::Gof, "GAIN OF FUNCTION"));
        assert!(matches(TokenKind::Msih, "MSI-H"));
        assert!(matches(TokenKind::Msih, "MICROSATELLITE INSTABILITY-HIGH"));
        assert!(matches(TokenKind::Itd, "ITD"));
        assert!(matches(TokenKind::Itd, "INTERNAL TANDEM DUPLICATION"));
        assert!(matches(TokenKind::Wt, "WILD TYPE"));
        assert!(matches(TokenKind::Exp, "OVEREXPRESSION"));
        assert!(matches(TokenKind::Exp, "UNDEREXPRESSION"));
        assert!(matches(TokenKind::Dom, "KINASE DOMAIN"));
    }

    #[test]
    fn test_annot_spans_first_open_to_last_close() {
        let lib = library();
        let (_, re) = lib
            .patterns()
            .iter()
            .find(|(k, _)| *k == TokenKind::Annot)
            .unwrap();
        assert_eq!(re.find("(p.V600E) x (germline)").unwrap().as_str(), "(p.V600E) x (germline)");
    }
}

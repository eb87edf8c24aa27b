use regex::Regex;

use crate::error::Result;

/// Strict-AND keyword matching over article text.
///
/// Every configured keyword must appear as a whole, delimited word
/// (case-insensitive) for the text to count as a match; partial matches do
/// not exist. On a match the full configured list is returned, otherwise
/// the empty vector.
pub struct KeywordMatcher {
    keywords: Vec<String>,
    patterns: Vec<Regex>,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let patterns = keywords
            .iter()
            .map(|kw| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            keywords: keywords.to_vec(),
            patterns,
        })
    }

    /// Evaluate the combined text. An empty keyword set never matches.
    pub fn matches(&self, text: &str) -> Vec<String> {
        if self.patterns.is_empty() {
            return Vec::new();
        }
        if self.patterns.iter().all(|p| p.is_match(text)) {
            self.keywords.clone()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(keywords: &[&str]) -> KeywordMatcher {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        KeywordMatcher::new(&keywords).unwrap()
    }

    #[test]
    fn test_whole_word_only() {
        let m = matcher(&["UPS"]);
        assert!(m.matches("CUPS printing daemon released").is_empty());
        assert!(!m.matches("UPS reports quarterly earnings").is_empty());
        assert!(!m.matches("Earnings at UPS, again").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher(&["Teamsters"]);
        assert!(!m.matches("the teamsters union voted").is_empty());
        assert!(!m.matches("TEAMSTERS VOTE TODAY").is_empty());
    }

    #[test]
    fn test_strict_conjunction() {
        let m = matcher(&["UPS", "Teamsters"]);
        assert!(m.matches("UPS announces new routes").is_empty());
        assert!(m.matches("Teamsters rally downtown").is_empty());
        assert_eq!(
            m.matches("Teamsters reach deal with UPS"),
            vec!["UPS".to_string(), "Teamsters".to_string()]
        );
    }

    #[test]
    fn test_match_spans_title_and_description() {
        let m = matcher(&["UPS", "Teamsters"]);
        // Combined text is title + single space + description
        let text = format!("{} {}", "UPS earnings call", "analysts ask about Teamsters talks");
        assert!(!m.matches(&text).is_empty());
    }

    #[test]
    fn test_empty_keyword_set_never_matches() {
        let m = matcher(&[]);
        assert!(m.matches("anything at all").is_empty());
    }
}

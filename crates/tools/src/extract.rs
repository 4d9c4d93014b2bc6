//! Keyword-dictionary skill extraction.
//!
//! The default implementation of the [`SkillExtractor`] seam: a fixed
//! dictionary match over normalized text with word-boundary semantics.
//! Deterministic and offline — an external NLP/LLM collaborator can
//! replace it, and its output is merged into the profile the same way.

use async_trait::async_trait;
use skillsphere_catalog::Catalog;
use skillsphere_core::error::ExtractorError;
use skillsphere_core::profile::SkillExtractor;
use std::collections::{BTreeMap, BTreeSet};

/// Matches known skill tags and their aliases in free text.
pub struct KeywordSkillExtractor {
    /// alias (lower-case) -> canonical skill tag
    dictionary: BTreeMap<String, String>,
}

impl KeywordSkillExtractor {
    /// Build the dictionary from the catalog's skill tags and aliases.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            dictionary: catalog.skill_dictionary(),
        }
    }

    /// Build from an explicit alias -> canonical map (used in tests and
    /// by callers with their own dictionaries).
    pub fn new(dictionary: BTreeMap<String, String>) -> Self {
        Self { dictionary }
    }

    /// Scan text for dictionary terms. Matching is case-insensitive and
    /// requires word boundaries: "java" does not match inside
    /// "javascript".
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        let haystack = text.to_lowercase();
        self.dictionary
            .iter()
            .filter(|(alias, _)| contains_term(&haystack, alias))
            .map(|(_, canonical)| canonical.clone())
            .collect()
    }
}

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, text: &str) -> Result<BTreeSet<String>, ExtractorError> {
        Ok(self.scan(text))
    }
}

/// Word-boundary containment: `term` occurs in `haystack` with no
/// alphanumeric character directly before or after the occurrence.
/// Both inputs must already be lower-cased. Shared with intent
/// classification, which needs the same boundary semantics.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(term) {
        let start = search_from + pos;
        let end = start + term.len();

        let boundary_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if boundary_before && boundary_after {
            return true;
        }
        search_from = start + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordSkillExtractor {
        KeywordSkillExtractor::from_catalog(&Catalog::builtin())
    }

    #[test]
    fn finds_skills_with_word_boundaries() {
        let skills = extractor().scan("I know Python, SQL and a bit of React");
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("react"));
    }

    #[test]
    fn aliases_map_to_canonical_tags() {
        let skills = extractor().scan("Strong JS and ML background");
        assert!(skills.contains("javascript"));
        assert!(skills.contains("machine learning"));
        assert!(!skills.contains("js"));
    }

    #[test]
    fn no_substring_false_positives() {
        // "git" must not match inside "digital"; "sql" not inside "sqlite"
        // is a known limitation the boundary check handles.
        let skills = extractor().scan("digital transformation consultant");
        assert!(!skills.contains("git"));
    }

    #[test]
    fn multi_word_terms_match() {
        let skills = extractor().scan("led machine learning and data analysis projects");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("data analysis"));
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(extractor().scan("").is_empty());
    }

    #[test]
    fn scan_is_deterministic() {
        let text = "python sql react javascript statistics";
        assert_eq!(extractor().scan(text), extractor().scan(text));
    }

    #[tokio::test]
    async fn trait_impl_delegates_to_scan() {
        let ex = extractor();
        let via_trait = ex.extract("python and react").await.unwrap();
        assert_eq!(via_trait, ex.scan("python and react"));
    }
}

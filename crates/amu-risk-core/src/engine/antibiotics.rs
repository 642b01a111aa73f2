//! Antibiotic classification and name lookup.

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};

use super::tables::{
    COMMON_ANTIBIOTICS, CRITICALLY_IMPORTANT_FRAGMENTS, CRITICAL_ANTIBIOTICS,
    HIGHLY_IMPORTANT_FRAGMENTS,
};

/// Minimum similarity for a name suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.80;

/// How the drug class scores in the AMU risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrugClassRisk {
    /// Name contains a critical-antibiotic fragment
    Critical,
    /// Some other antibiotic was named
    Named,
    /// No name supplied
    Unnamed,
}

/// Classify an antibiotic name by case-insensitive substring match.
pub fn classify_antibiotic(name: Option<&str>) -> DrugClassRisk {
    let lower = name.unwrap_or_default().to_lowercase();
    if lower.is_empty() {
        DrugClassRisk::Unnamed
    } else if contains_any(&lower, CRITICAL_ANTIBIOTICS) {
        DrugClassRisk::Critical
    } else {
        DrugClassRisk::Named
    }
}

/// Importance of an antibiotic for human medicine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AntibioticImportance {
    CriticallyImportant,
    HighlyImportant,
    Important,
}

impl AntibioticImportance {
    pub fn as_str(&self) -> &'static str {
        match self {
            AntibioticImportance::CriticallyImportant => "CRITICALLY IMPORTANT",
            AntibioticImportance::HighlyImportant => "HIGHLY IMPORTANT",
            AntibioticImportance::Important => "IMPORTANT",
        }
    }
}

/// Importance category for an antibiotic name.
pub fn antibiotic_importance(name: &str) -> AntibioticImportance {
    let lower = name.to_lowercase();
    if contains_any(&lower, CRITICALLY_IMPORTANT_FRAGMENTS) {
        AntibioticImportance::CriticallyImportant
    } else if contains_any(&lower, HIGHLY_IMPORTANT_FRAGMENTS) {
        AntibioticImportance::HighlyImportant
    } else {
        AntibioticImportance::Important
    }
}

fn contains_any(haystack: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| haystack.contains(fragment))
}

/// A common antibiotic name close to free-text input.
#[derive(Debug, Clone, PartialEq)]
pub struct AntibioticSuggestion {
    pub name: &'static str,
    pub similarity: f64,
}

/// Suggest the closest common antibiotic for a (possibly misspelled) entry.
pub fn suggest_antibiotic(input: &str) -> Option<AntibioticSuggestion> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    COMMON_ANTIBIOTICS
        .iter()
        .map(|&name| AntibioticSuggestion {
            name,
            similarity: similarity(&query, &name.to_lowercase()),
        })
        .filter(|s| s.similarity >= MIN_SUGGESTION_SIMILARITY)
        .max_by(|a, b| {
            a.similarity
                .partial_cmp(&b.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Jaro-Winkler catches typos near the start; Levenshtein keeps long names honest.
fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_critical_substring() {
        assert_eq!(classify_antibiotic(Some("Colistin")), DrugClassRisk::Critical);
        assert_eq!(
            classify_antibiotic(Some("Procaine PENICILLIN G")),
            DrugClassRisk::Critical
        );
        // "oxytetracycline" also matches the "tetracycline" fragment
        assert_eq!(
            classify_antibiotic(Some("oxytetracycline LA")),
            DrugClassRisk::Critical
        );
    }

    #[test]
    fn test_classify_named_and_unnamed() {
        assert_eq!(classify_antibiotic(Some("Tylosin")), DrugClassRisk::Named);
        assert_eq!(classify_antibiotic(Some("")), DrugClassRisk::Unnamed);
        assert_eq!(classify_antibiotic(None), DrugClassRisk::Unnamed);
    }

    #[test]
    fn test_importance() {
        assert_eq!(
            antibiotic_importance("Enrofloxacin 10%"),
            AntibioticImportance::CriticallyImportant
        );
        assert_eq!(
            antibiotic_importance("Ampicillin"),
            AntibioticImportance::HighlyImportant
        );
        assert_eq!(antibiotic_importance("Tylosin"), AntibioticImportance::Important);
        assert_eq!(
            AntibioticImportance::CriticallyImportant.as_str(),
            "CRITICALLY IMPORTANT"
        );
    }

    #[test]
    fn test_suggest_misspelling() {
        let suggestion = suggest_antibiotic("enrofloxacine").unwrap();
        assert_eq!(suggestion.name, "Enrofloxacin");

        let suggestion = suggest_antibiotic("amoxicilin").unwrap();
        assert_eq!(suggestion.name, "Amoxicillin");
    }

    #[test]
    fn test_suggest_exact() {
        let suggestion = suggest_antibiotic("tylosin").unwrap();
        assert_eq!(suggestion.name, "Tylosin");
        assert!((suggestion.similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggest_rejects_unrelated() {
        assert!(suggest_antibiotic("ivermectin").is_none());
        assert!(suggest_antibiotic("   ").is_none());
    }
}

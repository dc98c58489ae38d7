//! Name-completion suggestions for incremental search.

use super::Practitioner;

/// Maximum number of suggestions returned.
pub const SUGGESTION_LIMIT: usize = 3;

/// Return up to three practitioners whose name contains the partial term.
///
/// Matches the name only, not the specialty: suggestions are a completion
/// aid, not a filter preview. Original relative order is preserved and a
/// blank or whitespace-only term yields nothing.
pub fn suggest(records: &[Practitioner], partial: &str) -> Vec<Practitioner> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practitioner(id: &str, name: &str, specialty: &str) -> Practitioner {
        Practitioner {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            experience: 5,
            fee: 400,
            rating: None,
            consultation_mode: Vec::new(),
            available: false,
            image: None,
            location: None,
            next_available: None,
            education: None,
            languages: None,
            reviews: None,
        }
    }

    fn fixture() -> Vec<Practitioner> {
        vec![
            practitioner("1", "Dr. Anita Sharma", "Dermatologist"),
            practitioner("2", "Dr. Anil Kapoor", "Dentist"),
            practitioner("3", "Dr. Anish Verma", "Cardiologist"),
            practitioner("4", "Dr. Anirudh Sen", "Dentist"),
            practitioner("5", "Dr. Kavya Nair", "Dentist"),
        ]
    }

    #[test]
    fn test_caps_at_three_results() {
        let suggestions = suggest(&fixture(), "ani");
        assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_preserves_original_order() {
        let suggestions = suggest(&fixture(), "ani");

        assert_eq!(suggestions[0].name, "Dr. Anita Sharma");
        assert_eq!(suggestions[1].name, "Dr. Anil Kapoor");
        assert_eq!(suggestions[2].name, "Dr. Anish Verma");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let suggestions = suggest(&fixture(), "KAVYA");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Dr. Kavya Nair");
    }

    #[test]
    fn test_specialty_does_not_match() {
        // "Dentist" appears in three specialties but in no name.
        assert!(suggest(&fixture(), "Dentist").is_empty());
    }

    #[test]
    fn test_empty_term_yields_nothing() {
        assert!(suggest(&fixture(), "").is_empty());
    }

    #[test]
    fn test_whitespace_term_yields_nothing() {
        assert!(suggest(&fixture(), "   ").is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let suggestions = suggest(&fixture(), "  kavya  ");
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_empty_record_set() {
        assert!(suggest(&[], "ani").is_empty());
    }
}

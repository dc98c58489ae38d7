//! Query-string codec for the filter state.
//!
//! Encoding omits every field that equals its default so shared addresses
//! stay minimal. Decoding is defensive: an unparseable field falls back to
//! its default without failing the rest of the parse, and the whole
//! operation never errors.

use super::filter::{ConsultationType, FilterState, SortKey};

const SEARCH_KEY: &str = "search";
const TYPE_KEY: &str = "consultationType";
const SPECIALTIES_KEY: &str = "specialties";
const SORT_ORDER_KEY: &str = "sortOrder";

/// Serialize a filter state to a URL query string.
///
/// Fields equal to their default are omitted. Specialties are emitted as a
/// repeated key in selection order. The result carries no leading `?`.
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !state.search.is_empty() {
        pairs.push(format!(
            "{SEARCH_KEY}={}",
            urlencoding::encode(&state.search)
        ));
    }
    if state.consultation_type != ConsultationType::All {
        pairs.push(format!(
            "{TYPE_KEY}={}",
            state.consultation_type.as_str()
        ));
    }
    for specialty in &state.specialties {
        pairs.push(format!(
            "{SPECIALTIES_KEY}={}",
            urlencoding::encode(specialty)
        ));
    }
    if state.sort_key != SortKey::Fees {
        pairs.push(format!("{SORT_ORDER_KEY}={}", state.sort_key.as_str()));
    }

    pairs.join("&")
}

/// Parse a URL query string into a filter state.
///
/// Accepts a leading `?`, repeated or comma-joined `specialties` values
/// (deduplicated, first occurrence wins), and unknown keys or enum values
/// without complaint. Absent fields take their defaults.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, decode_component(value)),
            None => (pair, String::new()),
        };

        match key {
            SEARCH_KEY => state.search = value,
            TYPE_KEY => {
                state.consultation_type = ConsultationType::parse(&value).unwrap_or_default();
            }
            SPECIALTIES_KEY => {
                for specialty in value.split(',') {
                    if specialty.is_empty() {
                        continue;
                    }
                    if !state.specialties.iter().any(|s| s == specialty) {
                        state.specialties.push(specialty.to_string());
                    }
                }
            }
            SORT_ORDER_KEY => {
                state.sort_key = SortKey::parse(&value).unwrap_or_default();
            }
            _ => {}
        }
    }

    state
}

/// Percent-decode a query component, treating `+` as a space.
///
/// A malformed percent sequence keeps its raw text; decode never fails.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_defaults_to_empty_string() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn test_encode_full_state() {
        let state = FilterState {
            search: "skin".to_string(),
            consultation_type: ConsultationType::Clinic,
            specialties: vec!["Dermatologist".to_string()],
            sort_key: SortKey::Experience,
        };

        assert_eq!(
            encode(&state),
            "search=skin&consultationType=clinic&specialties=Dermatologist&sortOrder=experience"
        );
    }

    #[test]
    fn test_encode_omits_default_fields_independently() {
        let state = FilterState {
            search: "cardio".to_string(),
            ..FilterState::default()
        };

        assert_eq!(encode(&state), "search=cardio");
    }

    #[test]
    fn test_encode_repeats_specialties_in_selection_order() {
        let state = FilterState {
            specialties: vec!["ENT".to_string(), "Ayurveda".to_string()],
            ..FilterState::default()
        };

        assert_eq!(encode(&state), "specialties=ENT&specialties=Ayurveda");
    }

    #[test]
    fn test_encode_percent_escapes_values() {
        let state = FilterState {
            search: "dr mehta".to_string(),
            specialties: vec!["Dietitian/Nutritionist".to_string()],
            ..FilterState::default()
        };

        assert_eq!(
            encode(&state),
            "search=dr%20mehta&specialties=Dietitian%2FNutritionist"
        );
    }

    #[test]
    fn test_decode_empty_and_bare_question_mark() {
        assert_eq!(decode(""), FilterState::default());
        assert_eq!(decode("?"), FilterState::default());
    }

    #[test]
    fn test_decode_fills_defaults_for_absent_fields() {
        let state = decode("search=cardio");

        assert_eq!(state.search, "cardio");
        assert_eq!(state.consultation_type, ConsultationType::All);
        assert!(state.specialties.is_empty());
        assert_eq!(state.sort_key, SortKey::Fees);
    }

    #[test]
    fn test_decode_accepts_leading_question_mark() {
        let state = decode("?consultationType=video");
        assert_eq!(state.consultation_type, ConsultationType::Video);
    }

    #[test]
    fn test_decode_single_and_repeated_specialties() {
        let single = decode("specialties=Dentist");
        assert_eq!(single.specialties, vec!["Dentist"]);

        let repeated = decode("specialties=Dentist&specialties=ENT");
        assert_eq!(repeated.specialties, vec!["Dentist", "ENT"]);
    }

    #[test]
    fn test_decode_comma_joined_specialties() {
        let state = decode("specialties=Dentist,ENT,Dentist");
        assert_eq!(state.specialties, vec!["Dentist", "ENT"]);
    }

    #[test]
    fn test_decode_unknown_enum_values_fall_back_to_defaults() {
        let state = decode("consultationType=house-call&sortOrder=name");

        assert_eq!(state.consultation_type, ConsultationType::All);
        assert_eq!(state.sort_key, SortKey::Fees);
    }

    #[test]
    fn test_decode_bad_field_does_not_abort_the_rest() {
        let state = decode("consultationType=bogus&search=skin&sortOrder=experience");

        assert_eq!(state.consultation_type, ConsultationType::All);
        assert_eq!(state.search, "skin");
        assert_eq!(state.sort_key, SortKey::Experience);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let state = decode("page=2&search=skin&utm_source=mail");
        assert_eq!(state.search, "skin");
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_decode_duplicate_scalar_keys_last_wins() {
        let state = decode("search=a&search=b");
        assert_eq!(state.search, "b");
    }

    #[test]
    fn test_decode_valueless_key_is_harmless() {
        let state = decode("search");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_decode_plus_and_percent_space() {
        assert_eq!(decode("search=dr+mehta").search, "dr mehta");
        assert_eq!(decode("search=dr%20mehta").search, "dr mehta");
    }

    #[test]
    fn test_decode_malformed_percent_sequence_kept_verbatim() {
        let state = decode("search=50%ZZ");
        assert_eq!(state.search, "50%ZZ");
    }

    #[test]
    fn test_round_trip_state_to_query_and_back() {
        let state = FilterState {
            search: "skin care".to_string(),
            consultation_type: ConsultationType::Video,
            specialties: vec![
                "Dermatologist".to_string(),
                "Dietitian/Nutritionist".to_string(),
            ],
            sort_key: SortKey::Experience,
        };

        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn test_round_trip_default_state() {
        let state = FilterState::default();
        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn test_round_trip_minimal_query_unchanged() {
        let query =
            "search=skin&consultationType=clinic&specialties=Dermatologist&sortOrder=experience";
        assert_eq!(encode(&decode(query)), query);
    }
}

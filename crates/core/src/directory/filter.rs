//! Filter and sort pipeline for the practitioner directory.
//!
//! The pipeline is pure: given the same records and filter state it always
//! produces the same visible subset in the same order, and the input
//! sequence is never touched.

use serde::{Deserialize, Serialize};

use super::{ConsultationMode, Practitioner};

/// Consultation mode selector, including the unrestricted default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Video,
    Clinic,
    #[default]
    All,
}

impl ConsultationType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsultationType::Video => "video",
            ConsultationType::Clinic => "clinic",
            ConsultationType::All => "all",
        }
    }

    /// Strict parse. Returns `None` for unknown values so callers decide
    /// between rejecting (CLI flags) and defaulting (query decode).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(Self::Video),
            "clinic" => Some(Self::Clinic),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    fn keeps(self, modes: &[ConsultationMode]) -> bool {
        match self {
            ConsultationType::All => true,
            ConsultationType::Video => modes.contains(&ConsultationMode::Video),
            ConsultationType::Clinic => modes.contains(&ConsultationMode::Clinic),
        }
    }
}

/// Display order for the visible subset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Consultation fee, low to high.
    #[default]
    Fees,
    /// Years of experience, high to low.
    Experience,
    /// No defined ordering; keeps the filtered order.
    Rating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
            SortKey::Rating => "rating",
        }
    }

    /// Strict parse, same contract as [`ConsultationType::parse`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fees" => Some(Self::Fees),
            "experience" => Some(Self::Experience),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// The complete set of user query parameters.
///
/// Every field has a default, so the state is always fully defined and a
/// fresh session starts from `FilterState::default()`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub consultation_type: ConsultationType,
    pub specialties: Vec<String>,
    pub sort_key: SortKey,
}

impl FilterState {
    /// Reset every filter except the search term.
    ///
    /// Clearing filters is distinct from clearing search: the search box
    /// keeps its contents when the filter panel is reset.
    pub fn clear_filters(&mut self) {
        self.consultation_type = ConsultationType::All;
        self.specialties.clear();
        self.sort_key = SortKey::Fees;
    }

    /// True when any non-search filter differs from its default.
    pub fn is_filtered(&self) -> bool {
        self.consultation_type != ConsultationType::All
            || !self.specialties.is_empty()
            || self.sort_key != SortKey::Fees
    }
}

/// Apply the full filter and sort pipeline to a record set.
///
/// Stages run in a fixed order: case-insensitive text match against name or
/// specialty, consultation mode membership, exact specialty membership,
/// then a stable sort. A stage with an unrestricted input passes every
/// record through unchanged.
///
/// Never fails: an empty search keeps all records, an empty mode set never
/// matches a specific mode, and ties keep their original relative order.
pub fn filter_practitioners(records: &[Practitioner], state: &FilterState) -> Vec<Practitioner> {
    let needle = state.search.to_lowercase();

    let mut filtered: Vec<Practitioner> = records
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.specialty.to_lowercase().contains(&needle)
        })
        .filter(|p| state.consultation_type.keeps(&p.consultation_mode))
        .filter(|p| state.specialties.is_empty() || state.specialties.contains(&p.specialty))
        .cloned()
        .collect();

    // slice::sort_by is stable, which the equal-fee ordering relies on.
    // Rating has no comparator; the filtered order stands.
    match state.sort_key {
        SortKey::Fees => filtered.sort_by(|a, b| a.fee.cmp(&b.fee)),
        SortKey::Experience => filtered.sort_by(|a, b| b.experience.cmp(&a.experience)),
        SortKey::Rating => {}
    }

    filtered
}

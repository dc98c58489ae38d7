//! Owning controller for a browsing session.
//!
//! Holds the full record set and the current filter state, and keeps the
//! two derived values (visible subset, canonical query string) reconciled
//! on every state change.

use super::filter::{filter_practitioners, ConsultationType, FilterState, SortKey};
use super::{query, Practitioner};

/// A browsing session over an immutable record set.
///
/// The filter state is replaced wholesale on every mutation and both
/// derived values are recomputed immediately, so readers always observe a
/// consistent (state, visible, query) triple. The query string is the
/// value to publish to the address bar; it replaces the previous one
/// rather than accumulating history.
#[derive(Debug, Clone)]
pub struct DirectorySession {
    records: Vec<Practitioner>,
    state: FilterState,
    visible: Vec<Practitioner>,
    query: String,
}

impl DirectorySession {
    /// Start a session with the default filter state.
    pub fn new(records: Vec<Practitioner>) -> Self {
        Self::with_state(records, FilterState::default())
    }

    /// Start a session with an explicit filter state.
    pub fn with_state(records: Vec<Practitioner>, state: FilterState) -> Self {
        let mut session = Self {
            records,
            state,
            visible: Vec::new(),
            query: String::new(),
        };
        session.reconcile();
        session
    }

    /// Seed the initial state from a shared address's query string, so the
    /// same address reproduces the same visible subset once data loads.
    pub fn from_query(records: Vec<Practitioner>, query: &str) -> Self {
        Self::with_state(records, query::decode(query))
    }

    fn reconcile(&mut self) {
        self.visible = filter_practitioners(&self.records, &self.state);
        self.query = query::encode(&self.state);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search = term.into();
        self.reconcile();
    }

    pub fn set_consultation_type(&mut self, consultation_type: ConsultationType) {
        self.state.consultation_type = consultation_type;
        self.reconcile();
    }

    /// Add the specialty to the selection, or remove it if already selected.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if let Some(index) = self.state.specialties.iter().position(|s| s == specialty) {
            self.state.specialties.remove(index);
        } else {
            self.state.specialties.push(specialty.to_string());
        }
        self.reconcile();
    }

    pub fn set_specialties(&mut self, specialties: Vec<String>) {
        self.state.specialties = specialties;
        self.reconcile();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.state.sort_key = sort_key;
        self.reconcile();
    }

    /// Reset every filter except the search term.
    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.reconcile();
    }

    /// The derived subset in final display order.
    pub fn visible(&self) -> &[Practitioner] {
        &self.visible
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Canonical query string for the current state, ready to share.
    pub fn query_string(&self) -> &str {
        &self.query
    }

    /// Size of the full record set, not the visible subset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

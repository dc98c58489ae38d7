//! Domain models and pure transformations for the practitioner directory.

use serde::{Deserialize, Serialize};

pub mod filter;
pub mod query;
pub mod session;
pub mod suggest;

pub use filter::{filter_practitioners, ConsultationType, FilterState, SortKey};
pub use query::{decode, encode};
pub use session::DirectorySession;
pub use suggest::{suggest, SUGGESTION_LIMIT};

/// Practitioner entry from the directory API
///
/// Records are immutable for the lifetime of a session: filtering and
/// sorting always produce new derived sequences, never in-place edits.
/// Every field the payload may omit is absent-capable rather than
/// defaulted to a sentinel, so "not yet rated" stays distinct from
/// "rated zero".
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Practitioner {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub experience: u32,
    pub fee: u32,
    pub rating: Option<f64>,
    #[serde(rename = "consultationMode", default)]
    pub consultation_mode: Vec<ConsultationMode>,
    #[serde(default)]
    pub available: bool,
    pub image: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "nextAvailable")]
    pub next_available: Option<String>,
    pub education: Option<String>,
    pub languages: Option<Vec<String>>,
    pub reviews: Option<u64>,
}

/// Delivery channel for an appointment
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationMode {
    Video,
    Clinic,
}

/// Specialty catalog rendered by the filter surface.
///
/// Records are not validated against this list; it only drives what the
/// shell offers as selectable specialties.
pub const SPECIALTIES: &[&str] = &[
    "General Physician",
    "Dentist",
    "Dermatologist",
    "Paediatrician",
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian/Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ayurveda",
    "Homeopath",
];

//! Core library for docdir
//!
//! This crate implements the **Functional Core** of the docdir application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The docdir project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`docdir_core`** (this crate): Pure transformation functions with zero I/O
//! - **`docdir`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The crate has a single domain, the practitioner directory:
//!
//! - [`directory`]: Record model and the filter/sort, suggestion, query-codec
//!   and session logic that derives a visible subset from it
//!
//! The module contains:
//!
//! - **Domain models**: Structured types representing the remote payload and
//!   the user's filter state
//! - **Transformation functions**: Pure functions that derive views from
//!   immutable records
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use docdir_core::directory::{filter_practitioners, FilterState, Practitioner};
//!
//! // Create fixture data (no HTTP required)
//! let records = vec![
//!     Practitioner {
//!         id: "doc-1".to_string(),
//!         name: "Dr. Sarah Mehta".to_string(),
//!         // ... other fields
//!     }
//! ];
//!
//! // Transform using pure function
//! let visible = filter_practitioners(&records, &FilterState::default());
//!
//! // Assert on results (no mocking needed)
//! assert_eq!(visible.len(), 1);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative Shell pattern.
//! The key insight: **data transformation logic should be pure and ignorant of where data
//! comes from or where it goes**.

pub mod directory;

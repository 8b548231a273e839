//! Criteria matching for the contact search form.
//!
//! This module filters a contact list in memory against the nine search
//! criteria of the form.

pub mod criteria_matcher;

pub use criteria_matcher::{filter_contacts, matches_criteria, FieldRule};

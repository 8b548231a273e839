//! Data models for the contact directory.
//!
//! This module contains the contact record as served by the contact source,
//! the search criteria collected from the form, and the province selector.

pub mod contact;
pub mod criteria;
pub mod province;

pub use contact::{Contact, ContactDetail};
pub use criteria::{CriteriaUpdate, CriterionField, SearchCriteria};
pub use province::{Province, ProvinceOption};

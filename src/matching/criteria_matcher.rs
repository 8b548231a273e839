//! Multi-field criteria matching for the contact search form.
//!
//! A contact is kept only when every populated criterion matches its field:
//! - Names, email, street and city: case-insensitive substring
//! - Phone and postal code: case-sensitive substring
//! - Date of birth and province: exact string equality
//!
//! Empty criteria never exclude a contact.

use crate::models::{Contact, CriterionField, SearchCriteria};

/// How a criterion is compared against a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Substring match after lowercasing both sides
    ContainsIgnoreCase,

    /// Raw substring match
    Contains,

    /// Raw string equality
    Exact,
}

impl FieldRule {
    /// The rule applied to a field.
    pub fn for_field(field: CriterionField) -> Self {
        match field {
            CriterionField::FirstName
            | CriterionField::LastName
            | CriterionField::Email
            | CriterionField::Street
            | CriterionField::City => FieldRule::ContainsIgnoreCase,
            CriterionField::Phone | CriterionField::ZipCode => FieldRule::Contains,
            CriterionField::Dob | CriterionField::State => FieldRule::Exact,
        }
    }

    /// Check a non-empty criterion against a field value.
    pub fn matches(&self, criterion: &str, value: &str) -> bool {
        self.matches_normalized(&self.normalize(criterion), value)
    }

    /// The criterion in the form `matches_normalized` expects.
    fn normalize(&self, criterion: &str) -> String {
        match self {
            // str::to_lowercase is Unicode-defined and locale-independent
            FieldRule::ContainsIgnoreCase => criterion.to_lowercase(),
            FieldRule::Contains | FieldRule::Exact => criterion.to_string(),
        }
    }

    fn matches_normalized(&self, criterion: &str, value: &str) -> bool {
        match self {
            FieldRule::ContainsIgnoreCase => value.to_lowercase().contains(criterion),
            FieldRule::Contains => value.contains(criterion),
            FieldRule::Exact => value == criterion,
        }
    }
}

/// A populated criterion with its value normalized once up front.
///
/// Reused across every contact of a filter pass.
struct PreparedCriterion {
    field: CriterionField,
    rule: FieldRule,
    value: String,
}

impl PreparedCriterion {
    fn prepare(criteria: &SearchCriteria) -> Vec<Self> {
        criteria
            .populated()
            .map(|(field, value)| {
                let rule = FieldRule::for_field(field);
                Self {
                    field,
                    rule,
                    value: rule.normalize(value),
                }
            })
            .collect()
    }

    fn matches(&self, contact: &Contact) -> bool {
        self.rule
            .matches_normalized(&self.value, self.field.value_of(contact))
    }
}

fn matches_all(prepared: &[PreparedCriterion], contact: &Contact) -> bool {
    prepared.iter().all(|c| c.matches(contact))
}

/// Check whether a single contact satisfies all populated criteria.
pub fn matches_criteria(criteria: &SearchCriteria, contact: &Contact) -> bool {
    matches_all(&PreparedCriterion::prepare(criteria), contact)
}

/// Return the contacts that satisfy all populated criteria.
///
/// The result keeps the input order. With no populated criteria every
/// contact is returned.
pub fn filter_contacts(criteria: &SearchCriteria, contacts: &[Contact]) -> Vec<Contact> {
    let prepared = PreparedCriterion::prepare(criteria);

    contacts
        .iter()
        .filter(|contact| matches_all(&prepared, contact))
        .cloned()
        .collect()
}

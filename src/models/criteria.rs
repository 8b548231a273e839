//! Search criteria collected from the search form.

use super::contact::Contact;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the nine searchable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionField {
    FirstName,
    LastName,
    Dob,
    Email,
    Phone,
    Street,
    City,
    State,
    ZipCode,
}

impl CriterionField {
    /// All fields, in form order.
    pub const ALL: [CriterionField; 9] = [
        CriterionField::FirstName,
        CriterionField::LastName,
        CriterionField::Dob,
        CriterionField::Email,
        CriterionField::Phone,
        CriterionField::Street,
        CriterionField::City,
        CriterionField::State,
        CriterionField::ZipCode,
    ];

    /// Placeholder label of the matching form control.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionField::FirstName => "First Name",
            CriterionField::LastName => "Last Name",
            CriterionField::Dob => "Date of Birth",
            CriterionField::Email => "Email Address",
            CriterionField::Phone => "Phone Number",
            CriterionField::Street => "Street Address",
            CriterionField::City => "City",
            CriterionField::State => "Province/State",
            CriterionField::ZipCode => "Postal Code",
        }
    }

    /// The contact's value for this field.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            CriterionField::FirstName => &contact.first_name,
            CriterionField::LastName => &contact.last_name,
            CriterionField::Dob => &contact.dob,
            CriterionField::Email => &contact.email,
            CriterionField::Phone => &contact.phone,
            CriterionField::Street => &contact.street,
            CriterionField::City => &contact.city,
            CriterionField::State => &contact.state,
            CriterionField::ZipCode => &contact.zip_code,
        }
    }
}

/// Filter values for each searchable field.
///
/// An empty string means "no constraint on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl SearchCriteria {
    /// The criterion value for a field.
    pub fn get(&self, field: CriterionField) -> &str {
        match field {
            CriterionField::FirstName => &self.first_name,
            CriterionField::LastName => &self.last_name,
            CriterionField::Dob => &self.dob,
            CriterionField::Email => &self.email,
            CriterionField::Phone => &self.phone,
            CriterionField::Street => &self.street,
            CriterionField::City => &self.city,
            CriterionField::State => &self.state,
            CriterionField::ZipCode => &self.zip_code,
        }
    }

    /// Replace the criterion value for a field.
    pub fn set(&mut self, field: CriterionField, value: impl Into<String>) {
        let slot = match field {
            CriterionField::FirstName => &mut self.first_name,
            CriterionField::LastName => &mut self.last_name,
            CriterionField::Dob => &mut self.dob,
            CriterionField::Email => &mut self.email,
            CriterionField::Phone => &mut self.phone,
            CriterionField::Street => &mut self.street,
            CriterionField::City => &mut self.city,
            CriterionField::State => &mut self.state,
            CriterionField::ZipCode => &mut self.zip_code,
        };
        *slot = value.into();
    }

    /// Fields that carry a non-empty value.
    pub fn populated(&self) -> impl Iterator<Item = (CriterionField, &str)> + '_ {
        CriterionField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// True when no field constrains the search.
    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }

    /// Apply edits from the form; fields left as `None` keep their value.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        let CriteriaUpdate {
            first_name,
            last_name,
            dob,
            email,
            phone,
            street,
            city,
            state,
            zip_code,
        } = update;

        let edits = [
            (&mut self.first_name, first_name),
            (&mut self.last_name, last_name),
            (&mut self.dob, dob),
            (&mut self.email, email),
            (&mut self.phone, phone),
            (&mut self.street, street),
            (&mut self.city, city),
            (&mut self.state, state),
            (&mut self.zip_code, zip_code),
        ];
        for (slot, edit) in edits {
            if let Some(value) = edit {
                *slot = value;
            }
        }
    }
}

/// Edits to individual search fields. Set a field to `""` to clear it.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CriteriaUpdate {
    /// Case-insensitive substring of the given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Case-insensitive substring of the family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Exact date of birth (YYYY-MM-DD)
    #[serde(default)]
    pub dob: Option<String>,
    /// Case-insensitive substring of the email address
    #[serde(default)]
    pub email: Option<String>,
    /// Substring of the phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Case-insensitive substring of the street address
    #[serde(default)]
    pub street: Option<String>,
    /// Case-insensitive substring of the city
    #[serde(default)]
    pub city: Option<String>,
    /// Exact province/state code, e.g. "ON"
    #[serde(default)]
    pub state: Option<String>,
    /// Substring of the postal code
    #[serde(default)]
    pub zip_code: Option<String>,
}

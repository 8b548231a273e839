//! Contact model representing one entry of the contact directory.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Deserialize a field leniently: strings pass through, numbers and booleans
/// become their text, anything else (null, objects, arrays) becomes "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// A contact in the directory.
///
/// Every field is a plain string; an empty string stands for "absent".
/// Missing, `null` or structured fields in the source JSON become empty
/// strings; numbers and booleans keep their text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier for the contact
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,

    /// Given name
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,

    /// Family name
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,

    /// Date of birth as an ISO date string (YYYY-MM-DD)
    #[serde(deserialize_with = "lenient_string")]
    pub dob: String,

    /// Email address
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,

    /// Phone number
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,

    /// Street address
    #[serde(deserialize_with = "lenient_string")]
    pub street: String,

    /// City
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,

    /// Region/province code (e.g. "ON")
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,

    /// Postal code
    #[serde(deserialize_with = "lenient_string")]
    pub zip_code: String,
}

impl Contact {
    /// Create a new contact with only an id and a name.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Full name as shown in the results table: "{first} {last}".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Email for the detail panel, "N/A" when absent.
    pub fn email_or_placeholder(&self) -> &str {
        if self.email.is_empty() {
            "N/A"
        } else {
            &self.email
        }
    }

    /// Phone for the detail panel, "Not Available" when absent.
    pub fn phone_or_placeholder(&self) -> &str {
        if self.phone.is_empty() {
            "Not Available"
        } else {
            &self.phone
        }
    }

    /// Single-line postal address, or `None` when no address part is set.
    pub fn address_line(&self) -> Option<String> {
        if self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip_code.is_empty()
        {
            return None;
        }

        Some(format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        ))
    }
}

/// The detail panel for the selected contact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactDetail {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl From<&Contact> for ContactDetail {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.full_name(),
            email: contact.email_or_placeholder().to_string(),
            phone: contact.phone_or_placeholder().to_string(),
            address: contact.address_line(),
        }
    }
}

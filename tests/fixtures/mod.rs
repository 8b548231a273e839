//! Test fixtures and sample data.
//!
//! Provides a small contact directory shaped like the production JSON
//! resource, plus generators for larger lists.

#![allow(dead_code)]

use contact_finder::Contact;

/// Build a fully populated contact.
#[allow(clippy::too_many_arguments)]
pub fn sample_contact(
    id: &str,
    first_name: &str,
    last_name: &str,
    dob: &str,
    email: &str,
    phone: &str,
    street: &str,
    city: &str,
    state: &str,
    zip_code: &str,
) -> Contact {
    Contact {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        dob: dob.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
    }
}

/// A small directory across several provinces.
pub fn directory() -> Vec<Contact> {
    vec![
        sample_contact(
            "c1", "John", "Smith", "1990-04-12", "john.smith@example.com", "416-555-0101",
            "1 King St W", "Toronto", "ON", "M5H 1A1",
        ),
        sample_contact(
            "c2", "Marie", "Tremblay", "1985-11-02", "marie@exemple.ca", "514-555-0142",
            "200 Rue Sainte-Catherine", "Montreal", "QC", "H2X 1L4",
        ),
        sample_contact(
            "c3", "Joanne", "Lee", "1992-07-30", "JLEE@Example.com", "604-555-0177",
            "88 Granville St", "Vancouver", "BC", "V6C 1T2",
        ),
        sample_contact(
            "c4", "Ahmed", "Khan", "1978-01-15", "ahmed.khan@example.org", "613-555-0123",
            "45 Sparks St", "Ottawa", "ON", "K1P 5A5",
        ),
        sample_contact("c5", "Sam", "", "", "", "", "", "", "", ""),
    ]
}

/// `n` contacts numbered from 1, all living in Toronto, Ontario.
pub fn toronto_contacts(n: usize) -> Vec<Contact> {
    (1..=n)
        .map(|i| Contact {
            city: "Toronto".to_string(),
            state: "ON".to_string(),
            ..Contact::new(format!("t{}", i), format!("Person{}", i), "Toronto")
        })
        .collect()
}

/// The directory as the JSON array served by the contact source.
pub fn directory_json() -> String {
    serde_json::to_string(&directory()).unwrap()
}

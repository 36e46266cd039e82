use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    /// Optional free-text notes attached to the contact.
    pub additional_data: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    /// Optional free-text notes attached to the contact.
    pub additional_data: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        birth_date: NaiveDate,
        additional_data: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone_number: phone_number.trim().to_string(),
            birth_date,
            additional_data: additional_data
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Partial update for a [`Contact`]. `None` fields leave the stored value
/// unchanged; an absent field and an explicit `null` are treated identically.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

impl ContactPatch {
    #[must_use]
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
        birth_date: Option<NaiveDate>,
        additional_data: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            last_name: last_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone_number: phone_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            birth_date,
            additional_data: additional_data
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// `true` when no field is set and the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.birth_date.is_none()
            && self.additional_data.is_none()
    }
}

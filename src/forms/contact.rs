use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::{ContactPatch, NewContact};

#[derive(Deserialize, Validate)]
/// Request body for creating a new contact.
pub struct CreateContactForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

#[derive(Deserialize, Validate)]
/// Request body for updating an existing contact. Omitted or `null` fields
/// leave the stored value unchanged.
pub struct UpdateContactForm {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

#[derive(Debug, Deserialize)]
/// Query parameters accepted by the contact list endpoint.
pub struct ContactListParams {
    /// Substring filter against `first_name`.
    pub name: Option<String>,
    /// Substring filter against `last_name`.
    pub surname: Option<String>,
    /// Substring filter against `email`.
    pub email: Option<String>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    crate::repository::DEFAULT_LIST_LIMIT
}

impl From<&CreateContactForm> for NewContact {
    /// Convert the [`CreateContactForm`] into a [`NewContact`] value for persistence.
    fn from(form: &CreateContactForm) -> Self {
        NewContact::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            form.phone_number.clone(),
            form.birth_date,
            form.additional_data.clone(),
        )
    }
}

impl From<&UpdateContactForm> for ContactPatch {
    /// Convert the [`UpdateContactForm`] into a [`ContactPatch`] value for persistence.
    fn from(form: &UpdateContactForm) -> Self {
        ContactPatch::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            form.phone_number.clone(),
            form.birth_date,
            form.additional_data.clone(),
        )
    }
}

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::contact::{
    Contact as DomainContact, ContactPatch as DomainContactPatch, NewContact as DomainNewContact,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::contacts)]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`].
pub struct NewContact<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub birth_date: NaiveDate,
    pub additional_data: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
/// Data used when updating a [`Contact`] record. `None` fields are skipped.
pub struct ContactPatch<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<&'a str>,
}

impl From<Contact> for DomainContact {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone_number: contact.phone_number,
            birth_date: contact.birth_date,
            additional_data: contact.additional_data,
        }
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            first_name: contact.first_name.as_str(),
            last_name: contact.last_name.as_str(),
            email: contact.email.as_str(),
            phone_number: contact.phone_number.as_str(),
            birth_date: contact.birth_date,
            additional_data: contact.additional_data.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainContactPatch> for ContactPatch<'a> {
    fn from(patch: &'a DomainContactPatch) -> Self {
        Self {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            email: patch.email.as_deref(),
            phone_number: patch.phone_number.as_deref(),
            birth_date: patch.birth_date,
            additional_data: patch.additional_data.as_deref(),
        }
    }
}

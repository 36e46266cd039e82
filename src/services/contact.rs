use chrono::Local;

use crate::domain::contact::{Contact, ContactPatch, NewContact};
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a new contact and returns it with its assigned id.
pub fn create_contact<R>(repo: &R, new_contact: &NewContact) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.create_contact(new_contact).map_err(ServiceError::from)
}

/// Returns the filtered, paginated list of contacts.
pub fn list_contacts<R>(repo: &R, query: ContactListQuery) -> ServiceResult<Vec<Contact>>
where
    R: ContactReader + ?Sized,
{
    repo.list_contacts(query).map_err(ServiceError::from)
}

/// Fetches a contact by its identifier, failing when it does not exist.
pub fn get_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    repo.get_contact_by_id(contact_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Applies the provided partial updates to the contact entity.
pub fn update_contact<R>(repo: &R, contact_id: i32, updates: &ContactPatch) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.update_contact(contact_id, updates)
        .map_err(ServiceError::from)
}

/// Removes the contact and returns its last-known state.
pub fn delete_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.delete_contact(contact_id).map_err(ServiceError::from)
}

/// Lists contacts whose birth date falls within the next seven days.
pub fn upcoming_birthdays<R>(repo: &R) -> ServiceResult<Vec<Contact>>
where
    R: ContactReader + ?Sized,
{
    let today = Local::now().date_naive();
    repo.upcoming_birthdays(today).map_err(ServiceError::from)
}

//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDate;
use mockall::mock;

use crate::domain::contact::{Contact, ContactPatch, NewContact};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};

mock! {
    pub Repository {}

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>>;
        fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<Vec<Contact>>;
        fn upcoming_birthdays(&self, today: NaiveDate) -> RepositoryResult<Vec<Contact>>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn update_contact(&self, contact_id: i32, updates: &ContactPatch) -> RepositoryResult<Contact>;
        fn delete_contact(&self, contact_id: i32) -> RepositoryResult<Contact>;
    }
}

use chrono::NaiveDate;

use crate::db::DbPool;
use crate::domain::contact::{Contact, ContactPatch, NewContact};
use crate::repository::errors::RepositoryResult;

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Number of rows returned by a list query when no limit is given.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

#[derive(Debug, Clone)]
pub struct ContactListQuery {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub skip: i64,
    pub limit: i64,
}

impl ContactListQuery {
    pub fn new() -> Self {
        Self {
            name: None,
            surname: None,
            email: None,
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Case-insensitive substring filter on `first_name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Case-insensitive substring filter on `last_name`.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Case-insensitive substring filter on `email`.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn paginate(mut self, skip: i64, limit: i64) -> Self {
        self.skip = skip.max(0);
        self.limit = limit.max(0);
        self
    }
}

impl Default for ContactListQuery {
    fn default() -> Self {
        Self::new()
    }
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>>;
    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<Vec<Contact>>;
    fn upcoming_birthdays(&self, today: NaiveDate) -> RepositoryResult<Vec<Contact>>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn update_contact(&self, contact_id: i32, updates: &ContactPatch) -> RepositoryResult<Contact>;
    fn delete_contact(&self, contact_id: i32) -> RepositoryResult<Contact>;
}

#[derive(Clone)]
/// Diesel-backed implementation of the repository traits.
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}

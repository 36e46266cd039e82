use chrono::{Duration, NaiveDate};
use diesel::prelude::*;

use crate::domain::contact::{Contact, ContactPatch, NewContact};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository};

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let contact = contacts::table
            .find(id)
            .first::<DbContact>(&mut conn)
            .optional()?;

        Ok(contact.map(Into::into))
    }

    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<Vec<Contact>> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        // SQLite LIKE is case-insensitive for ASCII, matching the ilike
        // semantics of the original filters.
        let mut stmt = contacts::table.into_boxed();

        if let Some(name) = &query.name {
            stmt = stmt.filter(contacts::first_name.like(format!("%{name}%")));
        }
        if let Some(surname) = &query.surname {
            stmt = stmt.filter(contacts::last_name.like(format!("%{surname}%")));
        }
        if let Some(email) = &query.email {
            stmt = stmt.filter(contacts::email.like(format!("%{email}%")));
        }

        let items = stmt
            .offset(query.skip)
            .limit(query.limit)
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn upcoming_birthdays(&self, today: NaiveDate) -> RepositoryResult<Vec<Contact>> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let next_week = today + Duration::days(7);

        // Full-date window: only matches rows whose stored birth year falls
        // inside [today, today + 7d]. Known issue, kept as the original
        // computes it.
        let items = contacts::table
            .filter(contacts::birth_date.ge(today))
            .filter(contacts::birth_date.le(next_week))
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::models::contact::{Contact as DbContact, NewContact as DbNewContact};
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let insertable: DbNewContact = new_contact.into();
        let created = diesel::insert_into(contacts::table)
            .values(&insertable)
            .get_result::<DbContact>(&mut conn)?;

        Ok(created.into())
    }

    fn update_contact(&self, contact_id: i32, updates: &ContactPatch) -> RepositoryResult<Contact> {
        use crate::models::contact::{Contact as DbContact, ContactPatch as DbContactPatch};
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        // Diesel rejects an all-None changeset, so an empty patch degrades
        // to returning the stored row.
        if updates.is_empty() {
            let contact = contacts::table
                .find(contact_id)
                .first::<DbContact>(&mut conn)?;
            return Ok(contact.into());
        }

        let db_updates: DbContactPatch = updates.into();
        let updated = diesel::update(contacts::table.find(contact_id))
            .set(&db_updates)
            .get_result::<DbContact>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_contact(&self, contact_id: i32) -> RepositoryResult<Contact> {
        use crate::models::contact::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        // Single DELETE .. RETURNING statement: the returned state cannot
        // race a concurrent writer, and a missing row surfaces as NotFound.
        let deleted = diesel::delete(contacts::table.find(contact_id))
            .get_result::<DbContact>(&mut conn)?;

        Ok(deleted.into())
    }
}

use chrono::{Datelike, Duration, Local, NaiveDate};
use contacts_api::domain::contact::{ContactPatch, NewContact};
use contacts_api::repository::errors::RepositoryError;
use contacts_api::repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository};

mod common;

fn new_contact(first_name: &str, last_name: &str, email: &str) -> NewContact {
    NewContact::new(
        first_name.to_string(),
        last_name.to_string(),
        email.to_string(),
        "123".to_string(),
        NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        None,
    )
}

#[test]
fn test_contact_repository_crud() {
    let test_db = common::TestDb::new("test_contact_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_contact(&new_contact("Jane", "Doe", "jane@x.com"))
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.email, "jane@x.com");

    let fetched = repo.get_contact_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let patch = ContactPatch::new(None, None, None, Some("999".to_string()), None, None);
    let updated = repo.update_contact(created.id, &patch).unwrap();
    assert_eq!(updated.phone_number, "999");
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.birth_date, created.birth_date);

    let deleted = repo.delete_contact(created.id).unwrap();
    assert_eq!(deleted, updated);
    assert!(repo.get_contact_by_id(created.id).unwrap().is_none());
}

#[test]
fn test_empty_patch_leaves_record_unchanged() {
    let test_db = common::TestDb::new("test_empty_patch.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_contact(&new_contact("Jane", "Doe", "jane@x.com"))
        .unwrap();

    let unchanged = repo
        .update_contact(created.id, &ContactPatch::default())
        .unwrap();
    assert_eq!(unchanged, created);
}

#[test]
fn test_update_missing_contact_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let patch = ContactPatch::new(Some("Janet".to_string()), None, None, None, None, None);
    let result = repo.update_contact(12345, &patch);
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    let result = repo.delete_contact(12345);
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_delete_returns_state_from_delete_statement() {
    let test_db = common::TestDb::new("test_delete_returning.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_contact(&new_contact("Jane", "Doe", "jane@x.com"))
        .unwrap();

    // The deleted state comes from the DELETE itself, so a row can only be
    // reported deleted once.
    let deleted = repo.delete_contact(created.id).unwrap();
    assert_eq!(deleted, created);
    assert!(matches!(
        repo.delete_contact(created.id),
        Err(RepositoryError::NotFound)
    ));
    assert!(repo.get_contact_by_id(created.id).unwrap().is_none());
}

#[test]
fn test_duplicate_email_is_rejected() {
    let test_db = common::TestDb::new("test_duplicate_email.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let first = repo
        .create_contact(&new_contact("Jane", "Doe", "jane@x.com"))
        .unwrap();

    let result = repo.create_contact(&new_contact("John", "Smith", "jane@x.com"));
    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    // The first record is unaffected by the failed insert.
    let fetched = repo.get_contact_by_id(first.id).unwrap().unwrap();
    assert_eq!(fetched, first);
    assert_eq!(
        repo.list_contacts(ContactListQuery::new()).unwrap().len(),
        1
    );
}

#[test]
fn test_list_filters_are_case_insensitive_substrings() {
    let test_db = common::TestDb::new("test_list_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_contact(&new_contact("Anna", "Karenina", "anna@x.com"))
        .unwrap();
    repo.create_contact(&new_contact("Hannah", "Smith", "hannah@x.com"))
        .unwrap();
    repo.create_contact(&new_contact("Bob", "Jones", "bob@x.com"))
        .unwrap();

    let mut matches = repo
        .list_contacts(ContactListQuery::new().name("ann"))
        .unwrap();
    matches.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].first_name, "Anna");
    assert_eq!(matches[1].first_name, "Hannah");

    // Filters are ANDed together.
    let matches = repo
        .list_contacts(ContactListQuery::new().name("ann").surname("kar"))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].first_name, "Anna");

    let matches = repo
        .list_contacts(ContactListQuery::new().email("BOB@"))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].first_name, "Bob");

    let matches = repo
        .list_contacts(ContactListQuery::new().name("zzz"))
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_list_pagination_skip_limit() {
    let test_db = common::TestDb::new("test_list_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..12 {
        repo.create_contact(&new_contact(
            &format!("Contact{i}"),
            "Test",
            &format!("contact{i}@x.com"),
        ))
        .unwrap();
    }

    // Default limit caps the page at 10 rows.
    let page = repo.list_contacts(ContactListQuery::new()).unwrap();
    assert_eq!(page.len(), 10);

    let page = repo
        .list_contacts(ContactListQuery::new().paginate(10, 5))
        .unwrap();
    assert_eq!(page.len(), 2);

    let page = repo
        .list_contacts(ContactListQuery::new().paginate(12, 5))
        .unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_upcoming_birthdays_full_date_window() {
    let test_db = common::TestDb::new("test_upcoming_birthdays.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let today = Local::now().date_naive();

    let in_window = NewContact::new(
        "Soon".to_string(),
        "Birthday".to_string(),
        "soon@x.com".to_string(),
        "123".to_string(),
        today + Duration::days(3),
        None,
    );
    let past_window = NewContact::new(
        "Late".to_string(),
        "Birthday".to_string(),
        "late@x.com".to_string(),
        "123".to_string(),
        today + Duration::days(10),
        None,
    );
    // Same month and day three decades back; the full-date window skips it.
    let soon = today + Duration::days(3);
    let historical_date = soon
        .with_year(soon.year() - 30)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(soon.year() - 30, 3, 1).unwrap());
    let historical = NewContact::new(
        "Historical".to_string(),
        "Birthday".to_string(),
        "historical@x.com".to_string(),
        "123".to_string(),
        historical_date,
        None,
    );

    repo.create_contact(&in_window).unwrap();
    repo.create_contact(&past_window).unwrap();
    repo.create_contact(&historical).unwrap();

    let upcoming = repo.upcoming_birthdays(today).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].first_name, "Soon");
}

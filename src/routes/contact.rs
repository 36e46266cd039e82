use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::domain::contact::{ContactPatch, NewContact};
use crate::forms::contact::{ContactListParams, CreateContactForm, UpdateContactForm};
use crate::repository::{ContactListQuery, DieselRepository};
use crate::services;
use crate::services::ServiceError;

#[post("/contacts/")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateContactForm>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let new_contact: NewContact = (&form).into();
    let contact = services::contact::create_contact(repo.get_ref(), &new_contact)?;

    Ok(HttpResponse::Ok().json(contact))
}

#[get("/contacts/")]
pub async fn list_contacts(
    repo: web::Data<DieselRepository>,
    params: web::Query<ContactListParams>,
) -> Result<HttpResponse, ServiceError> {
    let params = params.into_inner();

    let mut query = ContactListQuery::new().paginate(params.skip, params.limit);
    if let Some(name) = params.name.filter(|s| !s.is_empty()) {
        query = query.name(name);
    }
    if let Some(surname) = params.surname.filter(|s| !s.is_empty()) {
        query = query.surname(surname);
    }
    if let Some(email) = params.email.filter(|s| !s.is_empty()) {
        query = query.email(email);
    }

    let contacts = services::contact::list_contacts(repo.get_ref(), query)?;

    Ok(HttpResponse::Ok().json(contacts))
}

// Registered before `get_contact` so the literal segment wins over `{contact_id}`.
#[get("/contacts/birthday")]
pub async fn upcoming_birthdays(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let contacts = services::contact::upcoming_birthdays(repo.get_ref())?;

    Ok(HttpResponse::Ok().json(contacts))
}

#[get("/contacts/{contact_id}")]
pub async fn get_contact(
    repo: web::Data<DieselRepository>,
    contact_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let contact = services::contact::get_contact(repo.get_ref(), contact_id.into_inner())?;

    Ok(HttpResponse::Ok().json(contact))
}

#[put("/contacts/{contact_id}")]
pub async fn update_contact(
    repo: web::Data<DieselRepository>,
    contact_id: web::Path<i32>,
    web::Json(form): web::Json<UpdateContactForm>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let updates: ContactPatch = (&form).into();
    let contact =
        services::contact::update_contact(repo.get_ref(), contact_id.into_inner(), &updates)?;

    Ok(HttpResponse::Ok().json(contact))
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    repo: web::Data<DieselRepository>,
    contact_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let contact = services::contact::delete_contact(repo.get_ref(), contact_id.into_inner())?;

    Ok(HttpResponse::Ok().json(contact))
}

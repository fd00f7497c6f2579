use super::Result;
use crate::constants::{CONTACT_DELETED_MESSAGE, CONTACT_ROUTE_WORKING};
use crate::data::{ContactWeb, FromWeb, IntoWeb, MessageResponse, NewContactPayload};
use contacts_api::data::{Contact, NewContact};
use contacts_api::service::ServiceContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post};

#[get("/test")]
pub async fn test_route() -> &'static str {
    CONTACT_ROUTE_WORKING
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Returns all contacts, newest first",
    responses(
        (status = 200, description = "List of contacts", body = Vec<ContactWeb>),
        (status = 500, description = "Store failure", body = crate::router::ErrorResponse)
    )
)]
#[get("/")]
pub async fn return_contacts(state: &State<ServiceContext>) -> Result<Json<Vec<ContactWeb>>> {
    let contacts: Vec<Contact> = state.contact_service.get_contacts().await?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Creates a contact. Name, email and phone are required",
    request_body = NewContactPayload,
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "Missing or invalid field", body = crate::router::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::router::ErrorResponse)
    )
)]
#[post("/", format = "json", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<NewContactPayload>,
) -> Result<(Status, Json<ContactWeb>)> {
    let payload = new_contact_payload.0;
    let contact = state
        .contact_service
        .add_contact(NewContact::from_web(payload))
        .await?;
    Ok((Status::Created, Json(contact.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Deletes the contact with the given id",
    params(
        ("id" = String, Path, description = "Id of the contact to delete")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 404, description = "No contact with this id", body = crate::router::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::router::ErrorResponse)
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<MessageResponse>> {
    state.contact_service.delete(id).await?;
    Ok(Json(MessageResponse::new(CONTACT_DELETED_MESSAGE)))
}

use crate::data::{ContactWeb, MessageResponse, NewContactPayload};
use crate::handlers;
use crate::router::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::contacts::return_contacts,
        handlers::contacts::new_contact,
        handlers::contacts::remove_contact,
    ),
    components(schemas(ContactWeb, NewContactPayload, MessageResponse, ErrorResponse))
)]
pub struct ApiDocs;

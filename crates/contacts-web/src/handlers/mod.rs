use crate::config::Config;
use crate::constants::{CONTACT_NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE};
use crate::router::ErrorResponse;
use contacts_api::service::Error;
use log::error;
use rocket::Response;
use rocket::{State, fs::NamedFile, get, http::ContentType, serde::json::Json};
use rocket::{http::Status, response::Responder};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

// Lowest prio, fall back to index.html if nothing matches
#[get("/<_..>", rank = 10)]
pub async fn serve_frontend(config: &State<Config>) -> Option<NamedFile> {
    let folder = config.frontend_serve_folder.as_ref()?;
    NamedFile::open(Path::new(folder).join("index.html"))
        .await
        .ok()
}

#[get("/")]
pub async fn api_running() -> &'static str {
    crate::constants::API_RUNNING
}

// Higher prio than file server and index.html fallback
#[get("/<path..>", rank = 3)]
pub async fn default_api_error_catcher(path: PathBuf) -> (Status, Json<ErrorResponse>) {
    (
        Status::NotFound,
        Json(ErrorResponse::new(format!(
            "We couldn't find the requested path '{}'",
            path.display()
        ))),
    )
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, _req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::NotFound => build_json_response(
                Status::NotFound,
                ErrorResponse::new(CONTACT_NOT_FOUND_MESSAGE.to_string()),
            ),
            Error::Validation(msg) => build_validation_response(msg),
            // the underlying error text is attached for diagnostics only
            Error::Persistence(e) => {
                error!("{e}");
                build_json_response(
                    Status::InternalServerError,
                    ErrorResponse::with_error(SERVER_ERROR_MESSAGE.to_string(), e.to_string()),
                )
            }
        }
    }
}

fn build_validation_response<'o>(msg: String) -> rocket::response::Result<'o> {
    build_json_response(Status::BadRequest, ErrorResponse::new(msg))
}

fn build_json_response<'o>(
    status: Status,
    err_resp: ErrorResponse,
) -> rocket::response::Result<'o> {
    let body = err_resp.to_json_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}

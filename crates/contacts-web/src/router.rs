use crate::api_docs::ApiDocs;
use crate::config::Config;
use crate::handlers;
use contacts_api::service::ServiceContext;
use log::info;
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use serde_json::json;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// The JSON body of every failed request. `error` carries diagnostic detail
/// of server errors and is not meant to be parsed by clients.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            message,
            error: None,
        }
    }

    pub fn with_error(message: String, error: String) -> Self {
        Self {
            message,
            error: Some(error),
        }
    }

    pub fn to_json_string(&self) -> String {
        match self.error {
            Some(ref error) => json!({ "message": self.message, "error": error }).to_string(),
            None => json!({ "message": self.message }).to_string(),
        }
    }
}

pub fn rocket_main(
    conf: Config,
    context: ServiceContext,
) -> Result<Rocket<Build>, rocket_cors::Error> {
    let config = Figment::from(rocket::Config::default())
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .to_cors()?;

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/api/", rocket_cors::catch_all_options_routes())
        .mount("/api/", routes![handlers::default_api_error_catcher])
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .manage(context)
        .manage(cors)
        .manage(conf.clone())
        .mount(
            "/api/contacts",
            routes![
                handlers::contacts::test_route,
                handlers::contacts::return_contacts,
                handlers::contacts::new_contact,
                handlers::contacts::remove_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/api/swagger-ui/<_..>")
                .url("/api/api-docs/openapi.json", ApiDocs::openapi()),
        );

    // Routes for the frontend - lower rank means higher prio
    let rocket = match conf.frontend_serve_folder {
        Some(ref folder) => rocket
            .mount("/", FileServer::from(folder).rank(5))
            .mount("/", routes![handlers::serve_frontend]),
        None => rocket.mount("/", routes![handlers::api_running]),
    };

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    Ok(rocket)
}

#[catch(400)]
fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Malformed request".to_string()))
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!(
        "We couldn't find the requested path '{}'",
        req.uri()
    )))
}

#[catch(422)]
fn unprocessable_entity(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body could not be processed".to_string(),
    ))
}

#[catch(500)]
fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        crate::constants::SERVER_ERROR_MESSAGE.to_string(),
    ))
}

#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::config::Config;
    use crate::router::rocket_main;
    use async_trait::async_trait;
    use contacts_api::{DbContext, get_db_context, service::create_service_context};
    use contacts_core::contact::{Contact, NewContact};
    use contacts_persistence::{ContactStoreApi, Error as PersistenceError, Result};
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    fn get_test_config() -> Config {
        Config {
            http_address: "127.0.0.1".to_string(),
            http_port: 5000,
            surreal_db_connection: "mem://".to_string(),
            frontend_serve_folder: None,
        }
    }

    async fn get_client() -> Client {
        let conf = get_test_config();
        let api_config = contacts_api::Config {
            surreal_db_connection: conf.surreal_db_connection.clone(),
        };
        let db = get_db_context(&api_config)
            .await
            .expect("could not create memory db");
        let service_context = create_service_context(db)
            .await
            .expect("could not create service context");
        let rocket = rocket_main(conf, service_context).expect("rocket setup failed");
        Client::tracked(rocket)
            .await
            .expect("valid rocket instance")
    }

    /// A store whose backing database is unreachable
    struct UnreachableContactStore;

    #[async_trait]
    impl ContactStoreApi for UnreachableContactStore {
        async fn create(&self, _data: NewContact) -> Result<Contact> {
            Err(PersistenceError::InsertFailed("connection refused".to_string()))
        }
        async fn list_all(&self) -> Result<Vec<Contact>> {
            Err(PersistenceError::InsertFailed("connection refused".to_string()))
        }
        async fn find_by_id(&self, _id: &str) -> Result<Option<Contact>> {
            Err(PersistenceError::InsertFailed("connection refused".to_string()))
        }
        async fn delete_by_id(&self, _id: &str) -> Result<bool> {
            Err(PersistenceError::InsertFailed("connection refused".to_string()))
        }
    }

    async fn get_client_with_unreachable_store() -> Client {
        let conf = get_test_config();
        let db = DbContext {
            contact_store: Arc::new(UnreachableContactStore),
        };
        let service_context = create_service_context(db)
            .await
            .expect("could not create service context");
        let rocket = rocket_main(conf, service_context).expect("rocket setup failed");
        Client::tracked(rocket)
            .await
            .expect("valid rocket instance")
    }

    async fn create(client: &Client, body: Value) -> (Status, Value) {
        let res = client
            .post("/api/contacts")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        let status = res.status();
        (status, res.into_json::<Value>().await.expect("json body"))
    }

    async fn list(client: &Client) -> Vec<Value> {
        let res = client.get("/api/contacts").dispatch().await;
        assert_eq!(res.status(), Status::Ok);
        res.into_json::<Vec<Value>>().await.expect("json array")
    }

    #[tokio::test]
    async fn create_returns_record_and_list_starts_with_it() {
        let client = get_client().await;
        let (status, _) = create(
            &client,
            json!({"name": "Older", "email": "older@x.com", "phone": "1"}),
        )
        .await;
        assert_eq!(status, Status::Created);
        tokio::time::sleep(Duration::from_millis(5)).await;

        let (status, created) = create(
            &client,
            json!({"name": "Jo", "email": "jo@x.com", "phone": "1234567890"}),
        )
        .await;
        assert_eq!(status, Status::Created);
        assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(created["createdAt"].as_str().is_some());
        assert_eq!(created["message"], Value::Null);

        let contacts = list(&client).await;
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0]["id"], created["id"]);
        assert_eq!(contacts[0]["name"], "Jo");
        assert_eq!(contacts[0]["email"], "jo@x.com");
        assert_eq!(contacts[0]["phone"], "1234567890");
        assert_eq!(contacts[1]["name"], "Older");
    }

    #[tokio::test]
    async fn create_keeps_message() {
        let client = get_client().await;
        let (status, created) = create(
            &client,
            json!({"name": "Jo", "email": "jo@x.com", "phone": "1", "message": "call me"}),
        )
        .await;
        assert_eq!(status, Status::Created);
        assert_eq!(created["message"], "call me");
    }

    #[tokio::test]
    async fn create_with_missing_or_blank_fields_is_rejected() {
        let client = get_client().await;
        for body in [
            json!({"email": "jo@x.com", "phone": "1"}),
            json!({"name": "Jo", "email": "   ", "phone": "1"}),
            json!({"name": "Jo", "email": "jo@x.com", "phone": ""}),
            json!({}),
        ] {
            let (status, err) = create(&client, body).await;
            assert_eq!(status, Status::BadRequest);
            assert_eq!(err["message"], "Name, email, and phone are required");
        }
        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn create_with_invalid_email_is_rejected() {
        let client = get_client().await;
        let (status, err) =
            create(&client, json!({"name": "Jo", "email": "abc", "phone": "1"})).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(err["message"], "Enter a valid email");
        assert!(list(&client).await.is_empty());
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_a_json_bad_request() {
        let client = get_client().await;
        let res = client
            .post("/api/contacts")
            .header(ContentType::JSON)
            .body("{not json")
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::BadRequest);
        let err = res.into_json::<Value>().await.expect("json body");
        assert!(err["message"].is_string());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let client = get_client().await;
        create(&client, json!({"name": "Jo", "email": "jo@x.com", "phone": "1"})).await;

        let res = client.delete("/api/contacts/does-not-exist").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        let err = res.into_json::<Value>().await.expect("json body");
        assert_eq!(err["message"], "Contact not found");
        assert_eq!(list(&client).await.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_exactly_that_contact() {
        let client = get_client().await;
        let (_, keep) =
            create(&client, json!({"name": "Keep", "email": "k@x.com", "phone": "1"})).await;
        let (_, remove) =
            create(&client, json!({"name": "Remove", "email": "r@x.com", "phone": "2"})).await;

        let res = client
            .delete(format!("/api/contacts/{}", remove["id"].as_str().unwrap()))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_json::<Value>().await.expect("json body");
        assert_eq!(body["message"], "Contact deleted successfully");

        let contacts = list(&client).await;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0]["id"], keep["id"]);
    }

    #[tokio::test]
    async fn sanity_routes() {
        let client = get_client().await;
        let res = client.get("/api/contacts/test").dispatch().await;
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.into_string().await.unwrap(), "Contact route working");

        let res = client.get("/").dispatch().await;
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.into_string().await.unwrap(), "API running...");
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_not_found() {
        let client = get_client().await;
        let res = client.get("/api/nothing/here").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
        let err = res.into_json::<Value>().await.expect("json body");
        assert_eq!(err["message"], "We couldn't find the requested path 'nothing/here'");
    }

    #[tokio::test]
    async fn store_failures_are_server_errors_with_detail() {
        let client = get_client_with_unreachable_store().await;

        let res = client.get("/api/contacts").dispatch().await;
        assert_eq!(res.status(), Status::InternalServerError);
        let err = res.into_json::<Value>().await.expect("json body");
        assert_eq!(err["message"], "Server error");
        assert!(err["error"].as_str().unwrap().contains("connection refused"));

        let (status, err) =
            create(&client, json!({"name": "Jo", "email": "jo@x.com", "phone": "1"})).await;
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(err["message"], "Server error");

        let res = client.delete("/api/contacts/some-id").dispatch().await;
        assert_eq!(res.status(), Status::InternalServerError);
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_store() {
        let client = get_client_with_unreachable_store().await;
        let (status, err) = create(&client, json!({"name": "", "email": "", "phone": ""})).await;
        assert_eq!(status, Status::BadRequest);
        assert_eq!(err["message"], "Name, email, and phone are required");
        assert!(err.get("error").is_none());
    }
}

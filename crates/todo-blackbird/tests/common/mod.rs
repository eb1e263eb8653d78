//! Common test utilities: a wiremock stand-in for the ToDo API

#![allow(dead_code)]

use serde_json::{Value, json};
use todo_blackbird::{Client, Fixtures};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Ids the fake API treats as existing
pub fn fixtures() -> Fixtures {
    Fixtures::default()
}

/// Client pointed at the mock server's `/api/` prefix
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(format!("{}/api/", server.uri()))
        .build()
        .expect("Failed to build client")
}

/// A stored item as the server would return it
pub fn stored_item(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "Name": name,
        "Description": format!("{} description", name),
        "Date_Create": "2024-09-20T19:00:00.000Z",
        "Date_Finish": null,
        "Status": "1",
        "IsActive": true
    })
}

/// Matches requests whose JSON body has a non-null value at `field`.
pub struct HasJsonField(pub &'static str);

impl Match for HasJsonField {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .map(|body| body.get(self.0).is_some_and(|v| !v.is_null()))
            .unwrap_or(false)
    }
}

/// Mount every endpoint of the ToDo API on `server`.
///
/// Ids in `fixtures` exist; any other id is a 404. Creating without `Name`
/// is a 400.
pub async fn mount_fake_api(server: &MockServer, fixtures: &Fixtures) {
    Mock::given(method("GET"))
        .and(path("/api/ToDo/GetAllToDos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stored_item(&fixtures.existing_id, "Existing"),
            stored_item(&fixtures.update_id, "Updatable"),
        ])))
        .mount(server)
        .await;

    let mut deleted = stored_item("66fb0000215a0ba7a87f0000", "Deleted");
    deleted["IsActive"] = json!(false);
    Mock::given(method("GET"))
        .and(path("/api/ToDo/GetAllToDosDelete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([deleted])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/ToDo/GetToDoById/{}", fixtures.existing_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stored_item(&fixtures.existing_id, "Existing")),
        )
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/ToDo/GetToDoById/[^/]+$"))
        .respond_with(not_found())
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/ToDoCreate/CreateToDo"))
        .and(HasJsonField("Name"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(stored_item("66ff0000215a0ba7a87f1111", "Test Task")),
        )
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/ToDoCreate/CreateToDo"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Name is required"})),
        )
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/ToDoUpdate/UpdateToDo/{}", fixtures.update_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stored_item(&fixtures.update_id, "Updated Test Task")),
        )
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/ToDoUpdate/UpdateToDo/[^/]+$"))
        .respond_with(not_found())
        .mount(server)
        .await;

    let mut status_changed = stored_item(&fixtures.status_id, "Status target");
    status_changed["Status"] = json!("2");
    Mock::given(method("PUT"))
        .and(path(format!(
            "/api/ToDoUpdate/UpdateStatusToDo/{}",
            fixtures.status_id
        )))
        .and(HasJsonField("Status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_changed))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/api/ToDoUpdate/UpdateStatusToDo/[^/]+$"))
        .respond_with(not_found())
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/api/ToDoUpdate/SoftDeleteToDo/{}",
            fixtures.delete_id
        )))
        .respond_with(ResponseTemplate::new(204))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/ToDoUpdate/SoftDeleteToDo/[^/]+$"))
        .respond_with(not_found())
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/ToDo/TriggerServerError"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Forced server error"})),
        )
        .mount(server)
        .await;
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({"message": "ToDo not found"}))
}

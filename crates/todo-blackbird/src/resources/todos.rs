//! ToDo endpoints

use crate::{
    client::WeakClient,
    error::{Error, Result},
    http::{Method, RequestBuilder, Response},
    types::{StatusUpdate, ToDoItem},
};

/// Route segments, relative to the base URL.
pub mod routes {
    /// `GET ToDo/GetAllToDos`
    pub const LIST: [&str; 2] = ["ToDo", "GetAllToDos"];
    /// `GET ToDo/GetAllToDosDelete`
    pub const LIST_DELETED: [&str; 2] = ["ToDo", "GetAllToDosDelete"];
    /// `GET ToDo/GetToDoById/{id}`
    pub const GET: [&str; 2] = ["ToDo", "GetToDoById"];
    /// `GET ToDo/TriggerServerError`
    pub const TRIGGER_SERVER_ERROR: [&str; 2] = ["ToDo", "TriggerServerError"];
    /// `POST ToDoCreate/CreateToDo`
    pub const CREATE: [&str; 2] = ["ToDoCreate", "CreateToDo"];
    /// `PUT ToDoUpdate/UpdateToDo/{id}`
    pub const UPDATE: [&str; 2] = ["ToDoUpdate", "UpdateToDo"];
    /// `PUT ToDoUpdate/UpdateStatusToDo/{id}`
    pub const UPDATE_STATUS: [&str; 2] = ["ToDoUpdate", "UpdateStatusToDo"];
    /// `DELETE ToDoUpdate/SoftDeleteToDo/{id}`
    pub const SOFT_DELETE: [&str; 2] = ["ToDoUpdate", "SoftDeleteToDo"];
}

/// ToDo API resource.
///
/// Every method maps a non-2xx status to an [`Error`]. Use
/// [`with_raw_response`](Self::with_raw_response) to inspect the status
/// yourself.
///
/// The resource does not keep the [`Client`](crate::Client) alive; once every
/// client handle is dropped its calls fail with [`Error::HttpClient`].
#[derive(Clone)]
pub struct ToDos {
    client: WeakClient,
}

impl ToDos {
    /// Create a new ToDos resource.
    pub(crate) fn new(client: WeakClient) -> Self {
        Self { client }
    }

    /// List all active items.
    pub async fn list(&self) -> Result<Vec<ToDoItem>> {
        self.with_raw_response().list().await?.parse_result()
    }

    /// List all soft-deleted items.
    pub async fn list_deleted(&self) -> Result<Vec<ToDoItem>> {
        self.with_raw_response().list_deleted().await?.parse_result()
    }

    /// Fetch one item by id.
    pub async fn get(&self, id: &str) -> Result<ToDoItem> {
        self.with_raw_response().get(id).await?.parse_result()
    }

    /// Create an item and return the server's copy of it.
    pub async fn create(&self, item: &ToDoItem) -> Result<ToDoItem> {
        self.with_raw_response().create(item).await?.parse_result()
    }

    /// Replace name and description of the item identified by `item.id`.
    pub async fn update(&self, item: &ToDoItem) -> Result<ToDoItem> {
        self.with_raw_response().update(item).await?.parse_result()
    }

    /// Change only the status of an item.
    pub async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<ToDoItem> {
        self.with_raw_response()
            .update_status(id, update)
            .await?
            .parse_result()
    }

    /// Soft-delete an item.
    pub async fn soft_delete(&self, id: &str) -> Result<()> {
        self.with_raw_response()
            .soft_delete(id)
            .await?
            .error_for_status()
            .map(drop)
    }

    /// Call the diagnostic endpoint that makes the server fail.
    ///
    /// Against a healthy deployment this always returns
    /// [`Error::InternalServerError`].
    pub async fn trigger_server_error(&self) -> Result<()> {
        self.with_raw_response()
            .trigger_server_error()
            .await?
            .error_for_status()
            .map(drop)
    }

    /// Switch to raw response mode.
    ///
    /// The returned wrapper has the same methods but hands back the
    /// [`Response`] whatever its status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use todo_blackbird::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let response = client.todos()
    ///     .with_raw_response()
    ///     .get("nonexistent-id")
    ///     .await?;
    ///
    /// assert_eq!(response.status().as_u16(), 404);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_raw_response(&self) -> ToDosRaw {
        ToDosRaw {
            client: self.client.clone(),
        }
    }
}

/// ToDos resource in raw response mode.
///
/// Only transport failures and locally rejected requests are errors here.
#[derive(Clone)]
pub struct ToDosRaw {
    client: WeakClient,
}

impl ToDosRaw {
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        self.client.upgrade()?.request(method, segments)
    }

    /// `GET ToDo/GetAllToDos`
    pub async fn list(&self) -> Result<Response> {
        self.request(Method::GET, &routes::LIST)?.send().await
    }

    /// `GET ToDo/GetAllToDosDelete`
    pub async fn list_deleted(&self) -> Result<Response> {
        self.request(Method::GET, &routes::LIST_DELETED)?
            .send()
            .await
    }

    /// `GET ToDo/GetToDoById/{id}`
    pub async fn get(&self, id: &str) -> Result<Response> {
        self.request(Method::GET, &with_id(routes::GET, id))?
            .send()
            .await
    }

    /// `POST ToDoCreate/CreateToDo`
    pub async fn create(&self, item: &ToDoItem) -> Result<Response> {
        self.request(Method::POST, &routes::CREATE)?
            .json(item)?
            .send()
            .await
    }

    /// `PUT ToDoUpdate/UpdateToDo/{id}`, with the id taken from the item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] without sending anything if the item
    /// has no id.
    pub async fn update(&self, item: &ToDoItem) -> Result<Response> {
        let id = item
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::InvalidRequest("update requires an item id".to_string()))?;

        self.request(Method::PUT, &with_id(routes::UPDATE, id))?
            .json(item)?
            .send()
            .await
    }

    /// `PUT ToDoUpdate/UpdateStatusToDo/{id}`
    pub async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<Response> {
        self.request(Method::PUT, &with_id(routes::UPDATE_STATUS, id))?
            .json(update)?
            .send()
            .await
    }

    /// `DELETE ToDoUpdate/SoftDeleteToDo/{id}`
    pub async fn soft_delete(&self, id: &str) -> Result<Response> {
        self.request(Method::DELETE, &with_id(routes::SOFT_DELETE, id))?
            .send()
            .await
    }

    /// `GET ToDo/TriggerServerError`
    pub async fn trigger_server_error(&self) -> Result<Response> {
        self.request(Method::GET, &routes::TRIGGER_SERVER_ERROR)?
            .send()
            .await
    }
}

pub(crate) fn with_id<'a>(route: [&'a str; 2], id: &'a str) -> [&'a str; 3] {
    [route[0], route[1], id]
}

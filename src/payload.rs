//! Request payloads and the request/response envelope.
//!
//! Hosts that speak JSON (agent harnesses, line protocols) deserialize a
//! [`Request`], hand it to [`TodoStore::dispatch`], and serialize the
//! [`Response`]. A request is tagged by `op`:
//!
//! ```json
//! {"op": "create", "content": "buy milk"}
//! {"op": "toggle", "id": "9b2f6c1e-..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::domain::Item;
use crate::error::TodoError;
use crate::id::IdGenerator;
use crate::store::TodoStore;

/// Payload for creating a new item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    /// Text of the item
    pub content: String,
}

/// Payload for looking up one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindPayload {
    pub id: String,
}

/// Payload for flipping an item's completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TogglePayload {
    pub id: String,
}

/// Payload for deleting an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePayload {
    pub id: String,
}

/// One store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// List every item
    Index,
    Find(FindPayload),
    Create(CreatePayload),
    Toggle(TogglePayload),
    Remove(RemovePayload),
}

/// Outcome of a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Response {
    /// Reply to `index`
    Items { items: Vec<Item> },

    /// Reply to `find` (None when absent) and `create`
    Item { item: Option<Item> },

    /// Reply to a successful `toggle` or `remove`
    Ok,

    /// The operation failed; the store is unchanged
    Error { kind: String, message: String },
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<TodoError> for Response {
    fn from(err: TodoError) -> Self {
        Response::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl<I: IdGenerator, C: Clock> TodoStore<I, C> {
    /// Run one request against the store.
    pub fn dispatch(&mut self, request: Request) -> Response {
        let result = match request {
            Request::Index => Ok(Response::Items {
                items: self.list().to_vec(),
            }),
            Request::Find(FindPayload { id }) => Ok(Response::Item {
                item: self.find(&id).cloned(),
            }),
            Request::Create(CreatePayload { content }) => Ok(Response::Item {
                item: Some(self.create(content)),
            }),
            Request::Toggle(TogglePayload { id }) => self.toggle(&id).map(|()| Response::Ok),
            Request::Remove(RemovePayload { id }) => self.remove(&id).map(|()| Response::Ok),
        };

        result.unwrap_or_else(Response::from)
    }
}

//! Request builders for the users resource

use serde_json::Value;

use crate::{
    error::PanelResult,
    models::{UserId, UserPayload},
    transport::{ApiRequest, HttpMethod},
};

/// The users collection endpoint and its per-resource paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersEndpoint {
    collection: String,
}

impl UsersEndpoint {
    pub fn new(collection: impl Into<String>) -> Self {
        let collection: String = collection.into();
        Self {
            collection: collection.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// `{collection}/{id}`
    pub fn resource(&self, id: &UserId) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub fn list(&self) -> ApiRequest {
        self.request(HttpMethod::Get, self.collection.clone(), None)
    }

    pub fn get(&self, id: &UserId) -> ApiRequest {
        self.request(HttpMethod::Get, self.resource(id), None)
    }

    pub fn create(&self, payload: &UserPayload) -> PanelResult<ApiRequest> {
        Ok(self.request(
            HttpMethod::Post,
            self.collection.clone(),
            Some(serde_json::to_value(payload)?),
        ))
    }

    pub fn update(&self, id: &UserId, payload: &UserPayload) -> PanelResult<ApiRequest> {
        Ok(self.request(
            HttpMethod::Put,
            self.resource(id),
            Some(serde_json::to_value(payload)?),
        ))
    }

    pub fn delete(&self, id: &UserId) -> ApiRequest {
        self.request(HttpMethod::Delete, self.resource(id), None)
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<Value>) -> ApiRequest {
        ApiRequest { method, url, body }
    }
}

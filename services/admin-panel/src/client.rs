//! The admin panel client: load, render, save, edit and delete users.
//!
//! Every flow ends at the page: failures become notifications or error rows
//! and are never retried. Each method also returns an outcome value so the
//! host can see what happened.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    api::UsersEndpoint,
    confirm::{Confirm, DELETE_PROMPT},
    document::{ClickTarget, Document, ErrorSlot, FormField, PlaceholderTone, SubmitEvent, UserTable},
    error::{PanelError, PanelResult},
    models::{ApiErrorBody, User, UserId},
    notify::Notifier,
    render::{
        ADMINS_LOAD_FAILED, NO_ADMINS, NO_USERS, USERS_LOAD_FAILED, UserPartition,
        partition_users, placeholder, user_rows,
    },
    transport::{ApiResponse, Transport},
    validation::{UserForm, ValidationErrors, validate},
};

pub const MSG_LOAD_FAILED: &str = "Failed to load users.";
pub const MSG_CREATED: &str = "User added successfully!";
pub const MSG_UPDATED: &str = "User updated successfully!";
pub const MSG_SAVE_FAILED: &str = "Save failed.";
pub const MSG_EDIT_LOADED: &str = "Loaded user for editing.";
pub const MSG_EDIT_FAILED: &str = "Failed to load user.";
pub const MSG_DELETED: &str = "User deleted.";
pub const MSG_DELETE_FAILED: &str = "Delete failed.";

/// Status the API answers a successful delete with
const NO_CONTENT: u16 = 204;

/// Result of [`AdminPanelClient::fetch_users`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { admins: usize, others: usize },
    Failed,
}

/// Result of [`AdminPanelClient::save_user`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was sent
    Invalid(ValidationErrors),
    Created,
    Updated,
    /// Message shown to the operator
    Failed(String),
}

/// Result of [`AdminPanelClient::edit_user`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Loaded(User),
    Failed,
}

/// Result of [`AdminPanelClient::delete_user`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation declined, nothing was sent
    Cancelled,
    Deleted,
    Failed,
}

/// Actions dispatched from a table click
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub edit: Option<EditOutcome>,
    pub delete: Option<DeleteOutcome>,
}

/// Admin panel client with injected page, transport and confirmation
#[derive(Clone)]
pub struct AdminPanelClient {
    transport: Arc<dyn Transport>,
    document: Arc<dyn Document>,
    confirm: Arc<dyn Confirm>,
    endpoint: UsersEndpoint,
    notifier: Notifier,
}

impl AdminPanelClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        document: Arc<dyn Document>,
        confirm: Arc<dyn Confirm>,
        endpoint: UsersEndpoint,
        notifier: Notifier,
    ) -> Self {
        Self {
            transport,
            document,
            confirm,
            endpoint,
            notifier,
        }
    }

    pub fn endpoint(&self) -> &UsersEndpoint {
        &self.endpoint
    }

    /// Initial page load
    pub async fn mount(&self) -> FetchOutcome {
        info!("Mounting admin panel against {}", self.endpoint.collection());
        self.fetch_users().await
    }

    /// Show a notification that clears itself
    pub fn show_message(&self, message: &str, is_error: bool) {
        self.notifier.show(message, is_error);
    }

    /// Reload the whole collection and render both tables
    pub async fn fetch_users(&self) -> FetchOutcome {
        match self.load_users().await {
            Ok(users) => {
                let partition = partition_users(users);
                let outcome = FetchOutcome::Rendered {
                    admins: partition.admins.len(),
                    others: partition.others.len(),
                };
                self.render_users(&partition);
                info!("Rendered {} users", partition.len());
                outcome
            }
            Err(e) => {
                error!("Failed to load users: {}", e);
                self.document.render_table(
                    UserTable::Admin,
                    vec![placeholder(ADMINS_LOAD_FAILED, PlaceholderTone::Error)],
                );
                self.document.render_table(
                    UserTable::User,
                    vec![placeholder(USERS_LOAD_FAILED, PlaceholderTone::Error)],
                );
                self.show_message(MSG_LOAD_FAILED, true);
                FetchOutcome::Failed
            }
        }
    }

    pub fn render_users(&self, partition: &UserPartition) {
        self.document
            .render_table(UserTable::Admin, user_rows(&partition.admins, NO_ADMINS));
        self.document
            .render_table(UserTable::User, user_rows(&partition.others, NO_USERS));
    }

    async fn load_users(&self) -> PanelResult<Vec<User>> {
        let response = self.transport.send(self.endpoint.list()).await?;
        if !response.is_success() {
            return Err(PanelError::Status(response.status));
        }
        Ok(response.json()?)
    }

    /// Form submit handler
    pub async fn handle_submit(&self, event: &mut SubmitEvent) -> SaveOutcome {
        event.prevent_default();
        self.save_user().await
    }

    /// Validate the form, then create or update
    pub async fn save_user(&self) -> SaveOutcome {
        let form = UserForm::read(self.document.as_ref());

        for slot in [ErrorSlot::Name, ErrorSlot::Email, ErrorSlot::Password] {
            self.document.set_error(slot, "");
        }

        let payload = match validate(&form) {
            Ok(payload) => payload,
            Err(errors) => {
                for (slot, message) in errors.entries() {
                    self.document.set_error(slot, message);
                }
                warn!("User form rejected: {:?}", errors);
                return SaveOutcome::Invalid(errors);
            }
        };

        let request = match &form.id {
            None => self.endpoint.create(&payload),
            Some(id) => self.endpoint.update(id, &payload),
        };

        let response = match request {
            Ok(request) => self.transport.send(request).await.map_err(PanelError::from),
            Err(e) => Err(e),
        };

        match response {
            Ok(response) if response.is_success() => {
                let (message, outcome) = match &form.id {
                    None => (MSG_CREATED, SaveOutcome::Created),
                    Some(_) => (MSG_UPDATED, SaveOutcome::Updated),
                };
                info!("Saved user {}", payload);
                self.show_message(message, false);
                self.clear_form();
                self.fetch_users().await;
                outcome
            }
            Ok(response) => {
                let message = failure_message(&response);
                warn!("Saving user {} failed with {}: {}", payload, response.status, message);
                self.show_message(&message, true);
                SaveOutcome::Failed(message)
            }
            Err(e) => {
                error!("Saving user {} failed: {}", payload, e);
                self.show_message(MSG_SAVE_FAILED, true);
                SaveOutcome::Failed(MSG_SAVE_FAILED.to_string())
            }
        }
    }

    /// Load one user into the form for editing
    ///
    /// Only the hidden id, name and email are filled; password and roles
    /// are left as they are.
    pub async fn edit_user(&self, id: &UserId) -> EditOutcome {
        match self.load_user(id).await {
            Ok(user) => {
                self.document
                    .set_value(FormField::UserId, &user.id_text());
                self.document.set_value(FormField::Name, &user.name);
                self.document.set_value(FormField::Email, &user.email);
                info!("Loaded user {} for editing", id);
                self.show_message(MSG_EDIT_LOADED, false);
                EditOutcome::Loaded(user)
            }
            Err(e) => {
                error!("Failed to load user {}: {}", id, e);
                self.show_message(MSG_EDIT_FAILED, true);
                EditOutcome::Failed
            }
        }
    }

    async fn load_user(&self, id: &UserId) -> PanelResult<User> {
        let response = self.transport.send(self.endpoint.get(id)).await?;
        if !response.is_success() {
            return Err(PanelError::Status(response.status));
        }
        Ok(response.json()?)
    }

    /// Delete a user after confirmation
    pub async fn delete_user(&self, id: &UserId) -> DeleteOutcome {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            return DeleteOutcome::Cancelled;
        }

        match self.transport.send(self.endpoint.delete(id)).await {
            Ok(response) if response.status == NO_CONTENT => {
                info!("Deleted user {}", id);
                self.show_message(MSG_DELETED, false);
                self.fetch_users().await;
                DeleteOutcome::Deleted
            }
            Ok(response) => {
                warn!("Deleting user {} answered {}", id, response.status);
                self.show_message(MSG_DELETE_FAILED, true);
                DeleteOutcome::Failed
            }
            Err(e) => {
                error!("Deleting user {} failed: {}", id, e);
                self.show_message(MSG_DELETE_FAILED, true);
                DeleteOutcome::Failed
            }
        }
    }

    /// Delegated click handler for both table bodies
    pub async fn handle_table_click(&self, target: &ClickTarget) -> ClickOutcome {
        let id = UserId::new(target.data_id.clone().unwrap_or_default());
        let mut outcome = ClickOutcome::default();

        if target.has_class("edit") {
            outcome.edit = Some(self.edit_user(&id).await);
        }
        if target.has_class("delete") {
            outcome.delete = Some(self.delete_user(&id).await);
        }
        outcome
    }

    /// Reset the form, the hidden id and every inline error
    pub fn clear_form(&self) {
        self.document.reset_form();
        self.document.set_value(FormField::UserId, "");
        for slot in ErrorSlot::ALL {
            self.document.set_error(slot, "");
        }
    }
}

/// `message` from the error body, or the generic fallback
fn failure_message(response: &ApiResponse) -> String {
    response
        .json::<ApiErrorBody>()
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| MSG_SAVE_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_server_text() {
        let response = ApiResponse::new(409, r#"{"message":"Email is already in use!"}"#);
        assert_eq!(failure_message(&response), "Email is already in use!");
    }

    #[test]
    fn failure_message_falls_back() {
        for body in ["", "Email is already in use!", r#"{"error":"Conflict"}"#, r#"{"message":""}"#] {
            let response = ApiResponse::new(409, body);
            assert_eq!(failure_message(&response), MSG_SAVE_FAILED);
        }
    }
}

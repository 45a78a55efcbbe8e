//! The page surface the panel reads from and renders into.
//!
//! [`Document`] covers exactly the elements the panel touches: the user
//! form, its inline error texts, the two table bodies and the notification
//! box. Implementations use interior mutability so the notification timer
//! can clear the box from a spawned task.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Input fields of the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Hidden field; empty means create mode
    UserId,
    Name,
    Email,
    Password,
    /// Comma separated role labels
    Roles,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::UserId,
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::Roles,
    ];

    /// Element id in the page markup
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::UserId => "userId",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Roles => "roles",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }
}

/// Inline error text containers next to the form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSlot {
    Name,
    Email,
    Password,
    /// Present in the markup and cleared with the form, never set by validation
    Roles,
}

impl ErrorSlot {
    pub const ALL: [ErrorSlot; 4] = [
        ErrorSlot::Name,
        ErrorSlot::Email,
        ErrorSlot::Password,
        ErrorSlot::Roles,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ErrorSlot::Name => "nameError",
            ErrorSlot::Email => "emailError",
            ErrorSlot::Password => "passwordError",
            ErrorSlot::Roles => "rolesError",
        }
    }
}

/// The two table bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserTable {
    Admin,
    User,
}

impl UserTable {
    pub fn element_id(&self) -> &'static str {
        match self {
            UserTable::Admin => "adminTableBody",
            UserTable::User => "userTableBody",
        }
    }
}

/// One rendered user row, cells already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created: String,
    pub updated: String,
}

/// Visual tone of a placeholder row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderTone {
    Muted,
    Error,
}

/// A table body row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// A user with edit/delete controls keyed by its id
    User(UserRow),
    /// A single message spanning the whole table
    Placeholder {
        message: String,
        colspan: usize,
        tone: PlaceholderTone,
    },
}

/// Notification styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient message shown in the notification box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Page surface used by the panel
pub trait Document: Send + Sync {
    fn value(&self, field: FormField) -> String;
    fn set_value(&self, field: FormField, value: &str);
    fn set_error(&self, slot: ErrorSlot, text: &str);
    /// Native form reset: every input back to empty
    fn reset_form(&self);
    /// Replace the whole table body
    fn render_table(&self, table: UserTable, rows: Vec<TableRow>);
    fn show_notification(&self, notification: Notification);
    fn clear_notification(&self);
}

/// Point-in-time copy of a [`MemoryDocument`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: String,
    pub name_error: String,
    pub email_error: String,
    pub password_error: String,
    pub roles_error: String,
    pub admin_rows: Vec<TableRow>,
    pub user_rows: Vec<TableRow>,
    pub notification: Option<Notification>,
}

impl DocumentSnapshot {
    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::UserId => &mut self.user_id,
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Roles => &mut self.roles,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::UserId => &self.user_id,
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Roles => &self.roles,
        }
    }

    pub fn error(&self, slot: ErrorSlot) -> &str {
        match slot {
            ErrorSlot::Name => &self.name_error,
            ErrorSlot::Email => &self.email_error,
            ErrorSlot::Password => &self.password_error,
            ErrorSlot::Roles => &self.roles_error,
        }
    }

    fn error_mut(&mut self, slot: ErrorSlot) -> &mut String {
        match slot {
            ErrorSlot::Name => &mut self.name_error,
            ErrorSlot::Email => &mut self.email_error,
            ErrorSlot::Password => &mut self.password_error,
            ErrorSlot::Roles => &mut self.roles_error,
        }
    }

    pub fn rows(&self, table: UserTable) -> &[TableRow] {
        match table {
            UserTable::Admin => &self.admin_rows,
            UserTable::User => &self.user_rows,
        }
    }
}

/// In-memory [`Document`]
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentSnapshot>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, DocumentSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Document for MemoryDocument {
    fn value(&self, field: FormField) -> String {
        self.lock().field(field).to_string()
    }

    fn set_value(&self, field: FormField, value: &str) {
        *self.lock().field_mut(field) = value.to_string();
    }

    fn set_error(&self, slot: ErrorSlot, text: &str) {
        *self.lock().error_mut(slot) = text.to_string();
    }

    fn reset_form(&self) {
        let mut state = self.lock();
        for field in FormField::ALL {
            state.field_mut(field).clear();
        }
    }

    fn render_table(&self, table: UserTable, rows: Vec<TableRow>) {
        let mut state = self.lock();
        match table {
            UserTable::Admin => state.admin_rows = rows,
            UserTable::User => state.user_rows = rows,
        }
    }

    fn show_notification(&self, notification: Notification) {
        self.lock().notification = Some(notification);
    }

    fn clear_notification(&self) {
        self.lock().notification = None;
    }
}

/// Element clicked inside a table body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub classes: Vec<String>,
    pub data_id: Option<String>,
}

impl ClickTarget {
    /// An action button as rendered in a user row
    pub fn button(class: &str, id: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            data_id: Some(id.to_string()),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Form submission event
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's own submit handling
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_form_clears_inputs_only() {
        let doc = MemoryDocument::new();
        for field in FormField::ALL {
            doc.set_value(field, "x");
        }
        doc.set_error(ErrorSlot::Name, "Name is required.");

        doc.reset_form();

        let snapshot = doc.snapshot();
        for field in FormField::ALL {
            assert_eq!(snapshot.field(field), "");
        }
        assert_eq!(snapshot.error(ErrorSlot::Name), "Name is required.");
    }

    #[test]
    fn element_ids_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_element_id(field.element_id()), Some(field));
        }
        assert_eq!(FormField::from_element_id("nameError"), None);
    }

    #[test]
    fn click_target_classes() {
        let target = ClickTarget::button("edit", "3");
        assert!(target.has_class("edit"));
        assert!(!target.has_class("delete"));
        assert_eq!(target.data_id.as_deref(), Some("3"));
    }
}

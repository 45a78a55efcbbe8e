//! Form input validation

use crate::{
    document::{Document, ErrorSlot, FormField},
    models::{UserId, UserPayload},
};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";

/// Current form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    /// Hidden id; `None` means create mode
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: String,
}

impl UserForm {
    /// Read and trim the form fields
    pub fn read(document: &dyn Document) -> Self {
        // Any non-empty hidden id, even whitespace, selects edit mode.
        let id = document.value(FormField::UserId);
        Self {
            id: (!id.is_empty()).then(|| UserId::new(id)),
            name: document.value(FormField::Name).trim().to_string(),
            email: document.value(FormField::Email).trim().to_string(),
            password: document.value(FormField::Password).trim().to_string(),
            roles: document.value(FormField::Roles).trim().to_string(),
        }
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }
}

/// Inline messages for each failed field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// (slot, message) for every failed field
    pub fn entries(&self) -> Vec<(ErrorSlot, &'static str)> {
        [
            (ErrorSlot::Name, self.name),
            (ErrorSlot::Email, self.email),
            (ErrorSlot::Password, self.password),
        ]
        .into_iter()
        .filter_map(|(slot, message)| message.map(|message| (slot, message)))
        .collect()
    }
}

/// Validate name
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    Ok(())
}

/// Validate password; only required when creating a user
pub fn validate_password(password: &str, create: bool) -> Result<(), &'static str> {
    if create && password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(())
}

/// Split the roles input on commas, trimming each segment
///
/// Empty segments are kept and duplicates are not removed.
pub fn split_roles(input: &str) -> Vec<String> {
    input.split(',').map(|role| role.trim().to_string()).collect()
}

/// Run every check and build the request payload
pub fn validate(form: &UserForm) -> Result<UserPayload, ValidationErrors> {
    let errors = ValidationErrors {
        name: validate_name(&form.name).err(),
        email: validate_email(&form.email).err(),
        password: validate_password(&form.password, form.is_create()).err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserPayload {
        name: form.name.clone(),
        email: form.email.clone(),
        password: (!form.password.is_empty()).then(|| form.password.clone()),
        roles: (!form.roles.is_empty()).then(|| split_roles(&form.roles)),
    })
}

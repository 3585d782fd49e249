//! Form Validation
//!
//! Field checks for the login, contact and add-item forms. Each returns the
//! messages to show next to the offending fields; an empty result means the
//! form can be submitted.

use packpal_core::CatalogError;

/// Form field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    /// Drop the error of a field the user is editing
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(f, _)| *f != field);
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }
}

/// Invalidates a pending simulated submit once the form closes or reopens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitGeneration(u32);

impl SubmitGeneration {
    /// Start a new generation, returning its ticket
    pub fn bump(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

/// `something@domain.tld` without whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.push(Field::Email, "Email is required");
    } else if !is_valid_email(email.trim()) {
        errors.push(Field::Email, "Please enter a valid email");
    }
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    if password.is_empty() {
        errors.push(Field::Password, "Password is required");
    }
    errors
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.push(Field::Name, "Name is required");
    }
    check_email(&mut errors, email);
    if message.trim().is_empty() {
        errors.push(Field::Message, "Message is required");
    }
    errors
}

/// User-facing text for a failed add-item call
pub fn add_item_message(error: &CatalogError) -> &'static str {
    match error {
        CatalogError::EmptyName => "Item name is required",
        CatalogError::CategoryNotFound(_) => "That category is no longer on your list",
        _ => "Could not add the item",
    }
}

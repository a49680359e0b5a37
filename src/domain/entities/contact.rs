use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::record::{NoChanges, Record};

const MAX_NAME_LENGTH: u64 = 100;
const MAX_EMAIL_LENGTH: u64 = 120;

/// Submitted contact form. Missing fields deserialize as empty strings so
/// they surface as field errors instead of a rejected payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(
        custom(function = "required"),
        length(max = MAX_NAME_LENGTH, message = "Name is too long.")
    )]
    pub name: String,

    #[validate(
        custom(function = "required"),
        email(message = "Invalid email address."),
        length(max = MAX_EMAIL_LENGTH, message = "Email is too long.")
    )]
    pub email: String,

    #[validate(custom(function = "required"))]
    pub message: String,
}

impl ContactForm {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Moves the fields into a row ready for persistence; call `trimmed` first.
    pub fn into_new_contact(self) -> NewContact {
        NewContact {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("This field is required."));
        return Err(err);
    }
    Ok(())
}

/// Inbound inquiry log entry. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewContact {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email, length(max = MAX_EMAIL_LENGTH))]
    pub email: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl Record for Contact {
    type New = NewContact;
    type Changes = NoChanges;

    const LABEL: &'static str = "Contact";
    const EDITABLE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, created_at: DateTime<Utc>, new: &NewContact) -> Self {
        Contact {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            message: new.message.clone(),
            created_at,
        }
    }

    fn apply_changes(&mut self, _changes: &NoChanges) {}
}

//! Guest contact details submitted on the reservation form.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact fields a visitor supplies before a reservation is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GuestDetails {
    /// Given name.
    #[validate(length(min = 3, message = "This field must be at least 3 characters long"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 3, message = "This field must be at least 3 characters long"))]
    pub last_name: String,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "This field cannot be blank"))]
    pub phone: String,
}

impl GuestDetails {
    /// Build details from raw form input, trimming surrounding whitespace.
    pub fn new(
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        email: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Self {
        Self {
            first_name: first_name.as_ref().trim().to_string(),
            last_name: last_name.as_ref().trim().to_string(),
            email: email.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
        }
    }
}

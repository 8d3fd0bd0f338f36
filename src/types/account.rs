use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::error::FieldErrors;

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

/// Registration payload as received over the wire. Every field is optional here
/// so that missing values surface as field errors instead of parse failures.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Validate)]
pub struct RAccountRegister {
    #[validate(length(max = 250, message = "Ensure this field has no more than 250 characters."))]
    pub referral_code: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 50, message = "Ensure this field has between 1 and 50 characters.")
    )]
    pub full_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    /// Stored exactly as sent, but a whitespace-only value counts as blank.
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRes {
    pub data: String,
}

/// Input to the account manager. Email is normalized by the manager, not here.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub full_name: String,
    pub password: Option<String>,
    pub referral_code: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

fn missing(field: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.add(field, REQUIRED);
    errors
}

impl RAccountRegister {
    /// Checks field constraints and turns the payload into a `NewAccount`.
    /// Uniqueness needs the database and is checked by the caller.
    pub fn validated(self) -> Result<NewAccount, FieldErrors> {
        let payload = RAccountRegister {
            referral_code: trimmed(self.referral_code),
            full_name: trimmed(self.full_name),
            email: trimmed(self.email),
            password: self.password,
        };

        let mut errors = match payload.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };
        if payload.password.as_deref().is_some_and(|p| p.trim().is_empty()) {
            errors.add("password", BLANK);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let email = payload.email.ok_or_else(|| missing("email"))?;
        let full_name = payload.full_name.ok_or_else(|| missing("full_name"))?;

        Ok(NewAccount {
            email,
            full_name,
            password: payload.password,
            referral_code: payload.referral_code.filter(|code| !code.is_empty()),
        })
    }
}

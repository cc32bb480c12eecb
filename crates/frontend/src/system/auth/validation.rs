use contracts::system::session::{
    LoginRequest, PasswordChangeRequest, RegistrationRequest, SellerSession,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use super::AuthError;

const LOGIN_MIN_PASSWORD: usize = 6;
const MIN_PASSWORD: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Field errors of the registration form, keyed by form field name
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("Registration form has {} invalid field(s)", .0.len())]
pub struct RegistrationErrors(pub BTreeMap<&'static str, &'static str>);

impl RegistrationErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeError {
    #[error("New password and confirmation password must match")]
    Mismatch,

    #[error("Password must be at least 8 characters long")]
    TooShort,
}

/// Session id such as "s-4f1c09ab2"
pub fn new_session_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("s-{}", &raw[..9])
}

/// Mock credential check: any email with "@" and a 6+ character password
pub fn login(request: &LoginRequest) -> Result<SellerSession, AuthError> {
    let email = request.email.trim();
    if !email.contains('@') || request.password.chars().count() < LOGIN_MIN_PASSWORD {
        log::warn!("Login rejected for {:?}", email);
        return Err(AuthError::InvalidCredentials);
    }

    let name = email.split('@').next().unwrap_or_default().to_string();
    log::info!("Seller logged in: {}", email);

    Ok(SellerSession {
        id: new_session_id(),
        email: email.to_string(),
        name,
    })
}

pub fn validate_registration(request: &RegistrationRequest) -> Result<(), RegistrationErrors> {
    let mut errors = BTreeMap::new();

    if request.company_name.trim().is_empty() {
        errors.insert("companyName", "Company name is required");
    }

    if request.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !EMAIL_RE.is_match(&request.email) {
        errors.insert("email", "Email is invalid");
    }

    if request.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if request.password.chars().count() < MIN_PASSWORD {
        errors.insert("password", "Password must be at least 8 characters");
    }

    if request.password != request.confirm_password {
        errors.insert("confirmPassword", "Passwords do not match");
    }

    if !request.agree_terms {
        errors.insert("agreeTerms", "You must agree to the terms and conditions");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RegistrationErrors(errors))
    }
}

pub fn validate_password_change(
    request: &PasswordChangeRequest,
) -> Result<(), PasswordChangeError> {
    if request.new_password != request.confirm_password {
        return Err(PasswordChangeError::Mismatch);
    }
    if !request.new_password.is_empty() && request.new_password.chars().count() < MIN_PASSWORD {
        return Err(PasswordChangeError::TooShort);
    }
    Ok(())
}

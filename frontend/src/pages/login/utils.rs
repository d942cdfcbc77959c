use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        validate_credentials(&self.email.get_untracked(), &self.password.get_untracked())
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_credentials_trims_email() {
        let request = validate_credentials("  a@x.com ", "pw").unwrap();
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn validate_credentials_rejects_missing_fields() {
        assert_eq!(
            validate_credentials(" ", "pw").unwrap_err(),
            ApiError::validation("Email is required")
        );
        assert_eq!(
            validate_credentials("ax.com", "pw").unwrap_err(),
            ApiError::validation("Enter a valid email address")
        );
        assert_eq!(
            validate_credentials("a@x.com", "").unwrap_err(),
            ApiError::validation("Password is required")
        );
    }
}

use crate::api::{ApiError, Role, SignupRequest};
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<String>,
    pub team: RwSignal<String>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee.as_str().to_string()),
            team: create_rw_signal(String::new()),
        }
    }
}

impl SignupFormState {
    pub fn to_request(&self) -> Result<SignupRequest, ApiError> {
        validate_signup(SignupInput {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            role: self.role.get_untracked(),
            team: self.team.get_untracked(),
        })
    }
}

pub struct SignupInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub team: String,
}

pub fn parse_role(value: &str) -> Option<Role> {
    match value {
        "admin" => Some(Role::Admin),
        "employee" => Some(Role::Employee),
        _ => None,
    }
}

pub fn validate_signup(input: SignupInput) -> Result<SignupRequest, ApiError> {
    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    let email = input.email.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ApiError::validation("First and last name are required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation("Enter a valid email address"));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    let role = parse_role(&input.role).ok_or_else(|| ApiError::validation("Select a role"))?;
    Ok(SignupRequest {
        email: email.to_string(),
        password: input.password,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
        team: input.team.trim().to_string(),
    })
}

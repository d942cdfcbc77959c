use crate::api::{ApiError, CreateTravelRequest};
use leptos::*;

pub const CREATED_MESSAGE: &str = "Travel request created successfully!";
pub const CREATE_FAILED: &str = "Failed to create request";
pub const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy)]
pub struct TravelRequestFormState {
    pub destination: RwSignal<String>,
    pub purpose: RwSignal<String>,
}

impl Default for TravelRequestFormState {
    fn default() -> Self {
        Self {
            destination: create_rw_signal(String::new()),
            purpose: create_rw_signal(String::new()),
        }
    }
}

impl TravelRequestFormState {
    pub fn to_payload(&self) -> Result<CreateTravelRequest, ApiError> {
        validate_request(
            &self.destination.get_untracked(),
            &self.purpose.get_untracked(),
        )
    }

    pub fn reset(&self) {
        self.destination.set(String::new());
        self.purpose.set(String::new());
    }
}

pub fn validate_request(destination: &str, purpose: &str) -> Result<CreateTravelRequest, ApiError> {
    let destination = destination.trim();
    let purpose = purpose.trim();
    if destination.is_empty() {
        return Err(ApiError::validation("Destination is required"));
    }
    if purpose.is_empty() {
        return Err(ApiError::validation("Purpose is required"));
    }
    Ok(CreateTravelRequest {
        destination: destination.to_string(),
        purpose: purpose.to_string(),
    })
}

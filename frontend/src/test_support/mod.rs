#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, TravelRequest, TravelStatus, User};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: "u-admin".into(),
            email: "admin@example.com".into(),
            first_name: "Admin".into(),
            last_name: "User".into(),
            role: Role::Admin,
            team: "Operations".into(),
        }
    }

    pub fn employee_user() -> User {
        User {
            id: "u-employee".into(),
            email: "employee@example.com".into(),
            first_name: "Erin".into(),
            last_name: "Employee".into(),
            role: Role::Employee,
            team: "Sales".into(),
        }
    }

    pub fn travel_request(id: &str, destination: &str, status: TravelStatus) -> TravelRequest {
        TravelRequest {
            id: id.into(),
            requester: None,
            employee_name: Some("Erin Employee".into()),
            employee_email: Some("employee@example.com".into()),
            destination: destination.into(),
            purpose: "Client meeting".into(),
            status,
            created_at: Some("2025-01-02T10:00:00Z".into()),
            updated_at: None,
            approved_at: None,
            approved_by: None,
            rejected_at: None,
            comments: None,
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
            error: None,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}

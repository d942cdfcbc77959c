use super::utils::SignupFormState;
use crate::api::{ApiError, SignupRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub signup_action: Action<SignupRequest, Result<(), ApiError>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let form = SignupFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let signup_action = auth::use_signup_action();

    create_effect(move |_| match signup_action.value().get() {
        Some(Ok(())) => {
            error.set(None);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/dashboard");
            }
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    SignupViewModel {
        form,
        error,
        signup_action,
    }
}

impl SignupViewModel {
    pub fn submit(&self) {
        if self.signup_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.signup_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

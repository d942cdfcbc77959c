use super::utils::{TravelRequestFormState, CREATED_MESSAGE, CREATE_FAILED, REDIRECT_DELAY_MS};
use crate::{
    api::{ApiClient, ApiError, CreateTravelRequest},
    pages::my_requests::repository::MyRequestsRepository,
    utils::message::MessageState,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct NewRequestViewModel {
    pub form: TravelRequestFormState,
    pub message: RwSignal<MessageState>,
    pub create_action: Action<CreateTravelRequest, Result<(), ApiError>>,
}

/// Returns true when the caller should schedule the redirect.
fn apply_create_result(
    result: Option<Result<(), ApiError>>,
    form: TravelRequestFormState,
    message: RwSignal<MessageState>,
) -> bool {
    match result {
        Some(Ok(())) => {
            message.update(|msg| msg.set_success(CREATED_MESSAGE));
            form.reset();
            true
        }
        Some(Err(err)) => {
            log::warn!("{}: {}", CREATE_FAILED, err);
            message.update(|msg| msg.set_error(err));
            false
        }
        None => false,
    }
}

fn schedule_redirect(target: &'static str) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    });
}

impl NewRequestViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(MyRequestsRepository::new(api));
        let form = TravelRequestFormState::default();
        let message = create_rw_signal(MessageState::default());

        let create_action = create_action(move |payload: &CreateTravelRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create(payload).await.map(|_| ()) }
        });

        create_effect(move |_| {
            if apply_create_result(create_action.value().get(), form, message) {
                schedule_redirect("/my-requests");
            }
        });

        Self {
            form,
            message,
            create_action,
        }
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.create_action.dispatch(payload);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

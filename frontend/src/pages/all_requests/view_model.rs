use crate::{
    api::{ApiClient, ApiError, TravelRequest},
    pages::all_requests::repository::AdminRequestsRepository,
    state::request_list::{LocalPatch, RequestList},
    utils::filter::{filter_requests, StatusFilter},
};
use leptos::*;

pub const LOAD_FAILED: &str = "Failed to load requests";
pub const APPROVE_FAILED: &str = "Failed to approve request";
pub const DELETE_FAILED: &str = "Failed to delete request";

#[derive(Clone, Copy)]
pub struct AllRequestsViewModel {
    pub query: RwSignal<String>,
    pub status_filter: RwSignal<StatusFilter>,
    pub list: RwSignal<RequestList>,
    pub action_error: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
    pub requests_resource: Resource<u32, Result<Vec<TravelRequest>, ApiError>>,
    pub approve_action: Action<String, Result<String, ApiError>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
}

fn apply_fetch_result(
    result: Option<Result<Vec<TravelRequest>, ApiError>>,
    list: RwSignal<RequestList>,
) {
    match result {
        Some(Ok(fresh)) => list.update(|l| l.reconcile(fresh)),
        Some(Err(err)) => log::warn!("{}: {}", LOAD_FAILED, err),
        None => {}
    }
}

fn apply_approve_result(
    result: Option<Result<String, ApiError>>,
    list: RwSignal<RequestList>,
    action_error: RwSignal<Option<String>>,
) {
    match result {
        Some(Ok(id)) => {
            action_error.set(None);
            list.update(|l| l.apply(LocalPatch::Approved(id)));
        }
        Some(Err(err)) => {
            log::warn!("{}: {}", APPROVE_FAILED, err);
            action_error.set(Some(APPROVE_FAILED.to_string()));
        }
        None => {}
    }
}

fn apply_delete_result(
    result: Option<Result<String, ApiError>>,
    list: RwSignal<RequestList>,
    action_error: RwSignal<Option<String>>,
    pending_delete: RwSignal<Option<String>>,
) {
    match result {
        Some(Ok(id)) => {
            action_error.set(None);
            list.update(|l| l.apply(LocalPatch::Removed(id)));
        }
        Some(Err(err)) => {
            log::warn!("{}: {}", DELETE_FAILED, err);
            action_error.set(Some(DELETE_FAILED.to_string()));
        }
        None => return,
    }
    pending_delete.set(None);
}

impl AllRequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdminRequestsRepository::new(api));

        let query = create_rw_signal(String::new());
        let status_filter = create_rw_signal(StatusFilter::All);
        let list = create_rw_signal(RequestList::default());
        let action_error = create_rw_signal(None::<String>);
        let pending_delete = create_rw_signal(None::<String>);
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_all().await }
            },
        );

        let approve_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.approve(id).await }
        });

        let delete_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.delete(id).await }
        });

        create_effect(move |_| apply_fetch_result(requests_resource.get(), list));
        create_effect(move |_| {
            apply_approve_result(approve_action.value().get(), list, action_error)
        });
        create_effect(move |_| {
            apply_delete_result(
                delete_action.value().get(),
                list,
                action_error,
                pending_delete,
            )
        });

        Self {
            query,
            status_filter,
            list,
            action_error,
            pending_delete,
            reload,
            requests_resource,
            approve_action,
            delete_action,
        }
    }

    pub fn visible_requests(&self) -> Signal<Vec<TravelRequest>> {
        let list = self.list;
        let query = self.query;
        let status_filter = self.status_filter;
        Signal::derive(move || {
            let rows = list.with(RequestList::view);
            filter_requests(&rows, &query.get(), status_filter.get(), true)
        })
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn on_approve(&self) -> Callback<String> {
        let action = self.approve_action;
        Callback::new(move |id: String| action.dispatch(id))
    }

    pub fn on_request_delete(&self) -> Callback<String> {
        let pending_delete = self.pending_delete;
        Callback::new(move |id: String| pending_delete.set(Some(id)))
    }

    pub fn on_confirm_delete(&self) -> Callback<()> {
        let pending_delete = self.pending_delete;
        let action = self.delete_action;
        Callback::new(move |_| {
            if let Some(id) = pending_delete.get_untracked() {
                action.dispatch(id);
            }
        })
    }

    pub fn on_cancel_delete(&self) -> Callback<()> {
        let pending_delete = self.pending_delete;
        Callback::new(move |_| pending_delete.set(None))
    }
}

use crate::{
    api::{ApiClient, TravelRequest},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::{
        all_requests::{
            components::{filter::RequestFilterBar, table::requester_label},
            repository::AdminRequestsRepository,
        },
        my_requests::panel::empty_message,
    },
    utils::{
        filter::{filter_requests, StatusFilter},
        time::{format_date, format_date_time, MISSING},
    },
};
use leptos::*;

pub const LOAD_FAILED: &str = "Failed to load approved requests";

#[component]
pub fn ApprovedRows(requests: Vec<TravelRequest>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Destination"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Purpose"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Requested"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Approved"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Approved by"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {requests
                        .into_iter()
                        .map(|request| {
                            let (name, email) = requester_label(&request);
                            let approver = request
                                .approved_by
                                .clone()
                                .unwrap_or_else(|| MISSING.to_string());
                            view! {
                                <tr>
                                    <td class="px-4 py-2">
                                        <p class="text-sm font-medium text-fg">{name}</p>
                                        <p class="text-xs text-fg-muted">{email}</p>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">{request.destination.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted truncate max-w-xs">{request.purpose.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{format_date(request.created_at.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{format_date_time(request.approved_at.as_deref())}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{approver}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ApprovedRequestsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(AdminRequestsRepository::new(api));
    let query = create_rw_signal(String::new());
    let status_filter = create_rw_signal(StatusFilter::All);
    let requests = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_approved().await }
        },
    );

    view! {
        <Layout active="/approved-requests">
            <div class="space-y-4">
                <RequestFilterBar
                    query=query
                    status_filter=status_filter
                    placeholder="Search by employee, destination or purpose"
                />
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        requests.get().map(|result| match result {
                            Err(err) => {
                                log::warn!("{}: {}", LOAD_FAILED, err);
                                view! { <ErrorMessage message=LOAD_FAILED.to_string() /> }.into_view()
                            }
                            Ok(list) => {
                                let q = query.get();
                                let visible = filter_requests(&list, &q, StatusFilter::All, true);
                                if visible.is_empty() {
                                    view! { <EmptyState title=empty_message(&q) /> }.into_view()
                                } else {
                                    view! { <ApprovedRows requests=visible /> }.into_view()
                                }
                            }
                        })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

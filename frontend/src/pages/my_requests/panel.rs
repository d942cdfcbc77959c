use crate::{
    api::{ApiClient, TravelRequest},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        status_badge::StatusBadge,
    },
    pages::my_requests::repository::MyRequestsRepository,
    utils::{
        filter::{filter_requests, StatusFilter},
        time::format_date,
    },
};
use leptos::*;
use web_sys::HtmlInputElement;

pub const LOAD_FAILED: &str = "Failed to load requests";

pub fn empty_message(query: &str) -> &'static str {
    if query.trim().is_empty() {
        "No requests found"
    } else {
        "No matching requests found"
    }
}

#[component]
pub fn RequestRows(requests: Vec<TravelRequest>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Destination"</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Purpose"</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Created"</th>
                    <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                    <th class="px-4 py-2"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {requests
                    .into_iter()
                    .map(|request| {
                        let href = format!("/my-requests/{}", request.id);
                        view! {
                            <tr>
                                <td class="px-4 py-2 text-sm font-medium text-fg">{request.destination.clone()}</td>
                                <td class="px-4 py-2 text-sm text-fg-muted truncate max-w-xs">{request.purpose.clone()}</td>
                                <td class="px-4 py-2 text-sm text-fg-muted">{format_date(request.created_at.as_deref())}</td>
                                <td class="px-4 py-2"><StatusBadge status=request.status /></td>
                                <td class="px-4 py-2 text-right">
                                    <a href=href class="text-sm text-action-primary-bg hover:underline">"View details"</a>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(MyRequestsRepository::new(api));
    let query = create_rw_signal(String::new());
    let requests = create_resource(
        || (),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list().await }
        },
    );

    view! {
        <Layout active="/my-requests">
            <div class="space-y-4">
                <div class="flex flex-col sm:flex-row gap-3 sm:items-center sm:justify-between">
                    <input
                        type="search"
                        placeholder="Search by destination or purpose"
                        class="w-full sm:max-w-sm px-3 py-2 border border-border rounded-md text-sm"
                        prop:value=query
                        on:input=move |ev| query.set(event_target::<HtmlInputElement>(&ev).value())
                    />
                    <a
                        href="/new-request"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    >
                        "New Request"
                    </a>
                </div>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || {
                        requests.get().map(|result| match result {
                            Err(err) => {
                                log::warn!("{}: {}", LOAD_FAILED, err);
                                view! { <ErrorMessage message=LOAD_FAILED.to_string() /> }.into_view()
                            }
                            Ok(list) => {
                                let q = query.get();
                                let visible = filter_requests(&list, &q, StatusFilter::All, false);
                                if visible.is_empty() {
                                    view! { <EmptyState title=empty_message(&q) /> }.into_view()
                                } else {
                                    view! { <RequestRows requests=visible /> }.into_view()
                                }
                            }
                        })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

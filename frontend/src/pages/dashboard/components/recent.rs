use crate::{api::TravelRequest, components::status_badge::StatusBadge};
use leptos::*;

#[component]
pub fn RecentRequests(requests: Vec<TravelRequest>) -> impl IntoView {
    let empty = requests.is_empty();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Recent Requests"</h3>
            <Show when=move || !empty fallback=|| view! {
                <p class="text-center py-4 text-fg-muted">"No requests found"</p>
            }>
                <ul class="space-y-4">
                    {requests
                        .iter()
                        .map(|request| view! {
                            <li class="flex items-center justify-between border-b border-border pb-2">
                                <div>
                                    <p class="font-medium text-fg">{request.destination.clone()}</p>
                                    <p class="text-sm text-fg-muted">{request.purpose.clone()}</p>
                                </div>
                                <StatusBadge status=request.status />
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Show>
            <a href="/my-requests" class="block text-center rounded-md px-4 py-2 text-sm font-medium border border-border hover:bg-surface-muted">
                "View All Requests"
            </a>
        </div>
    }
}

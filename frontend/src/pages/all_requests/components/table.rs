use crate::{
    api::TravelRequest,
    components::status_badge::StatusBadge,
    utils::time::{format_date, MISSING},
};
use leptos::*;

pub fn requester_label(request: &TravelRequest) -> (String, String) {
    (
        request
            .requester_name()
            .unwrap_or_else(|| MISSING.to_string()),
        request.requester_email().unwrap_or_default(),
    )
}

#[component]
pub fn AdminRequestTable(
    requests: Vec<TravelRequest>,
    on_approve: Callback<String>,
    on_delete: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Destination"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Purpose"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Created"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                        <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {requests
                        .into_iter()
                        .map(|request| {
                            let (name, email) = requester_label(&request);
                            let approve_id = request.id.clone();
                            let delete_id = request.id.clone();
                            let pending = request.is_pending();
                            view! {
                                <tr>
                                    <td class="px-4 py-2">
                                        <p class="text-sm font-medium text-fg">{name}</p>
                                        <p class="text-xs text-fg-muted">{email}</p>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">{request.destination.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted truncate max-w-xs">{request.purpose.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{format_date(request.created_at.as_deref())}</td>
                                    <td class="px-4 py-2"><StatusBadge status=request.status /></td>
                                    <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                        <Show when=move || pending>
                                            {
                                                let approve_id = approve_id.clone();
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="px-3 py-1 text-xs font-semibold rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_approve.call(approve_id.clone())
                                                    >
                                                        "Approve"
                                                    </button>
                                                }
                                            }
                                        </Show>
                                        <button
                                            type="button"
                                            class="px-3 py-1 text-xs font-semibold rounded-md bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                                            disabled=move || busy.get()
                                            on:click=move |_| on_delete.call(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

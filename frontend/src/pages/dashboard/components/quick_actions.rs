use leptos::*;

const LINK_CLASS: &str = "block w-full text-center rounded-md px-4 py-2 text-sm font-medium border border-border hover:bg-surface-muted";

#[component]
pub fn QuickActions(is_admin: bool) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Quick Actions"</h3>
            <a
                href="/new-request"
                class="block w-full text-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "Create New Travel Request"
            </a>
            {is_admin.then(|| view! {
                <a href="/all-requests" class=LINK_CLASS>"Review Pending Requests"</a>
            })}
            <a href="/my-requests" class=LINK_CLASS>"Check Request Status"</a>
        </div>
    }
}

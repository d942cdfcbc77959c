use crate::utils::filter::StatusCounts;
use leptos::*;

#[component]
pub fn SummarySection(counts: StatusCounts) -> impl IntoView {
    view! {
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
            <Metric label="Total Requests" value=counts.total hint="All travel requests" />
            <Metric label="Pending" value=counts.pending hint="Awaiting approval" />
            <Metric label="Approved" value=counts.approved hint="Ready for travel" />
            <Metric label="Rejected" value=counts.rejected hint="Not approved" />
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: usize, hint: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="mt-2 text-2xl font-bold text-fg">{value}</p>
            <p class="text-xs text-fg-muted">{hint}</p>
        </div>
    }
}

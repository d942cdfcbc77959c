use crate::api::TravelStatus;
use leptos::*;

pub fn badge_class(status: TravelStatus) -> &'static str {
    match status {
        TravelStatus::Pending => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-status-warning-bg text-status-warning-text"
        }
        TravelStatus::Approved => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text"
        }
        TravelStatus::Rejected => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-status-error-bg text-status-error-text"
        }
    }
}

#[component]
pub fn StatusBadge(status: TravelStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.label()}</span> }
}

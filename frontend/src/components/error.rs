use crate::api::ApiError;
use leptos::*;

fn headline(error: &ApiError) -> String {
    match error {
        ApiError::Unauthenticated => "Your session has ended. Please sign in again.".to_string(),
        other => other.to_string(),
    }
}

/// Error banner for the outcome of a user action.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| headline(&e)).unwrap_or_default()}</div>
                {move || error.get().map(|e| match e {
                    ApiError::Validation(_) | ApiError::Auth(_) => ().into_view(),
                    other => {
                        let status = other
                            .status()
                            .map(|s| format!(" ({})", s))
                            .unwrap_or_default();
                        view! { <div class="text-xs opacity-75">{"Code: "}{other.code()}{status}</div> }
                            .into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

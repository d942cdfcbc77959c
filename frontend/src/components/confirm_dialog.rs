use leptos::ev::KeyboardEvent;
use leptos::*;

pub fn delete_prompt(destination: Option<&str>) -> String {
    match destination.map(str::trim).filter(|d| !d.is_empty()) {
        Some(destination) => format!(
            "Delete the travel request to {}? This cannot be undone.",
            destination
        ),
        None => "Delete this travel request? This cannot be undone.".to_string(),
    }
}

/// Asks before a travel request is deleted. Open while `destination` is
/// `Some`; the inner value names the trip when known.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] destination: Signal<Option<Option<String>>>,
    #[prop(into)] deleting: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let prompt = move || {
        destination
            .get()
            .map(|d| delete_prompt(d.as_deref()))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || destination.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Cancel"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" && !deleting.get_untracked() {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">"Delete request"</h2>
                    <p class="text-sm text-fg-muted">{prompt}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            disabled=move || deleting.get()
                            on:click=move |_| on_cancel.call(())
                        >
                            "Keep request"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || deleting.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_asks_about_the_trip() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDeleteDialog
                    destination=Signal::derive(|| Some(Some("Lisbon".to_string())))
                    deleting=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("travel request to Lisbon?"));
        assert!(html.contains("Keep request"));
        assert!(html.contains("bg-action-danger-bg"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDeleteDialog
                    destination=Signal::derive(|| None)
                    deleting=Signal::derive(|| false)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Delete request"));
    }

    #[test]
    fn deleting_relabels_confirm_button() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDeleteDialog
                    destination=Signal::derive(|| Some(None))
                    deleting=Signal::derive(|| true)
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Deleting..."));
        assert!(html.contains("Delete this travel request?"));
    }
}

use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{Layout, SuccessMessage},
    },
    pages::new_request::view_model::NewRequestViewModel,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

#[component]
pub fn NewRequestPage() -> impl IntoView {
    let vm = NewRequestViewModel::new();
    let form = vm.form;
    let message = vm.message;
    let pending = vm.create_action.pending();
    let error = Signal::derive(move || message.get().error);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Layout active="/new-request">
            <div class="max-w-2xl bg-surface-elevated shadow rounded-lg border border-border">
                <div class="px-6 py-4 border-b border-border">
                    <h2 class="text-lg font-semibold text-fg">"Create New Travel Request"</h2>
                    <p class="text-sm text-fg-muted">"Submit a new travel request for approval"</p>
                </div>
                <form class="px-6 py-4 space-y-4" on:submit=on_submit>
                    <InlineErrorMessage error=error />
                    {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                    <div class="space-y-1">
                        <label for="destination" class="block text-sm font-medium text-fg">"Destination"</label>
                        <input
                            id="destination"
                            name="destination"
                            placeholder="e.g. New York, London"
                            required
                            class="block w-full px-3 py-2 border border-border rounded-md text-sm"
                            prop:value=form.destination
                            on:input=move |ev| form.destination.set(event_target::<HtmlInputElement>(&ev).value())
                        />
                    </div>
                    <div class="space-y-1">
                        <label for="purpose" class="block text-sm font-medium text-fg">"Purpose"</label>
                        <textarea
                            id="purpose"
                            name="purpose"
                            rows="4"
                            placeholder="Describe the purpose of your travel"
                            required
                            class="block w-full px-3 py-2 border border-border rounded-md text-sm"
                            prop:value=form.purpose
                            on:input=move |ev| form.purpose.set(event_target::<HtmlTextAreaElement>(&ev).value())
                        ></textarea>
                    </div>
                    <div class="flex justify-between pt-2">
                        <a
                            href="/my-requests"
                            class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        >
                            "Cancel"
                        </a>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
                        </button>
                    </div>
                </form>
            </div>
        </Layout>
    }
}

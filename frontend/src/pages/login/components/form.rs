use crate::{
    api::ApiError, components::error::InlineErrorMessage, pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-bg focus:border-action-primary-bg sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to Travel Desk"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Travel request management"
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class=INPUT_CLASS
                            placeholder="you@example.com"
                            prop:value=form.email
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class=INPUT_CLASS
                            prop:value=form.password
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.password.set(target.value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href="/signup" class="font-medium text-action-primary-bg hover:underline">"Create one"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

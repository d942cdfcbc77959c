use crate::{
    components::error::InlineErrorMessage,
    pages::signup::{utils::SignupFormState, view_model::use_signup_view_model},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement};

const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-bg focus:border-action-primary-bg sm:text-sm";

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.set(target.value());
                }
            />
        </div>
    }
}

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let form: SignupFormState = vm.form;
    let pending = vm.signup_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Create your account"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="first_name" label="First name" value=form.first_name />
                        <TextField id="last_name" label="Last name" value=form.last_name />
                    </div>
                    <TextField id="email" label="Email" input_type="email" value=form.email />
                    <TextField id="password" label="Password" input_type="password" value=form.password />
                    <div>
                        <label for="role" class="block text-sm font-medium text-fg">"Role"</label>
                        <select
                            id="role"
                            class=INPUT_CLASS
                            prop:value=form.role
                            on:change=move |ev| {
                                let target = event_target::<HtmlSelectElement>(&ev);
                                form.role.set(target.value());
                            }
                        >
                            <option value="employee">"Employee"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </div>
                    <TextField id="team" label="Team" value=form.team />

                    <InlineErrorMessage error=vm.error.into() />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href="/login" class="font-medium text-action-primary-bg hover:underline">"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signup_panel_renders_every_field() {
        let html = render_to_string(|| view! { <SignupPanel /> });
        for id in ["first_name", "last_name", "email", "password", "role", "team"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("Sign up"));
    }
}

use crate::state::auth::use_auth;
use leptos::*;

pub fn home_target(is_authenticated: bool) -> &'static str {
    if is_authenticated {
        "/dashboard"
    } else {
        "/login"
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _set_auth) = use_auth();

    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(home_target(state.is_authenticated));
        }
    });

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Travel Desk"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Request and approve business travel"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a
                                href=move || home_target(auth.get().is_authenticated)
                                class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                "Continue"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

use crate::state::auth::{use_auth, use_logout};
use leptos::*;

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/dashboard",
        label: "Dashboard",
        admin_only: false,
    },
    NavItem {
        href: "/my-requests",
        label: "My Requests",
        admin_only: false,
    },
    NavItem {
        href: "/new-request",
        label: "New Request",
        admin_only: false,
    },
    NavItem {
        href: "/all-requests",
        label: "All Requests",
        admin_only: true,
    },
    NavItem {
        href: "/approved-requests",
        label: "Approved Requests",
        admin_only: true,
    },
];

pub fn visible_nav_items(is_admin: bool) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(move |item| is_admin || !item.admin_only)
}

pub fn page_title(path: &str) -> &'static str {
    match path {
        "/dashboard" => "Dashboard",
        "/my-requests" => "My Travel Requests",
        "/new-request" => "Create New Request",
        "/all-requests" => "All Travel Requests",
        "/approved-requests" => "Approved Requests",
        _ => "Travel Management",
    }
}

fn is_active(current: &str, href: &str) -> bool {
    current == href || current.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar(#[prop(into)] active: String) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout = use_logout();
    let on_logout = move |_| {
        logout.call(());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };
    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name())
            .unwrap_or_default()
    };
    let role = move || {
        auth.get()
            .user
            .map(|user| user.role.as_str().to_string())
            .unwrap_or_default()
    };

    view! {
        <aside class="flex flex-col w-64 min-h-screen bg-surface-elevated border-r border-border">
            <div class="h-16 flex items-center px-6 border-b border-border">
                <span class="text-xl font-semibold text-fg">"Travel Desk"</span>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                {move || {
                    let current = active.clone();
                    visible_nav_items(auth.get().is_admin())
                        .map(|item| {
                            let class = if is_active(&current, item.href) {
                                "block px-3 py-2 rounded-md text-sm font-medium bg-action-ghost-bg-hover text-fg"
                            } else {
                                "block px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            };
                            view! { <a href=item.href class=class>{item.label}</a> }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="border-t border-border px-4 py-4 space-y-2">
                <div>
                    <p class="text-sm font-medium text-fg">{display_name}</p>
                    <p class="text-xs text-fg-muted capitalize">{role}</p>
                </div>
                <button
                    on:click=on_logout
                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                >
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(#[prop(into)] active: String, children: Children) -> impl IntoView {
    let title = page_title(&active);
    view! {
        <div class="min-h-screen flex bg-surface">
            <Sidebar active=active.clone()/>
            <div class="flex-1 flex flex-col">
                <header class="h-16 flex items-center px-6 bg-surface-elevated border-b border-border shadow-sm">
                    <h1 class="text-xl font-semibold text-fg">{title}</h1>
                </header>
                <main class="flex-1 max-w-7xl w-full mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

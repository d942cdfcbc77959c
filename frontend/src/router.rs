use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        all_requests::AllRequestsPage, approved_requests::ApprovedRequestsPage,
        dashboard::DashboardPage, home::HomePage, login::LoginPage,
        my_requests::MyRequestsPage, new_request::NewRequestPage,
        request_detail::RequestDetailPage, signup::SignupPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/dashboard",
    "/my-requests",
    "/my-requests/:id",
    "/new-request",
    "/all-requests",
    "/approved-requests",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/my-requests",
    "/my-requests/:id",
    "/new-request",
    "/all-requests",
    "/approved-requests",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/all-requests", "/approved-requests"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/signup"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/my-requests" view=ProtectedMyRequests/>
                    <Route path="/my-requests/:id" view=ProtectedRequestDetail/>
                    <Route path="/new-request" view=ProtectedNewRequest/>
                    <Route path="/all-requests" view=AdminAllRequests/>
                    <Route path="/approved-requests" view=AdminApprovedRequests/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedMyRequests() -> impl IntoView {
    view! { <RequireAuth><MyRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedRequestDetail() -> impl IntoView {
    view! { <RequireAuth><RequestDetailPage/></RequireAuth> }
}

#[component]
fn ProtectedNewRequest() -> impl IntoView {
    view! { <RequireAuth><NewRequestPage/></RequireAuth> }
}

#[component]
fn AdminAllRequests() -> impl IntoView {
    view! { <RequireAdmin><AllRequestsPage/></RequireAdmin> }
}

#[component]
fn AdminApprovedRequests() -> impl IntoView {
    view! { <RequireAdmin><ApprovedRequestsPage/></RequireAdmin> }
}

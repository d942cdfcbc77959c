use crate::{
    api::{ApiClient, ApiError, LoginRequest, SignupRequest, User},
    state::session::{Session, SessionManager},
    utils::storage::default_storage,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn from_session(session: Option<&Session>) -> Self {
        Self {
            user: session.map(|s| s.user.clone()),
            is_authenticated: session.is_some(),
            loading: false,
            error: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(User::is_admin).unwrap_or(false)
    }
}

fn create_auth_context(manager: &SessionManager) -> AuthContext {
    let session = manager.rehydrate();
    create_signal(AuthState::from_session(session.as_ref()))
}

/// Builds the session manager, restores any stored session and exposes the
/// gateway, the manager and the reactive auth state to descendants.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let manager = SessionManager::new(api.clone(), default_storage());
    let ctx = create_auth_context(&manager);
    provide_context(api);
    provide_context(manager);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session_manager() -> SessionManager {
    use_context::<SessionManager>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        SessionManager::new(api, default_storage())
    })
}

fn begin(set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| {
        state.loading = true;
        state.error = None;
    });
}

fn finish(
    result: Result<Session, ApiError>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match result {
        Ok(session) => {
            set_auth_state.set(AuthState::from_session(Some(&session)));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| {
                state.loading = false;
                state.error = Some(error.to_string());
            });
            Err(error)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    manager: &SessionManager,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    begin(set_auth_state);
    finish(manager.login(&request).await, set_auth_state)
}

pub async fn signup_request(
    request: SignupRequest,
    manager: &SessionManager,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    begin(set_auth_state);
    finish(manager.signup(&request).await, set_auth_state)
}

pub fn logout(manager: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    manager.logout();
    set_auth_state.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let manager = use_session_manager();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let manager = manager.clone();
        async move { login_request(payload, &manager, set_auth).await }
    })
}

pub fn use_signup_action() -> Action<SignupRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let manager = use_session_manager();

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let manager = manager.clone();
        async move { signup_request(payload, &manager, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let manager = use_session_manager();
    Callback::new(move |_| logout(&manager, set_auth))
}

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    api::{ApiClient, ApiError, LoginRequest, SignupRequest, User},
    utils::storage::SlotStorage,
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// The authenticated identity together with its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Shared read view of the current session. Only the `state` module writes it.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Rc<RefCell<Option<Session>>>,
}

impl SessionHandle {
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.inner.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }

    pub(crate) fn replace(&self, session: Option<Session>) {
        *self.inner.borrow_mut() = session;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// Owns the session lifecycle: login, signup, logout and startup
/// rehydration from the two durable slots.
#[derive(Clone)]
pub struct SessionManager {
    api: ApiClient,
    storage: Rc<dyn SlotStorage>,
    phase: Rc<Cell<SessionPhase>>,
}

impl SessionManager {
    pub fn new(api: ApiClient, storage: Rc<dyn SlotStorage>) -> Self {
        let phase = if api.session_handle().current().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        };
        Self {
            api,
            storage,
            phase: Rc::new(Cell::new(phase)),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn handle(&self) -> SessionHandle {
        self.api.session_handle()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn current(&self) -> Option<Session> {
        self.handle().current()
    }

    /// Restores a persisted session without contacting the backend.
    pub fn rehydrate(&self) -> Option<Session> {
        let session = match self.read_persisted() {
            Ok(session) => session,
            Err(err) => {
                log::warn!("Discarding stored session: {}", err);
                self.clear_slots();
                None
            }
        };
        self.handle().replace(session.clone());
        self.settle_phase();
        if let Some(session) = &session {
            log::info!("Restored session for {}", session.user.email);
        }
        session
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        self.phase.set(SessionPhase::Authenticating);
        match self.authenticate(credentials).await {
            Ok(session) => {
                self.handle().replace(Some(session.clone()));
                self.phase.set(SessionPhase::Authenticated);
                log::info!("Signed in as {}", session.user.email);
                Ok(session)
            }
            Err(err) => {
                self.settle_phase();
                log::warn!("Sign in failed: {}", err.code());
                Err(err)
            }
        }
    }

    /// Registers the identity, then signs in with the same credentials.
    pub async fn signup(&self, data: &SignupRequest) -> Result<Session, ApiError> {
        self.phase.set(SessionPhase::Authenticating);
        if let Err(err) = self.api.register(data).await {
            self.settle_phase();
            log::warn!("Sign up failed: {}", err.code());
            return Err(err);
        }
        self.login(&data.credentials()).await
    }

    pub fn logout(&self) {
        self.handle().replace(None);
        self.clear_slots();
        self.phase.set(SessionPhase::Unauthenticated);
        log::info!("Signed out");
    }

    async fn authenticate(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let token = self.api.exchange_credentials(credentials).await?;
        let user = self.api.fetch_profile(&token).await?;
        let session = Session { user, token };
        self.persist(&session)?;
        Ok(session)
    }

    fn persist(&self, session: &Session) -> Result<(), ApiError> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| ApiError::storage(e.to_string()))?;
        let previous_token = self.storage.get(TOKEN_KEY)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        if let Err(err) = self.storage.set(USER_KEY, &user_json) {
            let rollback = match previous_token.as_deref() {
                Some(token) => self.storage.set(TOKEN_KEY, token),
                None => self.storage.remove(TOKEN_KEY),
            };
            if let Err(rollback) = rollback {
                log::warn!("Failed to roll back token slot: {}", rollback);
                self.clear_slots();
                self.handle().replace(None);
            }
            return Err(err);
        }
        Ok(())
    }

    fn read_persisted(&self) -> Result<Option<Session>, ApiError> {
        let token = self.storage.get(TOKEN_KEY)?;
        let user = self.storage.get(USER_KEY)?;
        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => {
                let user: User = serde_json::from_str(&user)
                    .map_err(|e| ApiError::storage(format!("corrupt user slot: {}", e)))?;
                Ok(Some(Session { user, token }))
            }
            (None, None) => Ok(None),
            _ => Err(ApiError::storage("incomplete session slots")),
        }
    }

    fn clear_slots(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove(key) {
                log::warn!("Failed to clear {} slot: {}", key, err);
            }
        }
    }

    fn settle_phase(&self) {
        let phase = if self.handle().current().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        };
        self.phase.set(phase);
    }
}

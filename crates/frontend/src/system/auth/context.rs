use contracts::system::session::{LoginRequest, RegistrationRequest, SellerSession};
use leptos::prelude::*;

use super::validation::{login, validate_registration, RegistrationErrors};
use super::AuthError;
use crate::shared::latency::deferred;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<SellerSession>,
}

/// Seller session shared with the pages through context.
///
/// Created with `init` on login and dropped with `teardown` on logout
/// or when navigating out of the dashboard.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive state for views
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn session(&self) -> Option<SellerSession> {
        self.state.with_untracked(|s| s.session.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(|s| s.session.is_some())
    }

    pub fn init(&self, session: SellerSession) {
        self.state.set(AuthState {
            session: Some(session),
        });
    }

    pub fn teardown(&self) {
        self.state.set(AuthState::default());
    }

    /// Guard for dashboard pages
    pub fn require_session(&self) -> Result<SellerSession, AuthError> {
        self.session().ok_or(AuthError::NotAuthenticated)
    }
}

/// Creates the session context for the component tree
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);
    ctx
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("provide_session not called in component tree")
}

/// Helper: Perform login after the simulated delay
pub async fn do_login(
    ctx: SessionContext,
    request: LoginRequest,
    latency_ms: u32,
) -> Result<SellerSession, AuthError> {
    let session = deferred(latency_ms, move || login(&request)).await?;
    ctx.init(session.clone());
    Ok(session)
}

/// Helper: Perform logout
pub fn do_logout(ctx: SessionContext) {
    if let Some(session) = ctx.session() {
        log::info!("Seller logged out: {}", session.email);
    }
    ctx.teardown();
}

/// Helper: Submit registration; the form is checked before the delay
pub async fn do_register(
    request: RegistrationRequest,
    latency_ms: u32,
) -> Result<(), RegistrationErrors> {
    validate_registration(&request)?;
    deferred(latency_ms, move || {
        log::info!("Seller registered: {}", request.email);
    })
    .await;
    Ok(())
}

// ============================================================================
// Bookrack Core - Authentication Service
// File: crates/bookrack-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: registration, credential verification, and
//! session/token issuance bound to a connection context.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use bookrack_security::jwt::JwtService;
use bookrack_security::session::{Session, SessionStore};
use bookrack_shared::types::ConnectionId;

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Authentication service for register/login flows.
///
/// `sessions` is `None` when the embedding application never installed a
/// session subsystem; logging in through such a service fails with
/// `SessionUnavailable` for that request.
pub struct AuthService<R: UserRepository> {
    users: Arc<R>,
    sessions: Option<Arc<SessionStore>>,
    jwt: JwtService,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(users: Arc<R>, sessions: Option<Arc<SessionStore>>, jwt: JwtService) -> Self {
        Self {
            users,
            sessions,
            jwt,
        }
    }

    /// True iff no registered user holds this username. Pure query.
    pub async fn is_unique(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.users.find_by_username(username).await?.is_none())
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> Result<(), DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::MissingField);
        }

        let user = User::new(username.to_string(), password.to_string())
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        // Uniqueness check and insert are one critical section in the
        // repository, so concurrent duplicates cannot both land.
        self.users.insert(&user).await?;

        info!("Registration successful for: {}", username);
        Ok(())
    }

    /// True iff a stored user matches both fields exactly.
    pub async fn verify(&self, username: &str, password: &str) -> Result<bool, DomainError> {
        Ok(self
            .users
            .find_by_username(username)
            .await?
            .is_some_and(|u| u.password == password))
    }

    /// Login with username and password, minting a bearer token and
    /// binding it to the connection's session slot.
    pub async fn login(
        &self,
        ctx: ConnectionId,
        username: &str,
        password: &str,
    ) -> Result<String, DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::MissingField);
        }

        if !self.verify(username, password).await? {
            warn!("Login failed: invalid credentials for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        let sessions = self
            .sessions
            .as_ref()
            .ok_or(DomainError::SessionUnavailable)?;

        let token = self
            .jwt
            .generate_access_token(username)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        // Overwrites any prior session in this connection's slot.
        sessions.set(
            ctx,
            Session::new(
                username.to_string(),
                token.clone(),
                self.jwt.access_token_expiry(),
            ),
        );

        info!("Login successful for: {}", username);
        Ok(token)
    }

    /// The sole authorization oracle: the username bound to this
    /// connection, provided its session holds a structurally valid,
    /// unexpired token. Expiry is checked lazily against the wall clock.
    pub fn current_identity(&self, ctx: &ConnectionId) -> Option<String> {
        let sessions = self.sessions.as_ref()?;
        let session = sessions.get_valid(ctx, Utc::now())?;

        match self.jwt.validate_token(&session.token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                warn!("Discarding session with invalid token: {}", e);
                sessions.invalidate(ctx);
                None
            }
        }
    }
}

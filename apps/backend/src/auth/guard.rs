//! Role gating for verified identities.
//!
//! A credential proves who the caller is, never what they may do: the role is
//! read from the identity store on every check.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::auth::claims::IdentityClaims;
use crate::auth::errors::AuthError;
use crate::entities::users::Role;
use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::repos::users as users_repo;

/// Source of truth for an identity's current role.
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// `Ok(None)` when no identity record exists for `email`.
    async fn role_of(&self, email: &str) -> Result<Option<Role>, DomainError>;
}

#[async_trait]
impl<T: RoleLookup + ?Sized> RoleLookup for Arc<T> {
    async fn role_of(&self, email: &str) -> Result<Option<Role>, DomainError> {
        (**self).role_of(email).await
    }
}

/// Reads the role straight from the `users` table.
#[derive(Debug, Clone)]
pub struct DbRoleLookup {
    db: DatabaseConnection,
}

impl DbRoleLookup {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleLookup for DbRoleLookup {
    async fn role_of(&self, email: &str) -> Result<Option<Role>, DomainError> {
        users_repo::find_role_by_email(&self.db, email).await
    }
}

/// Memoizes another lookup for a bounded time.
///
/// A role change in the store becomes visible after at most `ttl`. Absent
/// identities are cached too; lookup failures are not.
pub struct CachedRoleLookup<L> {
    inner: L,
    cache: Cache<String, Option<Role>>,
}

impl<L: RoleLookup> CachedRoleLookup<L> {
    pub fn new(inner: L, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Drop a cached entry, e.g. right after the role was changed.
    pub async fn invalidate(&self, email: &str) {
        self.cache.invalidate(email).await;
    }
}

#[async_trait]
impl<L: RoleLookup> RoleLookup for CachedRoleLookup<L> {
    async fn role_of(&self, email: &str) -> Result<Option<Role>, DomainError> {
        if let Some(hit) = self.cache.get(email).await {
            return Ok(hit);
        }
        let role = self.inner.role_of(email).await?;
        self.cache.insert(email.to_string(), role).await;
        Ok(role)
    }
}

/// Proof that a request passed a role gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized {
    pub email: String,
    pub role: Role,
}

/// Requires the stored role of the caller to equal `required` exactly.
#[derive(Clone)]
pub struct RoleGuard {
    lookup: Arc<dyn RoleLookup>,
    required: Role,
}

impl RoleGuard {
    pub fn new(lookup: Arc<dyn RoleLookup>, required: Role) -> Self {
        Self { lookup, required }
    }

    pub fn admin(lookup: Arc<dyn RoleLookup>) -> Self {
        Self::new(lookup, Role::Admin)
    }

    pub fn host(lookup: Arc<dyn RoleLookup>) -> Self {
        Self::new(lookup, Role::Host)
    }

    pub fn required(&self) -> Role {
        self.required
    }

    /// Check the caller against the store. Performs exactly one lookup when
    /// claims are present and none otherwise.
    pub async fn require(&self, claims: Option<&IdentityClaims>) -> Result<Authorized, AuthError> {
        let claims = claims.ok_or(AuthError::Unauthenticated)?;
        let email = claims.email.as_str();

        match self.lookup.role_of(email).await? {
            None => {
                debug!(email = %Redacted(email), required = %self.required, "No identity record");
                Err(AuthError::Forbidden {
                    identity_found: false,
                })
            }
            Some(role) if role != self.required => {
                debug!(
                    email = %Redacted(email),
                    required = %self.required,
                    actual = %role,
                    "Role mismatch"
                );
                Err(AuthError::Forbidden {
                    identity_found: true,
                })
            }
            Some(role) => Ok(Authorized {
                email: email.to_string(),
                role,
            }),
        }
    }
}

impl std::fmt::Debug for RoleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleGuard")
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

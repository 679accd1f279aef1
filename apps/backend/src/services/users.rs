use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::entities::users::Role;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User, UserCreate};
use crate::services::{now_millis, require_email};

/// Profile submitted by the web client after the identity provider signed the user in.
#[derive(Debug, Clone, Default)]
pub struct LoginProfile {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Option<Role>,
    /// Set only when the client sent the flag as boolean `true`.
    pub verified_flag: bool,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<f64>,
}

/// Result of [`login_upsert`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Existing identity, verification flag raised.
    Verified { matched: u64, modified: u64 },
    /// Existing identity returned unchanged.
    Existing(User),
    /// First login; a new identity was stored.
    Created(User),
}

/// Save-on-login.
///
/// An existing identity is only ever touched to raise `is_verified`, and only
/// when the client asked for exactly that; every other field the client sends
/// for a known email is ignored.
pub async fn login_upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile: LoginProfile,
) -> Result<LoginOutcome, AppError> {
    let email = require_email(&profile.email)?;

    if let Some(existing) = users::find_user_by_email(conn, &email).await? {
        if profile.verified_flag {
            let matched = users::set_verified(conn, &email).await?;
            let modified = if existing.is_verified { 0 } else { matched };
            info!(email = %Redacted(&email), "Identity marked verified");
            return Ok(LoginOutcome::Verified { matched, modified });
        }
        debug!(email = %Redacted(&email), "Repeat login for existing identity");
        return Ok(LoginOutcome::Existing(existing));
    }

    let role = profile.role.unwrap_or_default();
    if role == Role::Admin {
        return Err(AppError::invalid(
            ErrorCode::InvalidRole,
            "The admin role cannot be self-assigned",
        ));
    }

    let dto = UserCreate {
        email: email.clone(),
        name: profile.name,
        photo: profile.photo,
        role,
        is_verified: profile.verified_flag,
        designation: profile.designation,
        bank_account_no: profile.bank_account_no,
        salary: profile.salary,
        timestamp: now_millis(),
    };

    match users::create_user(conn, dto).await {
        Ok(user) => {
            info!(email = %Redacted(&email), role = %user.role, "New identity stored");
            Ok(LoginOutcome::Created(user))
        }
        // Lost a race against a concurrent first login for the same email.
        Err(DomainError::Conflict(ConflictKind::UniqueEmail, _)) => {
            let existing = users::find_user_by_email(conn, &email)
                .await?
                .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))?;
            Ok(LoginOutcome::Existing(existing))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, AppError> {
    Ok(users::find_user_by_email(conn, email).await?)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    Ok(users::list_users(conn, None).await?)
}

pub async fn list_employees<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, AppError> {
    Ok(users::list_users(conn, Some(Role::Employee)).await?)
}

/// Admin-only role change. Unknown emails are a 404.
pub async fn change_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    role: Role,
) -> Result<u64, AppError> {
    let matched = users::set_role(conn, email, role).await?;
    if matched == 0 {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }
    info!(email = %Redacted(email), role = %role, "Role changed");
    Ok(matched)
}

/// Host-only verification toggle. Unknown emails are a 404.
pub async fn verify_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<u64, AppError> {
    let matched = users::set_verified(conn, email).await?;
    if matched == 0 {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }
    info!(email = %Redacted(email), "Identity verified by host");
    Ok(matched)
}

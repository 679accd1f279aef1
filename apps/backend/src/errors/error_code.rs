//! Error codes for the HR Hub backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No credential cookie on the request
    Unauthorized,
    /// Credential signature or structure is invalid
    UnauthorizedInvalidToken,
    /// Credential has expired
    UnauthorizedExpiredToken,
    /// Identity exists but lacks the required role
    InsufficientRole,
    /// No identity record for the credential's email
    ForbiddenUserNotFound,

    // Request Validation
    InvalidEmail,
    InvalidRole,
    InvalidPrice,
    InvalidCategory,
    ReservedClaim,
    ValidationError,
    BadRequest,

    // Resource Not Found
    UserNotFound,
    NotFound,

    // Conflicts
    UniqueEmail,
    Conflict,

    // Upstream collaborators
    PaymentProviderError,
    PaymentProviderUnavailable,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    RecordNotFound,
    UniqueViolation,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::UnauthorizedExpiredToken => "UNAUTHORIZED_EXPIRED_TOKEN",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",

            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::ReservedClaim => "RESERVED_CLAIM",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::PaymentProviderError => "PAYMENT_PROVIDER_ERROR",
            Self::PaymentProviderUnavailable => "PAYMENT_PROVIDER_UNAVAILABLE",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Credential issuance/verification and role gating.

pub mod claims;
pub mod errors;
pub mod guard;
pub mod jwt;

pub use claims::IdentityClaims;
pub use errors::{AuthError, CredentialFault};
pub use guard::{Authorized, CachedRoleLookup, DbRoleLookup, RoleGuard, RoleLookup};
pub use jwt::{issue_credential, verify_credential, CREDENTIAL_TTL};

pub use crate::entities::users::Role;

//! Credential cookie policy.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

/// Name of the cookie carrying the credential.
pub const CREDENTIAL_COOKIE: &str = "token";

/// Deployment flavour; decides the cookie attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    #[default]
    Dev,
    Prod,
}

impl RuntimeEnv {
    /// `APP_ENV=production` (or `NODE_ENV=production`) selects `Prod`.
    pub fn from_env() -> Self {
        let flavour = std::env::var("APP_ENV")
            .or_else(|_| std::env::var("NODE_ENV"))
            .unwrap_or_default();
        if flavour.trim().eq_ignore_ascii_case("production") {
            RuntimeEnv::Prod
        } else {
            RuntimeEnv::Dev
        }
    }

    fn secure(self) -> bool {
        matches!(self, RuntimeEnv::Prod)
    }

    // Prod front-end lives on another site, so the cookie must be sent cross-site.
    fn same_site(self) -> SameSite {
        match self {
            RuntimeEnv::Prod => SameSite::None,
            RuntimeEnv::Dev => SameSite::Strict,
        }
    }

    /// Cookie that stores a freshly issued credential.
    pub fn credential_cookie(self, token: String) -> Cookie<'static> {
        Cookie::build(CREDENTIAL_COOKIE, token)
            .http_only(true)
            .path("/")
            .secure(self.secure())
            .same_site(self.same_site())
            .finish()
    }

    /// Same cookie, emptied and expired.
    pub fn cleared_cookie(self) -> Cookie<'static> {
        Cookie::build(CREDENTIAL_COOKIE, "")
            .http_only(true)
            .path("/")
            .secure(self.secure())
            .same_site(self.same_site())
            .max_age(Duration::ZERO)
            .finish()
    }
}

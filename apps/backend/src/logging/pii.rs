//! Masking of emails and opaque tokens before they reach a log line.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap());

// JWT segments, cookie values, processor secrets: long runs of base64/hex alphabet.
#[allow(clippy::unwrap_used)]
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9+/_\-.]{24,}={0,2}").unwrap());

/// Keep the first character of an email's local part and its domain; hide
/// anything that looks like a credential.
pub fn redact(input: &str) -> String {
    let masked = EMAIL.replace_all(input, |caps: &Captures| format!("{}***{}", &caps[1], &caps[2]));
    TOKEN.replace_all(&masked, "[REDACTED_TOKEN]").into_owned()
}

/// Display adapter that redacts on format.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

//! Test helpers for generating unique test data.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique, lowercase email address in the format
/// `{prefix}-{ulid}@hrhub.test`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("employee");
/// let b = unique_email("employee");
/// assert_ne!(a, b);
/// assert!(a.ends_with("@hrhub.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@hrhub.test", prefix, Ulid::new()).to_lowercase()
}

pub mod identity;
pub mod role_gate;
pub mod validated_json;

pub use identity::Identity;
pub use role_gate::{AdminOnly, HostOnly, RoleGated};
pub use validated_json::ValidatedJson;

//! DTOs for users_sea adapter.

use crate::entities::users::Role;

/// DTO for inserting a new identity.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<f64>,
    /// Epoch millis
    pub timestamp: i64,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, timestamp: i64) -> Self {
        Self {
            email: email.into(),
            name: None,
            photo: None,
            role: Role::Unset,
            is_verified: false,
            designation: None,
            bank_account_no: None,
            salary: None,
            timestamp,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::constants::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MIN_EMAIL_LENGTH, MIN_NAME_LENGTH, ROLE_ADMIN,
    ROLE_CUSTOMER,
};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;
use crate::text;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::Customer,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Customer => write!(f, "{}", ROLE_CUSTOMER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Stored password hash as a value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }
}

/// Data handed to the credential store to persist a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}

/// Validated registration: normalised email, sanitised name, hashed password.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub password: Password,
}

impl Registration {
    /// Validate raw registration input in field order: email, password, name.
    ///
    /// The password is hashed only once every field has passed.
    pub fn new(email: &str, password: &str, name: &str, role: Option<UserRole>) -> DomainResult<Self> {
        let email = normalize_email(email)?;
        Password::validate(password)?;
        let name = text::clean_field("Name", name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        let password = Password::new(password)?;

        Ok(Self {
            email,
            name,
            role: role.unwrap_or_default(),
            password,
        })
    }

    /// Consume into the store-level representation
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            password_hash: self.password.into_string(),
            name: self.name,
            role: self.role,
        }
    }
}

/// Trim and lowercase an email address, rejecting malformed input.
pub fn normalize_email(raw: &str) -> DomainResult<String> {
    let normalized = raw.trim().to_lowercase();
    let len = normalized.chars().count();
    if len < MIN_EMAIL_LENGTH || len > MAX_EMAIL_LENGTH || !normalized.validate_email() {
        return Err(DomainError::validation("Invalid email format"));
    }
    Ok(normalized)
}

/// Public user view (safe to return to client; never carries the hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Normalised email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Role
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

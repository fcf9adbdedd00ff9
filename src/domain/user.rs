use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Division;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => f.write_str("buyer"),
            Role::Seller => f.write_str("seller"),
        }
    }
}

/// Optional profile fields. Doubles as the patch shape: every `Some`
/// overrides the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub division: Option<Division>,
    pub image: Option<String>,
    // Seller business identity
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub trade_license: Option<String>,
    pub tin_certificate: Option<String>,
}

impl Profile {
    pub fn merge(&mut self, patch: Profile) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if patch.$field.is_some() { self.$field = patch.$field; })*
            };
        }
        take!(
            phone,
            address,
            division,
            image,
            business_name,
            description,
            trade_license,
            tin_certificate
        );
    }
}

/// A registered buyer or seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for registering a user. The role comes from the route, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    #[serde(skip)]
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: Profile,
}

impl UserCreate {
    pub fn new(role: Role, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            email: email.into(),
            profile: Profile::default(),
        }
    }
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub profile: Profile,
}

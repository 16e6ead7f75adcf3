use std::fmt;

use sqlx::FromRow;
use time::PrimitiveDateTime;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,                               // assigned by the store, never reused
    pub name: String,
    pub email: String,                         // unique lookup key
    pub role: String,                          // not constrained by the store
    pub created_at: Option<PrimitiveDateTime>, // CURRENT_TIMESTAMP, UTC
}

/// Role a user is tagged with, fixed by the route they registered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

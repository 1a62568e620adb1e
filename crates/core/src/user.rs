use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A registered user. Identity is the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl User {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 20;
    pub const AGE_MIN: i64 = 1;
    pub const AGE_MAX: i64 = 110;

    /// Build a user, enforcing the field bounds at construction time.
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_age(age)?;
        Ok(Self { id, name, age })
    }
}

/// Check the user-name length bound (counted in characters, not bytes).
pub fn validate_name(name: &str) -> DomainResult<()> {
    let len = name.chars().count();
    if len < User::NAME_MIN || len > User::NAME_MAX {
        return Err(DomainError::validation(format!(
            "name must be between {} and {} characters",
            User::NAME_MIN,
            User::NAME_MAX
        )));
    }
    Ok(())
}

/// Check the age range bound.
pub fn validate_age(age: i64) -> DomainResult<()> {
    if age < User::AGE_MIN || age > User::AGE_MAX {
        return Err(DomainError::validation(format!(
            "age must be between {} and {}",
            User::AGE_MIN,
            User::AGE_MAX
        )));
    }
    Ok(())
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored passwords starting with this prefix can never be verified.
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";

pub fn is_usable_password(stored: &str) -> bool {
    !stored.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

// Logins are looked up by email, there is no username.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub referral_code: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub date_joined: DateTimeUtc,
    pub last_login: DateTimeUtc,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Admins hold every permission, everyone else holds none.
    pub fn has_permission(&self, _perm: &str) -> bool {
        self.is_admin
    }

    // Placeholder: every account can see every module.
    pub fn has_module_permission(&self, _app_label: &str) -> bool {
        true
    }

    pub fn has_usable_password(&self) -> bool {
        is_usable_password(&self.password)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One identity record per user. Email and username carry unique indexes
/// (see the create_user_table migration). Salt and password_hash are only
/// meaningful as a pair; reset_token and reset_token_issued_at are both set
/// or both null.
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub name: String,
    pub description: String,
    pub salt: String,
    pub password_hash: String,
    pub session_token: String,
    pub photo_url: Option<String>,
    pub photo_id: Option<String>,
    pub reset_token: Option<String>,
    pub reset_token_issued_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

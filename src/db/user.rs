use async_trait::async_trait;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::db::{postgres_service::PostgresService, IdentityStore};
use crate::types::{
    error::AppError,
    user::{Identity, PhotoRef, Profile},
};

impl From<UserModel> for Identity {
    fn from(m: UserModel) -> Self {
        let photo = match (m.photo_url, m.photo_id) {
            (Some(url), Some(picture_id)) => Some(PhotoRef { url, picture_id }),
            _ => None,
        };
        Identity {
            id: m.id,
            email: m.email,
            salt: m.salt,
            password_hash: m.password_hash,
            session_token: m.session_token,
            profile: Profile {
                username: m.username,
                name: m.name,
                description: m.description,
                photo,
            },
            reset_token: m.reset_token,
            reset_token_issued_at: m.reset_token_issued_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn to_active(identity: &Identity) -> UserActive {
    let (photo_url, photo_id) = match &identity.profile.photo {
        Some(p) => (Some(p.url.clone()), Some(p.picture_id.clone())),
        None => (None, None),
    };
    UserActive {
        id: Set(identity.id),
        email: Set(identity.email.clone()),
        username: Set(identity.profile.username.clone()),
        name: Set(identity.profile.name.clone()),
        description: Set(identity.profile.description.clone()),
        salt: Set(identity.salt.clone()),
        password_hash: Set(identity.password_hash.clone()),
        session_token: Set(identity.session_token.clone()),
        photo_url: Set(photo_url),
        photo_id: Set(photo_id),
        reset_token: Set(identity.reset_token.clone()),
        reset_token_issued_at: Set(identity.reset_token_issued_at),
        created_at: Set(identity.created_at),
        updated_at: Set(identity.updated_at),
    }
}

fn map_insert_err(e: sea_orm::DbErr) -> AppError {
    // The unique indexes on email/username are the real uniqueness check;
    // the application pre-check only exists for the friendlier message.
    match e.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email or username is already used".to_string())
        }
        _ => AppError::Db(e),
    }
}

#[async_trait]
impl IdentityStore for PostgresService {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(Identity::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?
            .map(Identity::from))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Identity>, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .map(Identity::from))
    }

    async fn find_by_session_token(&self, token: &str) -> Result<Option<Identity>, AppError> {
        Ok(User::find()
            .filter(Column::SessionToken.eq(token))
            .one(&self.db)
            .await?
            .map(Identity::from))
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Identity>, AppError> {
        Ok(User::find()
            .filter(Column::ResetToken.eq(token))
            .one(&self.db)
            .await?
            .map(Identity::from))
    }

    async fn insert(&self, identity: &Identity) -> Result<(), AppError> {
        User::insert(to_active(identity))
            .exec(&self.db)
            .await
            .map_err(map_insert_err)?;
        Ok(())
    }

    async fn update(&self, identity: &Identity) -> Result<(), AppError> {
        to_active(identity).update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        User::delete_by_id(*id).exec(&self.db).await?;
        Ok(())
    }
}

use rand::{distributions::Alphanumeric, Rng};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::models::user::{self, ActiveModel, Entity as UserEntity, Model as User};

#[derive(Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub access_token: Option<String>,
}

#[derive(Debug, Default)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

pub struct UsersRepo {
    pub db: DatabaseConnection,
}

impl UsersRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<User, DbErr> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;

        match user {
            Some(u) => Ok(u),
            None => Err(DbErr::RecordNotFound("User not found".to_string())),
        }
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<User>, DbErr> {
        let mut query = UserEntity::find();

        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(user::Column::FullName.contains(term))
                    .add(user::Column::Email.contains(term)),
            );
        }

        query.order_by_asc(user::Column::FullName).all(&self.db).await
    }

    pub async fn create(&self, data: NewUser) -> Result<User, DbErr> {
        let access_token = data.access_token.unwrap_or_else(generate_access_token);

        let now = chrono::Utc::now().naive_utc();
        let user_model = ActiveModel {
            full_name: Set(data.full_name),
            email: Set(data.email),
            access_token: Set(access_token),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user_model.insert(&self.db).await
    }

    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User, DbErr> {
        let user = self.get(id).await?;

        let mut user: ActiveModel = user.into();
        if let Some(full_name) = changes.full_name {
            user.full_name = Set(full_name);
        }
        if let Some(email) = changes.email {
            user.email = Set(email);
        }
        user.updated_at = Set(chrono::Utc::now().naive_utc());

        user.update(&self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<User, DbErr> {
        let user = self.get(id).await?;

        UserEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(user)
    }
}

fn generate_access_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_long_and_distinct() {
        let a = generate_access_token();
        let b = generate_access_token();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}

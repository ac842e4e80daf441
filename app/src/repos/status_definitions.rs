use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::models::status_definition::{
    self, ActiveModel, Entity as StatusDefinitionEntity, Model as StatusDefinition,
};

pub struct StatusDefinitionsRepo {
    pub db: DatabaseConnection,
}

impl StatusDefinitionsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<StatusDefinition>, DbErr> {
        StatusDefinitionEntity::find()
            .order_by_asc(status_definition::Column::Code)
            .all(&self.db)
            .await
    }

    /// Every legal status code, for workflow validation.
    pub async fn codes(&self) -> Result<Vec<String>, DbErr> {
        let definitions = self.list().await?;

        Ok(definitions.into_iter().map(|d| d.code).collect())
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<StatusDefinition>, DbErr> {
        StatusDefinitionEntity::find_by_id(code).one(&self.db).await
    }

    pub async fn create(
        &self,
        code: String,
        description: Option<String>,
    ) -> Result<StatusDefinition, DbErr> {
        let now = chrono::Utc::now().naive_utc();
        let model = ActiveModel {
            code: Set(code),
            description: Set(description),
            created_by: Set(None),
            updated_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model.insert(&self.db).await
    }
}

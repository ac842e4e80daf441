use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::models::translation::{
    self, ActiveModel, Entity as TranslationEntity, Model as Translation,
};

pub struct TranslationsRepo {
    pub db: DatabaseConnection,
}

impl TranslationsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_language(&self, language_code: &str) -> Result<Option<Translation>, DbErr> {
        TranslationEntity::find()
            .filter(translation::Column::LanguageCode.eq(language_code))
            .one(&self.db)
            .await
    }

    pub async fn create(
        &self,
        language_code: String,
        translations: serde_json::Value,
    ) -> Result<Translation, DbErr> {
        let now = chrono::Utc::now().naive_utc();
        let model = ActiveModel {
            language_code: Set(language_code),
            translations: Set(translations),
            created_by: Set(None),
            updated_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await
    }
}

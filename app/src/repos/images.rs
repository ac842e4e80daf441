use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::models::{
    image_data::{self, Entity as ImageDataEntity},
    image_metadata::{self, ActiveModel, Entity as ImageMetadataEntity, Model as ImageMetadata},
};

#[derive(Debug)]
pub struct NewImage {
    pub original_name: String,
    pub content_type: String,
    pub file_size: i32,
    pub base64_data: String,
}

/// Metadata joined with the stored base64 payload, for serving.
#[derive(Debug)]
pub struct StoredImage {
    pub metadata: ImageMetadata,
    pub base64_data: String,
}

pub struct ImagesRepo {
    pub db: DatabaseConnection,
}

impl ImagesRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_task(&self, task_id: i32) -> Result<Vec<ImageMetadata>, DbErr> {
        ImageMetadataEntity::find()
            .filter(image_metadata::Column::TaskId.eq(task_id))
            .order_by_asc(image_metadata::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn get_metadata(&self, id: i32) -> Result<ImageMetadata, DbErr> {
        let metadata = ImageMetadataEntity::find_by_id(id).one(&self.db).await?;

        match metadata {
            Some(m) => Ok(m),
            None => Err(DbErr::RecordNotFound("Image not found".to_string())),
        }
    }

    pub async fn get_with_data(&self, id: i32) -> Result<StoredImage, DbErr> {
        let metadata = self.get_metadata(id).await?;

        let data = ImageDataEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Image data not found".to_string()))?;

        Ok(StoredImage {
            metadata,
            base64_data: data.data,
        })
    }

    /// Insert metadata first to obtain the id, point the url at it, then
    /// store the payload.
    pub async fn store(&self, task_id: i32, image: NewImage) -> Result<ImageMetadata, DbErr> {
        let metadata_model = ActiveModel {
            task_id: Set(task_id),
            original_name: Set(image.original_name),
            content_type: Set(image.content_type),
            file_size: Set(image.file_size),
            url: Set("/images/0".to_string()),
            storage_type: Set("local".to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let metadata = metadata_model.insert(&self.db).await?;

        let id = metadata.id;
        let mut with_url: ActiveModel = metadata.into();
        with_url.url = Set(format!("/images/{}", id));
        let metadata = with_url.update(&self.db).await?;

        let data_model = image_data::ActiveModel {
            id: Set(metadata.id),
            data: Set(image.base64_data),
            thumbnail_data: Set(None),
        };
        data_model.insert(&self.db).await?;

        Ok(metadata)
    }

    pub async fn delete(&self, id: i32) -> Result<ImageMetadata, DbErr> {
        let metadata = self.get_metadata(id).await?;

        ImageDataEntity::delete_by_id(id).exec(&self.db).await?;
        ImageMetadataEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(metadata)
    }
}

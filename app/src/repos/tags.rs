use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;

use crate::models::{
    tag::{self, ActiveModel, Entity as TagEntity, Model as Tag},
    task_tag::{self, Entity as TaskTagEntity},
};

/// Tag name and color pair as rendered on task cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLabel {
    pub tag: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagWithUsage {
    pub tag: String,
    pub color: String,
    pub created_at: chrono::NaiveDateTime,
    pub usage_count: u64,
}

pub struct TagsRepo {
    pub db: DatabaseConnection,
}

impl TagsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, tag_name: &str) -> Result<Tag, DbErr> {
        let tag = TagEntity::find_by_id(tag_name).one(&self.db).await?;

        match tag {
            Some(t) => Ok(t),
            None => Err(DbErr::RecordNotFound("Tag not found".to_string())),
        }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<TagWithUsage>, DbErr> {
        let mut query = TagEntity::find();

        if let Some(term) = search {
            query = query.filter(tag::Column::Tag.contains(term));
        }

        let tags = query.order_by_asc(tag::Column::Tag).all(&self.db).await?;

        let mut result = Vec::with_capacity(tags.len());
        for tag in tags {
            let usage_count = TaskTagEntity::find()
                .filter(task_tag::Column::Tag.eq(&tag.tag))
                .count(&self.db)
                .await?;
            result.push(TagWithUsage {
                tag: tag.tag,
                color: tag.color,
                created_at: tag.created_at,
                usage_count,
            });
        }

        Ok(result)
    }

    pub async fn create(&self, tag_name: String, color: String) -> Result<Tag, DbErr> {
        let tag_model = ActiveModel {
            tag: Set(tag_name),
            color: Set(color),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        tag_model.insert(&self.db).await
    }

    pub async fn update_color(&self, tag_name: &str, color: String) -> Result<Tag, DbErr> {
        let tag = self.get(tag_name).await?;

        let mut tag: ActiveModel = tag.into();
        tag.color = Set(color);

        tag.update(&self.db).await
    }

    pub async fn delete(&self, tag_name: &str) -> Result<Tag, DbErr> {
        let tag = self.get(tag_name).await?;

        TagEntity::delete_by_id(tag_name).exec(&self.db).await?;

        Ok(tag)
    }

    pub async fn tags_for_task(&self, task_id: i32) -> Result<Vec<TagLabel>, DbErr> {
        let links = TaskTagEntity::find()
            .filter(task_tag::Column::TaskId.eq(task_id))
            .order_by_asc(task_tag::Column::Tag)
            .all(&self.db)
            .await?;

        let mut labels = Vec::with_capacity(links.len());
        for link in links {
            if let Some(tag) = TagEntity::find_by_id(link.tag.as_str()).one(&self.db).await? {
                labels.push(TagLabel {
                    tag: tag.tag,
                    color: tag.color,
                });
            }
        }

        Ok(labels)
    }

    /// Replace a task's tag set with the given names.
    pub async fn set_task_tags(&self, task_id: i32, tag_names: &[String]) -> Result<(), DbErr> {
        TaskTagEntity::delete_many()
            .filter(task_tag::Column::TaskId.eq(task_id))
            .exec(&self.db)
            .await?;

        if tag_names.is_empty() {
            return Ok(());
        }

        let links = tag_names.iter().map(|name| task_tag::ActiveModel {
            task_id: Set(task_id),
            tag: Set(name.clone()),
        });
        TaskTagEntity::insert_many(links).exec(&self.db).await?;

        Ok(())
    }
}

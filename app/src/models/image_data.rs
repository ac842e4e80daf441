use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, DeriveEntityModel, PartialEq)]
#[sea_orm(table_name = "image_data")]
pub struct Model {
    /// Shares its id with the owning image_metadata row.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Image bytes stored base64-encoded.
    pub data: String,
    pub thumbnail_data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image_metadata::Entity",
        from = "Column::Id",
        to = "super::image_metadata::Column::Id",
        on_delete = "Cascade"
    )]
    ImageMetadata,
}

impl Related<super::image_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImageMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImageMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageMetadata::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageMetadata::TaskId).integer().not_null())
                    .col(
                        ColumnDef::new(ImageMetadata::OriginalName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImageMetadata::ContentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImageMetadata::FileSize).integer().not_null())
                    .col(ColumnDef::new(ImageMetadata::Url).string().not_null())
                    .col(
                        ColumnDef::new(ImageMetadata::StorageType)
                            .string()
                            .not_null()
                            .default("local"),
                    )
                    .col(
                        ColumnDef::new(ImageMetadata::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_metadata_task")
                            .from(ImageMetadata::Table, ImageMetadata::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ImageData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageData::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageData::Data).text().not_null())
                    .col(ColumnDef::new(ImageData::ThumbnailData).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_data_metadata")
                            .from(ImageData::Table, ImageData::Id)
                            .to(ImageMetadata::Table, ImageMetadata::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImageData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImageMetadata::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ImageMetadata {
    Table,
    Id,
    TaskId,
    OriginalName,
    ContentType,
    FileSize,
    Url,
    StorageType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ImageData {
    Table,
    Id,
    Data,
    ThumbnailData,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
}

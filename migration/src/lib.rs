pub use sea_orm_migration::prelude::*;

mod m20260712_101500_initial_schema;
mod m20260718_090000_tags;
mod m20260724_140000_translations;
mod m20260730_110000_task_images;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_101500_initial_schema::Migration),
            Box::new(m20260718_090000_tags::Migration),
            Box::new(m20260724_140000_translations::Migration),
            Box::new(m20260730_110000_task_images::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

mod m20260820_000001_create_profiles;
mod m20260820_000002_create_academic_info;
mod m20260820_000003_create_employment_experiences;
mod m20260820_000004_create_documents;
mod m20260820_000005_add_user_id_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_000001_create_profiles::Migration),
            Box::new(m20260820_000002_create_academic_info::Migration),
            Box::new(m20260820_000003_create_employment_experiences::Migration),
            Box::new(m20260820_000004_create_documents::Migration),
            Box::new(m20260820_000005_add_user_id_indexes::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(AcademicInfo::Table)
                    .col(AcademicInfo::UserId)
                    .name("idx_academic_info_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(EmploymentExperiences::Table)
                    .col(EmploymentExperiences::UserId)
                    .name("idx_employment_experiences_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Documents::Table)
                    .col(Documents::UserId)
                    .name("idx_documents_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_documents_user_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_employment_experiences_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_academic_info_user_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum AcademicInfo {
    Table,
    UserId,
}

#[derive(Iden)]
enum EmploymentExperiences {
    Table,
    UserId,
}

#[derive(Iden)]
enum Documents {
    Table,
    UserId,
}

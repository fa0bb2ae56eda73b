use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicInfo::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicInfo::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(AcademicInfo::UniversityName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicInfo::City).string().not_null())
                    .col(ColumnDef::new(AcademicInfo::Country).string().not_null())
                    .col(
                        ColumnDef::new(AcademicInfo::LevelOfStudy)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicInfo::Major).string().not_null())
                    .col(ColumnDef::new(AcademicInfo::Gpa).string().not_null())
                    .col(ColumnDef::new(AcademicInfo::StartDate).date().not_null())
                    .col(ColumnDef::new(AcademicInfo::EndDate).date().not_null())
                    .col(ColumnDef::new(AcademicInfo::Honors).string())
                    .col(
                        ColumnDef::new(AcademicInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicInfo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AcademicInfo {
    Table,
    Id,
    UserId,
    UniversityName,
    City,
    Country,
    LevelOfStudy,
    Major,
    Gpa,
    StartDate,
    EndDate,
    Honors,
    UpdatedAt,
}

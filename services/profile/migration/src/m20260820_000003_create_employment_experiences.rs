use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmploymentExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmploymentExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::PositionTitle)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::City)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::Country)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmploymentExperiences::EndDate).date())
                    .col(
                        ColumnDef::new(EmploymentExperiences::CurrentlyWorking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::Responsibilities)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmploymentExperiences::UpdatedAt)
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
            .drop_table(Table::drop().table(EmploymentExperiences::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmploymentExperiences {
    Table,
    Id,
    UserId,
    CompanyName,
    PositionTitle,
    City,
    Country,
    StartDate,
    EndDate,
    CurrentlyWorking,
    Responsibilities,
    UpdatedAt,
}

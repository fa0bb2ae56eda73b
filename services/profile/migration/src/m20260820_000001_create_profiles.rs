use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profiles::FirstName).string().not_null())
                    .col(ColumnDef::new(Profiles::LastName).string().not_null())
                    .col(ColumnDef::new(Profiles::Gender).string())
                    .col(ColumnDef::new(Profiles::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Profiles::BirthCountry).string().not_null())
                    .col(ColumnDef::new(Profiles::Citizenship).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::CountryOfResidence)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Profiles::AddressStreet).string().not_null())
                    .col(ColumnDef::new(Profiles::City).string().not_null())
                    .col(ColumnDef::new(Profiles::Email).string().not_null())
                    .col(ColumnDef::new(Profiles::Phone).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
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
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    BirthCountry,
    Citizenship,
    CountryOfResidence,
    AddressStreet,
    City,
    Email,
    Phone,
    UpdatedAt,
}

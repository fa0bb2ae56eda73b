use sea_orm::entity::prelude::*;

/// Personal-information record, one per account.
///
/// The primary key is the provider-issued account id, which makes the save
/// operation a natural upsert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: chrono::NaiveDate,
    pub birth_country: String,
    pub citizenship: String,
    pub country_of_residence: String,
    pub address_street: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

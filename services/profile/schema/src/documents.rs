use sea_orm::entity::prelude::*;

/// Metadata row for one uploaded document.
///
/// `file_path` is the blob's exact location in the object store and the
/// delete key; it is unique so a path can never track two rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub file_name: String,
    #[sea_orm(unique)]
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

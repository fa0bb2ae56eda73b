use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use uniport_domain::document::DocumentCategory;
use uniport_domain::education::{EducationEntry, StudyLevel};
use uniport_domain::employment::EmploymentEntry;
use uniport_domain::profile::{Gender, PersonalInfo};
use uniport_profile_schema::{academic_info, documents, employment_experiences, profiles};

use crate::domain::repository::{
    DocumentRepository, EducationRepository, EmploymentRepository, ProfileRepository,
};
use crate::domain::types::{Document, Profile};
use crate::error::ProfileServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn upsert(&self, user_id: Uuid, info: &PersonalInfo) -> Result<(), ProfileServiceError> {
        let profile = profiles::ActiveModel {
            id: Set(user_id),
            first_name: Set(info.first_name.clone()),
            last_name: Set(info.last_name.clone()),
            gender: Set(info.gender.map(|g| g.as_str().to_owned())),
            date_of_birth: Set(info.date_of_birth),
            birth_country: Set(info.birth_country.clone()),
            citizenship: Set(info.citizenship.clone()),
            country_of_residence: Set(info.country_of_residence.clone()),
            address_street: Set(info.address_street.clone()),
            city: Set(info.city.clone()),
            email: Set(info.email.clone()),
            phone: Set(info.phone.clone()),
            updated_at: Set(Utc::now()),
        };
        profiles::Entity::insert(profile)
            .on_conflict(
                OnConflict::column(profiles::Column::Id)
                    .update_columns([
                        profiles::Column::FirstName,
                        profiles::Column::LastName,
                        profiles::Column::Gender,
                        profiles::Column::DateOfBirth,
                        profiles::Column::BirthCountry,
                        profiles::Column::Citizenship,
                        profiles::Column::CountryOfResidence,
                        profiles::Column::AddressStreet,
                        profiles::Column::City,
                        profiles::Column::Email,
                        profiles::Column::Phone,
                        profiles::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert profile")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(())
    }

    async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileServiceError> {
        let model = profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find profile by account id")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(model.map(profile_from_model))
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        user_id: model.id,
        info: PersonalInfo {
            first_name: model.first_name,
            last_name: model.last_name,
            // columns are written from validated values only
            gender: model.gender.as_deref().and_then(Gender::from_form_value),
            date_of_birth: model.date_of_birth,
            birth_country: model.birth_country,
            citizenship: model.citizenship,
            country_of_residence: model.country_of_residence,
            address_street: model.address_street,
            city: model.city,
            email: model.email,
            phone: model.phone,
        },
        updated_at: model.updated_at,
    }
}

// ── Education repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEducationRepository {
    pub db: DatabaseConnection,
}

impl EducationRepository for DbEducationRepository {
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EducationEntry],
    ) -> Result<(), ProfileServiceError> {
        let entries = entries.to_vec();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    academic_info::Entity::delete_many()
                        .filter(academic_info::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;

                    for entry in &entries {
                        academic_info::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            user_id: Set(user_id),
                            university_name: Set(entry.university_name.clone()),
                            city: Set(entry.city.clone()),
                            country: Set(entry.country.clone()),
                            level_of_study: Set(entry.level_of_study.as_str().to_owned()),
                            major: Set(entry.major.clone()),
                            gpa: Set(entry.gpa.clone()),
                            start_date: Set(entry.start_date),
                            end_date: Set(entry.end_date),
                            honors: Set(entry.honors.clone()),
                            updated_at: Set(Utc::now()),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("replace academic info")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<EducationEntry>, ProfileServiceError> {
        let models = academic_info::Entity::find()
            .filter(academic_info::Column::UserId.eq(user_id))
            .order_by_asc(academic_info::Column::Id)
            .all(&self.db)
            .await
            .context("list academic info")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(models.into_iter().map(education_entry_from_model).collect())
    }
}

fn education_entry_from_model(model: academic_info::Model) -> EducationEntry {
    EducationEntry {
        university_name: model.university_name,
        city: model.city,
        country: model.country,
        level_of_study: StudyLevel::from_form_value(&model.level_of_study)
            .unwrap_or(StudyLevel::Other),
        major: model.major,
        gpa: model.gpa,
        start_date: model.start_date,
        end_date: model.end_date,
        honors: model.honors,
    }
}

// ── Employment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmploymentRepository {
    pub db: DatabaseConnection,
}

impl EmploymentRepository for DbEmploymentRepository {
    async fn replace_all(
        &self,
        user_id: Uuid,
        entries: &[EmploymentEntry],
    ) -> Result<(), ProfileServiceError> {
        let entries = entries.to_vec();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    employment_experiences::Entity::delete_many()
                        .filter(employment_experiences::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;

                    for entry in &entries {
                        employment_experiences::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            user_id: Set(user_id),
                            company_name: Set(entry.company_name.clone()),
                            position_title: Set(entry.position_title.clone()),
                            city: Set(entry.city.clone()),
                            country: Set(entry.country.clone()),
                            start_date: Set(entry.start_date),
                            end_date: Set(entry.end_date),
                            currently_working: Set(entry.currently_working),
                            responsibilities: Set(entry.responsibilities.clone()),
                            updated_at: Set(Utc::now()),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("replace employment experiences")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<EmploymentEntry>, ProfileServiceError> {
        let models = employment_experiences::Entity::find()
            .filter(employment_experiences::Column::UserId.eq(user_id))
            .order_by_desc(employment_experiences::Column::StartDate)
            .all(&self.db)
            .await
            .context("list employment experiences")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(models.into_iter().map(employment_entry_from_model).collect())
    }
}

fn employment_entry_from_model(model: employment_experiences::Model) -> EmploymentEntry {
    EmploymentEntry {
        company_name: model.company_name,
        position_title: model.position_title,
        city: model.city,
        country: model.country,
        start_date: model.start_date,
        end_date: model.end_date,
        currently_working: model.currently_working,
        responsibilities: model.responsibilities,
    }
}

// ── Document repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDocumentRepository {
    pub db: DatabaseConnection,
}

impl DocumentRepository for DbDocumentRepository {
    async fn insert(&self, document: &Document) -> Result<(), ProfileServiceError> {
        documents::ActiveModel {
            id: Set(document.id),
            user_id: Set(document.user_id),
            category: Set(document.category.as_str().to_owned()),
            file_name: Set(document.file_name.clone()),
            file_path: Set(document.file_path.clone()),
            file_type: Set(document.file_type.clone()),
            file_size: Set(document.file_size),
            created_at: Set(document.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert document row")
        .map_err(ProfileServiceError::MetadataWriteFailed)?;
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Document>, ProfileServiceError> {
        let models = documents::Entity::find()
            .filter(documents::Column::UserId.eq(user_id))
            .order_by_desc(documents::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list documents")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(models.into_iter().map(document_from_model).collect())
    }

    async fn find_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<Option<Document>, ProfileServiceError> {
        let model = documents::Entity::find()
            .filter(documents::Column::UserId.eq(user_id))
            .filter(documents::Column::FilePath.eq(file_path))
            .one(&self.db)
            .await
            .context("find document by path")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(model.map(document_from_model))
    }

    async fn delete_by_path(
        &self,
        user_id: Uuid,
        file_path: &str,
    ) -> Result<bool, ProfileServiceError> {
        let result = documents::Entity::delete_many()
            .filter(documents::Column::UserId.eq(user_id))
            .filter(documents::Column::FilePath.eq(file_path))
            .exec(&self.db)
            .await
            .context("delete document by path")
            .map_err(ProfileServiceError::Persistence)?;
        Ok(result.rows_affected > 0)
    }
}

fn document_from_model(model: documents::Model) -> Document {
    Document {
        id: model.id,
        user_id: model.user_id,
        category: DocumentCategory::from_form_value(&model.category)
            .unwrap_or(DocumentCategory::Miscellaneous),
        file_name: model.file_name,
        file_path: model.file_path,
        file_type: model.file_type,
        file_size: model.file_size,
        created_at: model.created_at,
    }
}

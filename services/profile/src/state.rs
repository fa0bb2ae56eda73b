use sea_orm::DatabaseConnection;

use crate::infra::auth_provider::HttpAuthProvider;
use crate::infra::db::{
    DbDocumentRepository, DbEducationRepository, DbEmploymentRepository, DbProfileRepository,
};
use crate::infra::object_store::HttpObjectStore;
use crate::infra::session::JwtSessionGuard;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub auth_provider: HttpAuthProvider,
    pub object_store: HttpObjectStore,
}

impl AppState {
    pub fn session_guard(&self) -> JwtSessionGuard {
        JwtSessionGuard::new(&self.jwt_secret)
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn education_repo(&self) -> DbEducationRepository {
        DbEducationRepository {
            db: self.db.clone(),
        }
    }

    pub fn employment_repo(&self) -> DbEmploymentRepository {
        DbEmploymentRepository {
            db: self.db.clone(),
        }
    }

    pub fn document_repo(&self) -> DbDocumentRepository {
        DbDocumentRepository {
            db: self.db.clone(),
        }
    }
}

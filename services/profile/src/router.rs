use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use uniport_core::health::healthz;
use uniport_core::middleware::request_id_layer;
use uniport_domain::document::MAX_UPLOAD_BYTES;

use crate::handlers::{
    academic_info::{get_academic_info, save_academic_info},
    auth::{login, logout, signup},
    documents::{delete_document, get_documents, upload_document},
    employment_info::{get_employment_info, save_employment_info},
    health::readyz,
    personal_info::{get_personal_info, save_personal_info},
    review::get_review,
    wizard::get_wizard_overview,
};
use crate::middleware::{redirect_authenticated, require_session};
use crate::state::AppState;

/// Multipart framing overhead on top of the document cap, so payloads just
/// over the cap get the validation error instead of a transport 413.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let auth_pages = Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .layer(from_fn_with_state(state.clone(), redirect_authenticated));

    let wizard = Router::new()
        .route("/profile/create", get(get_wizard_overview))
        .route("/profile/create/personal-info", get(get_personal_info))
        .route("/profile/create/personal-info", post(save_personal_info))
        .route("/profile/create/academic-info", get(get_academic_info))
        .route("/profile/create/academic-info", post(save_academic_info))
        .route("/profile/create/employment-info", get(get_employment_info))
        .route("/profile/create/employment-info", post(save_employment_info))
        .route("/profile/create/docs", get(get_documents))
        .route(
            "/profile/create/docs",
            post(upload_document).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/profile/create/docs", delete(delete_document))
        .route("/profile/create/review", get(get_review))
        .layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .merge(auth_pages)
        .route("/logout", post(logout))
        // Wizard
        .merge(wizard)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

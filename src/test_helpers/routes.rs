use actix_web::{post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::error;

use super::seed_sample_cv;
use crate::modules::cv_profile::adapter::outgoing::CvProfileRepositoryPostgres;
use crate::modules::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::modules::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::shared::api::ApiResponse;

#[post("/test/seed-cv")]
pub async fn seed_cv_handler(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let db = Arc::clone(db.get_ref());

    let profiles = CvProfileRepositoryPostgres::new(Arc::clone(&db));
    let skills = SkillRepositoryPostgres::new(Arc::clone(&db));
    let projects = ProjectRepositoryPostgres::new(db);

    match seed_sample_cv(&profiles, &skills, &projects).await {
        Ok(seeded) => HttpResponse::Created().json(seeded),
        Err(e) => {
            error!("Seeding sample CV failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(seed_cv_handler);
}

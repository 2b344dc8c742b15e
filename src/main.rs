pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

// Seeding helpers - routes only compiled with feature flag
#[cfg(any(test, feature = "test-helpers"))]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;

use crate::modules::cv_profile::adapter::outgoing::CvProfileQueryPostgres;
use crate::modules::cv_profile::application::cv_profile_use_cases::CvProfileUseCases;
use crate::modules::cv_profile::application::services::GetCvProfileService;

use crate::modules::skill::adapter::outgoing::SkillQueryPostgres;
use crate::modules::skill::application::services::{GetSkillService, ListSkillsService};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;

use crate::modules::project::adapter::outgoing::ProjectQueryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    GetProjectDetailsService, ListProjectsBySkillService, ListProjectsWithTechnologiesService,
};

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub cv_profile: CvProfileUseCases,
    pub skill: SkillUseCases,
    pub project: ProjectUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;

    #[cfg(feature = "test-helpers")]
    {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!("Test seeding routes are ENABLED for environment: {}", env);
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let state = build_state(&db_arc, &config);

    let server_url = config.server_url();
    info!(
        "Server run on: {} (technology fetch: {:?}, aggregation deadline: {:?})",
        server_url, config.technology_fetch_strategy, config.aggregation_timeout
    );

    let allowed_origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&allowed_origins))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(crate::shared::api::custom_path_config())
            .app_data(crate::shared::api::custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        #[cfg(feature = "test-helpers")]
        let app = app.configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, config: &AppConfig) -> AppState {
    let cv_profile_query = CvProfileQueryPostgres::new(Arc::clone(db));
    let skill_query = SkillQueryPostgres::new(Arc::clone(db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(db));

    let list_projects = ListProjectsWithTechnologiesService::new(project_query.clone())
        .with_strategy(config.technology_fetch_strategy)
        .with_deadline(config.aggregation_timeout);
    let list_projects_by_skill = ListProjectsBySkillService::new(project_query.clone())
        .with_strategy(config.technology_fetch_strategy)
        .with_deadline(config.aggregation_timeout);

    AppState {
        cv_profile: CvProfileUseCases {
            get_profile: Arc::new(GetCvProfileService::new(cv_profile_query)),
        },
        skill: SkillUseCases {
            list: Arc::new(ListSkillsService::new(skill_query.clone())),
            get_single: Arc::new(GetSkillService::new(skill_query)),
        },
        project: ProjectUseCases {
            list: Arc::new(list_projects),
            list_by_skill: Arc::new(list_projects_by_skill),
            get_details: Arc::new(GetProjectDetailsService::new(project_query)),
        },
    }
}

/// GET-only CORS. An empty origin list allows any origin.
#[cfg(not(tarpaulin_include))]
fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    if allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    cfg.service(
        web::scope("/api/v1")
            // CV profile
            .service(crate::modules::cv_profile::adapter::incoming::web::routes::get_cv_profile_handler)
            // Skills
            .service(crate::modules::skill::adapter::incoming::web::routes::list_skills_handler)
            .service(crate::modules::skill::adapter::incoming::web::routes::get_skill_handler)
            // Projects
            .service(crate::modules::project::adapter::incoming::web::routes::list_projects_by_skill_handler)
            .service(crate::modules::project::adapter::incoming::web::routes::list_projects_handler)
            .service(crate::modules::project::adapter::incoming::web::routes::get_project_details_handler),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

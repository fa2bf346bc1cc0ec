use std::time::Duration;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, clients, db};

use auth::jwt::JwtService;
use clients::company::CompanyApiClient;
use clients::job_category::JobCategoryApiClient;
use repositories::sqlx_repo::SqlxExperienceRepo;
use use_cases::experience::ExperienceHandler;

pub type AppExperienceHandler =
    ExperienceHandler<SqlxExperienceRepo, CompanyApiClient, JobCategoryApiClient>;

pub struct AppState {
    pub experience_handler: AppExperienceHandler,
    pub jwt_service: JwtService,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let experience_repo = SqlxExperienceRepo::new(pool);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .build()
            .expect("Failed to build HTTP client for collaborator lookups");

        let companies = CompanyApiClient::new(http.clone(), config.company_api_uri.clone());
        let job_categories =
            JobCategoryApiClient::new(http, config.job_category_api_uri.clone());

        AppState {
            experience_handler: ExperienceHandler::new(experience_repo, companies, job_categories),
            jwt_service,
        }
    }
}

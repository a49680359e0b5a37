use std::sync::Arc;

use actix_web::cookie::Key;
use config::ConfigError;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, github, mail, render, utils};

use github::{GithubApi, ReqwestGithubClient};
use mail::{mailer_from_settings, Mailer};
use render::{JsonPageRenderer, PageRenderer};
use settings::AppConfig;
use shared_repos::{ContactStore, ProjectStore, SharedRepositories, TestimonialStore};
use use_cases::{
    contact::ContactHandler, github_profile::GithubProfileService, portfolio::PortfolioHandler,
};

pub struct AppState {
    pub projects: ProjectStore,
    pub testimonials: TestimonialStore,
    pub contacts: ContactStore,
    pub portfolio_handler: PortfolioHandler,
    pub contact_handler: ContactHandler,
    pub profile_service: GithubProfileService,
    pub renderer: Arc<dyn PageRenderer>,
    pub flash_key: Key,
    pub site_name: String,
}

impl AppState {
    pub fn new(config: &AppConfig, repos: SharedRepositories) -> Result<Self, ConfigError> {
        let github = Arc::new(ReqwestGithubClient::from_config(config));
        let mailer = mailer_from_settings(config.mail_settings().as_ref());

        Self::from_parts(config, repos, github, mailer, Arc::new(JsonPageRenderer))
    }

    /// Assembles the state from explicit collaborators.
    pub fn from_parts(
        config: &AppConfig,
        repos: SharedRepositories,
        github: Arc<dyn GithubApi>,
        mailer: Arc<dyn Mailer>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Result<Self, ConfigError> {
        let flash_key = config.cookie_key()?;

        let portfolio_handler =
            PortfolioHandler::new(repos.project_repo.clone(), repos.testimonial_repo.clone());
        let contact_handler =
            ContactHandler::from_config(config, repos.contact_repo.clone(), mailer);
        let profile_service = GithubProfileService::from_config(config, github)?;

        Ok(AppState {
            projects: repos.project_repo,
            testimonials: repos.testimonial_repo,
            contacts: repos.contact_repo,
            portfolio_handler,
            contact_handler,
            profile_service,
            renderer,
            flash_key,
            site_name: config.name.clone(),
        })
    }
}

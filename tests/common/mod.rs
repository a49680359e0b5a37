#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use cognito_portfolio::{
    entities::{
        github::{GithubRepoPayload, GithubUserPayload},
        project::NewProject,
    },
    github::{GithubApi, GithubError},
    mail::{MailError, Mailer, OutgoingEmail},
    render::JsonPageRenderer,
    settings::AppConfig,
    shared_repos::SharedRepositories,
    AppState,
};
use parking_lot::Mutex;

pub const OWNER_EMAIL: &str = "owner@example.com";

/// GitHub stand-in that is always unreachable, so pages show fallback data.
pub struct OfflineGithub;

#[async_trait]
impl GithubApi for OfflineGithub {
    async fn fetch_profile(&self) -> Result<GithubUserPayload, GithubError> {
        Err(GithubError::Request("offline".into()))
    }

    async fn fetch_repositories(&self) -> Result<Vec<GithubRepoPayload>, GithubError> {
        Err(GithubError::Request("offline".into()))
    }
}

/// Keeps every email it is asked to send; optionally fails each send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().push(email.clone());
        if self.fail {
            return Err(MailError::Transport("connection refused".into()));
        }
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        name: "Cognito Inc.".into(),
        mail_recipient: Some(OWNER_EMAIL.into()),
        seed_demo_data: false,
        ..Default::default()
    }
}

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub repos: SharedRepositories,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_mailer(RecordingMailer::default())
    }

    pub fn with_mailer(mailer: RecordingMailer) -> Self {
        let repos = SharedRepositories::in_memory();
        let mailer = Arc::new(mailer);

        let state = AppState::from_parts(
            &test_config(),
            repos.clone(),
            Arc::new(OfflineGithub),
            mailer.clone(),
            Arc::new(JsonPageRenderer),
        )
        .expect("test state");

        TestApp {
            state: web::Data::new(state),
            repos,
            mailer,
        }
    }

    pub async fn add_projects(&self, count: usize) {
        for i in 1..=count {
            self.repos
                .project_repo
                .create(&sample_project(&format!("Project {}", i)))
                .await
                .expect("project insert");
        }
    }
}

pub fn sample_project(name: &str) -> NewProject {
    NewProject {
        name: name.into(),
        description: "A sample project".into(),
        github_url: "https://github.com/cognito-inc/sample".into(),
        stack: "Rust, Actix".into(),
        image_url: "default-project.jpg".into(),
        detailed_description: None,
        demo_url: Some("https://demo.example.com".into()),
        features: Some("Fast, Safe".into()),
    }
}

/// Builds an in-process service over the full route table.
macro_rules! init_app {
    ($test_app:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($test_app.state.clone())
                .configure(cognito_portfolio::routes::configure_routes),
        )
        .await
    };
}

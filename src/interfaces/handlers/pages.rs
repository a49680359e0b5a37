use actix_web::{get, web, HttpResponse};
use tracing::instrument;

use crate::{
    errors::AppError,
    render::PageContext,
    use_cases::github_profile::DEFAULT_REPOSITORY_LIMIT,
    AppState,
};

/// Renders `page` with the global values added to `context`.
pub(crate) fn render_page(
    state: &AppState,
    page: &str,
    context: PageContext,
) -> Result<HttpResponse, AppError> {
    let context = context.with_globals(&state.site_name)?;
    Ok(state.renderer.render(page, context)?.into_response())
}

#[get("/")]
#[instrument(skip(state))]
pub async fn home(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (featured, testimonials) = state.portfolio_handler.home().await?;

    let context = PageContext::new()
        .insert("projects", &featured)?
        .insert("testimonials", &testimonials)?;

    render_page(&state, "home", context)
}

#[get("/about")]
#[instrument(skip(state))]
pub async fn about(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (profile, repositories) = state
        .profile_service
        .get_profile_data(DEFAULT_REPOSITORY_LIMIT)
        .await;

    let context = PageContext::new()
        .insert("profile", &profile)?
        .insert("repositories", &repositories)?;

    render_page(&state, "about", context)
}

#[get("/projects")]
#[instrument(skip(state))]
pub async fn projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let all_projects = state.portfolio_handler.all_projects().await?;
    let (_, repositories) = state
        .profile_service
        .get_profile_data(DEFAULT_REPOSITORY_LIMIT)
        .await;

    let context = PageContext::new()
        .insert("projects", &all_projects)?
        .insert("repositories", &repositories)?;

    render_page(&state, "projects", context)
}

#[get("/project/{id}")]
#[instrument(skip(state))]
pub async fn project_detail(
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let project = state.portfolio_handler.project_detail(id.into_inner()).await?;

    let context = PageContext::new()
        .insert("features", &project.features_list())?
        .insert("stack", &project.stack_list())?
        .insert("project", &project)?;

    render_page(&state, "project_detail", context)
}

#[get("/services")]
pub async fn services(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    render_page(&state, "services", PageContext::new())
}

#[get("/partners")]
pub async fn partners(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    render_page(&state, "partners", PageContext::new())
}

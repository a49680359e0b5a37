use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::{contact::Contact, project::Project, record::Record, testimonial::Testimonial},
    errors::AppError,
    repositories::record_store::{read_only, RecordStore},
    AppState,
};

/// A record type exposed under `/admin/{PATH}`.
pub trait AdminResource: Record {
    const PATH: &'static str;

    /// Whether rows may be created through the admin surface.
    const CREATABLE: bool = true;

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>>;
}

impl AdminResource for Project {
    const PATH: &'static str = "/projects";

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>> {
        &state.projects
    }
}

impl AdminResource for Testimonial {
    const PATH: &'static str = "/testimonials";

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>> {
        &state.testimonials
    }
}

/// Contacts only come from the public contact form.
impl AdminResource for Contact {
    const PATH: &'static str = "/contacts";
    const CREATABLE: bool = false;

    fn store(state: &AppState) -> &Arc<dyn RecordStore<Self>> {
        &state.contacts
    }
}

#[instrument(skip(state), fields(resource = T::LABEL))]
pub async fn list_records<T: AdminResource>(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rows = T::store(&state).list(None).await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[instrument(skip(state, payload), fields(resource = T::LABEL))]
pub async fn create_record<T: AdminResource>(
    state: web::Data<AppState>,
    payload: web::Json<T::New>,
) -> Result<HttpResponse, AppError> {
    let new = payload.into_inner();
    new.validate()?;

    let row = T::store(&state).create(&new).await?;
    tracing::info!(id = row.id(), "{} created", T::LABEL);

    Ok(HttpResponse::Created().json(row))
}

/// POST target for resources that cannot be created here; answers 405 without reading the body.
pub async fn reject_create<T: AdminResource>() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} records cannot be created from the admin",
        T::LABEL
    )))
}

#[instrument(skip(state), fields(resource = T::LABEL))]
pub async fn get_record<T: AdminResource>(
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let row = T::store(&state).get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(row))
}

/// Absent fields stay unchanged; `null` clears an optional column.
#[instrument(skip(state, payload), fields(resource = T::LABEL))]
pub async fn update_record<T: AdminResource>(
    id: web::Path<i64>,
    state: web::Data<AppState>,
    payload: web::Json<T::Changes>,
) -> Result<HttpResponse, AppError> {
    let changes = payload.into_inner();
    changes.validate()?;

    let row = T::store(&state).update(id.into_inner(), &changes).await?;
    Ok(HttpResponse::Ok().json(row))
}

/// PATCH target for read-only resources; answers 405 without reading the body.
pub async fn reject_update<T: AdminResource>() -> Result<HttpResponse, AppError> {
    Err(read_only::<T>())
}

#[instrument(skip(state), fields(resource = T::LABEL))]
pub async fn delete_record<T: AdminResource>(
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    T::store(&state).delete(id).await?;
    tracing::info!(id, "{} deleted", T::LABEL);

    Ok(HttpResponse::NoContent().finish())
}

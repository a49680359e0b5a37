use std::collections::BTreeMap;

use actix_web::{
    get,
    http::header::LOCATION,
    post, web, HttpRequest, HttpResponse,
};
use tracing::instrument;

use crate::{
    constants::CONTACT_SUCCESS_MESSAGE,
    entities::contact::ContactForm,
    errors::{group_field_errors, AppError},
    handlers::pages::render_page,
    render::PageContext,
    utils::flash::{clear_flash, flash_cookie, read_flash, FLASH_COOKIE},
    AppState,
};

fn contact_context(
    form: &ContactForm,
    errors: &BTreeMap<String, Vec<String>>,
    flash: Option<&str>,
) -> Result<PageContext, AppError> {
    PageContext::new()
        .insert("form", form)?
        .insert("errors", errors)?
        .insert("flash", &flash)
}

#[get("/contact")]
#[instrument(skip(req, state))]
pub async fn contact_page(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let had_cookie = req.cookie(FLASH_COOKIE).is_some();
    let flash = read_flash(&req, &state.flash_key);

    let context = contact_context(&ContactForm::default(), &BTreeMap::new(), flash.as_deref())?
        .with_globals(&state.site_name)?;
    let rendered = state.renderer.render("contact", context)?;

    let mut builder = HttpResponse::Ok();
    // Unreadable or forged cookies are dropped too
    if had_cookie {
        builder.cookie(clear_flash());
    }

    Ok(rendered.respond_with(builder))
}

#[post("/contact")]
#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match state.contact_handler.submit(form.clone()).await {
        Ok(_) => {
            let mut builder = HttpResponse::SeeOther();
            builder.insert_header((LOCATION, "/contact"));
            if let Some(cookie) = flash_cookie(&state.flash_key, CONTACT_SUCCESS_MESSAGE) {
                builder.cookie(cookie);
            }
            Ok(builder.finish())
        }
        Err(AppError::ValidationError(errors)) => {
            tracing::debug!(count = errors.len(), "Contact form rejected");
            let context = contact_context(&form, &group_field_errors(&errors), None)?;
            render_page(&state, "contact", context)
        }
        Err(e) => Err(e),
    }
}

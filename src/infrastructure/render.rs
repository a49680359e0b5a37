use actix_web::{HttpResponse, HttpResponseBuilder};
use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Named values handed to the renderer for one page.
#[derive(Debug, Default, Clone)]
pub struct PageContext(Map<String, Value>);

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self, AppError> {
        self.0.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Values every page receives: the copyright year and the site name.
    pub fn with_globals(self, site_name: &str) -> Result<Self, AppError> {
        self.insert("current_year", &Utc::now().year())?
            .insert("site_name", site_name)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug)]
pub struct RenderedPage {
    pub content_type: &'static str,
    pub body: String,
}

impl RenderedPage {
    pub fn into_response(self) -> HttpResponse {
        self.respond_with(HttpResponse::Ok())
    }

    /// Finishes a caller-prepared builder, e.g. one carrying cookies.
    pub fn respond_with(self, mut builder: HttpResponseBuilder) -> HttpResponse {
        builder.content_type(self.content_type).body(self.body)
    }
}

/// Turns a page name and its context into a response body. Markup lives
/// with the implementation, never with the handlers.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &str, context: PageContext) -> Result<RenderedPage, AppError>;
}

/// Emits `{"page": ..., "context": {...}}` for a front-end template layer.
pub struct JsonPageRenderer;

impl PageRenderer for JsonPageRenderer {
    fn render(&self, page: &str, context: PageContext) -> Result<RenderedPage, AppError> {
        let body = serde_json::to_string(&serde_json::json!({
            "page": page,
            "context": Value::Object(context.into_inner()),
        }))?;

        Ok(RenderedPage {
            content_type: "application/json",
            body,
        })
    }
}

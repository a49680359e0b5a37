use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{option_fields::PatchString, record::Record};

pub const DEFAULT_RATING: i32 = 5;

fn default_rating() -> i32 {
    DEFAULT_RATING
}

/// Client quote shown on the landing page. `rating` is not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: i64,
    pub client_name: String,
    pub company: Option<String>,
    pub message: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub client_name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub company: Option<String>,

    #[validate(length(min = 1))]
    pub message: String,

    #[serde(default = "default_rating")]
    pub rating: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct TestimonialChanges {
    #[validate(length(min = 1, max = 100))]
    pub client_name: Option<String>,

    #[validate(length(max = 100))]
    pub company: PatchString,

    #[validate(length(min = 1))]
    pub message: Option<String>,

    pub rating: Option<i32>,
}

impl Record for Testimonial {
    type New = NewTestimonial;
    type Changes = TestimonialChanges;

    const LABEL: &'static str = "Testimonial";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, created_at: DateTime<Utc>, new: &NewTestimonial) -> Self {
        Testimonial {
            id,
            client_name: new.client_name.clone(),
            company: new.company.clone(),
            message: new.message.clone(),
            rating: new.rating,
            created_at,
        }
    }

    fn apply_changes(&mut self, changes: &TestimonialChanges) {
        if let Some(client_name) = &changes.client_name {
            self.client_name = client_name.clone();
        }
        changes.company.apply_to(&mut self.company);
        if let Some(message) = &changes.message {
            self.message = message.clone();
        }
        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_defaults_to_five() {
        let new: NewTestimonial = serde_json::from_value(serde_json::json!({
            "client_name": "Marie Dubois",
            "message": "Exceptional work."
        }))
        .unwrap();
        assert_eq!(new.rating, DEFAULT_RATING);
        assert_eq!(new.company, None);
    }

    #[test]
    fn out_of_range_rating_is_accepted() {
        let new = NewTestimonial {
            client_name: "Pierre Martin".into(),
            company: Some("InnovCorp".into()),
            message: "Great".into(),
            rating: 42,
        };
        assert!(new.validate().is_ok());
    }
}

pub mod contact;
pub mod github;
pub mod option_fields;
pub mod project;
pub mod record;
pub mod testimonial;

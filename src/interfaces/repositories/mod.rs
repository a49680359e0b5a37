pub mod contact;
pub mod memory;
pub mod project;
pub mod record_store;
pub mod sqlx_repo;
pub mod testimonial;

use actix_web::web;

use crate::handlers::{contact, pages};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::about)
        .service(pages::projects)
        .service(pages::project_detail)
        .service(pages::services)
        .service(pages::partners)
        .service(contact::contact_page)
        .service(contact::submit_contact);
}

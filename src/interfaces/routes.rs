use actix_web::web;

use crate::handlers::system::health_check;

mod admin;
mod json_error;
mod pages;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);

    cfg.service(health_check);
    cfg.configure(pages::config_routes);
    cfg.service(web::scope("/admin").configure(admin::config_routes));
}

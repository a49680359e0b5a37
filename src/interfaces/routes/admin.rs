use actix_web::web;

use crate::{
    entities::{contact::Contact, project::Project, testimonial::Testimonial},
    handlers::admin::{
        create_record, delete_record, get_record, list_records, reject_create, reject_update,
        update_record, AdminResource,
    },
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(resource_routes::<Project>)
        .configure(resource_routes::<Testimonial>)
        .configure(resource_routes::<Contact>);
}

fn resource_routes<T: AdminResource>(cfg: &mut web::ServiceConfig) {
    let post = if T::CREATABLE {
        web::post().to(create_record::<T>)
    } else {
        web::post().to(reject_create::<T>)
    };

    let patch = if T::EDITABLE {
        web::patch().to(update_record::<T>)
    } else {
        web::patch().to(reject_update::<T>)
    };

    cfg.service(
        web::scope(T::PATH)
            .service(
                web::resource("")
                    .route(web::get().to(list_records::<T>))
                    .route(post)
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_record::<T>))
                    .route(patch)
                    .route(web::delete().to(delete_record::<T>))
            )
    );
}

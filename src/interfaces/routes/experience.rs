use actix_web::web;

use crate::handlers::experience;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experience")
            .service(
                web::resource("")
                    .route(web::get().to(experience::list_experiences))
                    .route(web::post().to(experience::create_experience))
                    .route(web::put().to(experience::update_experience))
            )
            // Registered before /{id} so "detailed" is not matched as an id.
            .service(
                web::resource("/detailed/{id}")
                    .route(web::get().to(experience::get_detailed_experience))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(experience::get_experience))
                    .route(web::delete().to(experience::delete_experience))
            )
    );
}

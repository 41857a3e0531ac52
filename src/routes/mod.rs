use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::utils::webutils::validate_token;

pub mod profile;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let session_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(
        web::scope("/user")
            .service(user::sign_up::sign_up)
            .service(user::log_in::log_in)
            .service(user::recover_password::recover_password)
            .service(user::reset_password::reset_password)
            // everything below requires a resolved session
            .service(
                web::scope("")
                    .wrap(session_auth)
                    .service(user::update::update_profile)
                    .service(user::update_password::update_password)
                    .service(user::picture::set_picture)
                    .service(user::picture::delete_picture)
                    .service(user::delete::delete_account),
            ),
    );
    cfg.service(profile::profile);
}

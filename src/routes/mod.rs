// Route exports
pub mod doctors;
pub mod errors;

use actix_web::web;

pub use doctors::AppState;
pub use errors::handle_json_payload_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(doctors::configure);
}

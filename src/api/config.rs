use actix_web::web;

use super::battle_apis::fight;
use super::pokemon_apis::{create_pokemon, get_pokemon, update_pokemon};
use super::stats_apis::get_stats;
use crate::errors::ApiError;

/// Deserialization failures become a 400 with the same JSON message shape as
/// every other error response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(get_pokemon)
        .service(create_pokemon)
        .service(update_pokemon)
        .service(fight)
        .service(get_stats);
}

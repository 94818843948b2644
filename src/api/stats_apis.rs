use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::repository::store::Store;

const NO_BATTLES_SENTINEL: &str = "No battles yet";

#[derive(Serialize, Deserialize, Debug)]
pub struct StatsResponse {
    #[serde(rename = "totalBattles")]
    pub total_battles: i64,
    #[serde(rename = "totalPokemon")]
    pub total_pokemon: i64,
    #[serde(rename = "topTrainer")]
    pub top_trainer: String,
}

#[get("/stats")]
pub async fn get_stats(db: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    let total_battles = db.count_battles()?;
    let total_pokemon = db.count_pokemon()?;
    let top_trainer = db
        .top_winner_name()?
        .unwrap_or_else(|| NO_BATTLES_SENTINEL.to_string());

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_battles,
        total_pokemon,
        top_trainer,
    }))
}

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::battle::NewBattle;
use crate::models::pokemon::Pokemon;
use crate::repository::store::Store;

#[derive(Serialize, Deserialize)]
pub struct FightRequest {
    pokemon1_id: Option<i32>,
    pokemon2_id: Option<i32>,
}

#[derive(Serialize, Deserialize)]
pub struct FightResponse {
    pub winner: Pokemon,
}

/// Winner is the row with strictly greater attack; on equal attack the second
/// row wins. `first` and `second` are in store result order, which is not
/// necessarily the order the ids were submitted in.
fn resolve_winner(first: Pokemon, second: Pokemon) -> Pokemon {
    if first.attack > second.attack {
        first
    } else {
        second
    }
}

#[post("/fight")]
pub async fn fight(
    db: web::Data<dyn Store>,
    fight_request: web::Json<FightRequest>,
) -> Result<HttpResponse, ApiError> {
    let pokemon1_id = fight_request
        .pokemon1_id
        .ok_or_else(|| ApiError::BadRequest("Two Pokémon are required".to_string()))?;
    let pokemon2_id = fight_request
        .pokemon2_id
        .ok_or_else(|| ApiError::BadRequest("Two Pokémon are required".to_string()))?;

    // One lookup for both rows; the same id passed twice yields a single row
    // and is rejected along with the missing cases.
    let participants = db.find_pokemon_pair(pokemon1_id, pokemon2_id)?;
    let mut participants = participants.into_iter();
    let (Some(first), Some(second)) = (participants.next(), participants.next()) else {
        return Err(ApiError::NotFound(
            "One or both Pokémon not found".to_string(),
        ));
    };

    let winner = resolve_winner(first, second);

    let battle = db
        .insert_battle(NewBattle {
            pokemon1_id,
            pokemon2_id,
            winner_id: winner.id,
        })
        .map_err(|err| {
            log::error!("failed to record battle: {}", err);
            ApiError::Internal("Error recording the fight".to_string())
        })?;
    log::debug!("battle {} recorded, winner {}", battle.id, battle.winner_id);

    Ok(HttpResponse::Ok().json(FightResponse { winner }))
}

use actix_web::{get, post, put, web, HttpResponse};

use crate::errors::{ApiError, ApiMessage};
use crate::models::pokemon::NewPokemon;
use crate::repository::store::Store;

#[get("/pokemon")]
pub async fn get_pokemon(db: web::Data<dyn Store>) -> Result<HttpResponse, ApiError> {
    let pokemon = db.list_pokemon()?;
    Ok(HttpResponse::Ok().json(pokemon))
}

#[post("/pokemon")]
pub async fn create_pokemon(
    db: web::Data<dyn Store>,
    new_pokemon: web::Json<NewPokemon>,
) -> Result<HttpResponse, ApiError> {
    let new_pokemon = new_pokemon.into_inner();

    if db.find_pokemon_by_name(&new_pokemon.name)?.is_some() {
        return Err(ApiError::Conflict(
            "A Pokémon with this name already exists.".to_string(),
        ));
    }

    match db.insert_pokemon(new_pokemon) {
        Ok(created) => {
            log::debug!("created pokemon {} ({})", created.id, created.name);
            Ok(HttpResponse::Created().json(ApiMessage::new("Pokémon added successfully!")))
        }
        // The unique index catches inserts racing past the name check.
        Err(err) if err.is_unique_violation() => Err(ApiError::Conflict(
            "A Pokémon with this name already exists.".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}

#[put("/pokemon/{id}")]
pub async fn update_pokemon(
    db: web::Data<dyn Store>,
    id: web::Path<i32>,
    updated_pokemon: web::Json<NewPokemon>,
) -> Result<HttpResponse, ApiError> {
    let pokemon_id = id.into_inner();

    if db.find_pokemon_by_id(pokemon_id)?.is_none() {
        return Err(ApiError::NotFound("Pokémon not found".to_string()));
    }

    db.update_pokemon(pokemon_id, updated_pokemon.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiMessage::new("Pokémon updated successfully!")))
}

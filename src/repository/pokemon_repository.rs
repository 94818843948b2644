use diesel::prelude::*;

use crate::models::pokemon::{NewPokemon, Pokemon};
use crate::repository::schema::pokemon::dsl::*;

pub fn get_pokemon(connection: &mut PgConnection) -> QueryResult<Vec<Pokemon>> {
    pokemon.load::<Pokemon>(connection)
}

pub fn get_pokemon_by_id(
    connection: &mut PgConnection,
    pokemon_id: i32,
) -> QueryResult<Option<Pokemon>> {
    pokemon
        .find(pokemon_id)
        .get_result::<Pokemon>(connection)
        .optional()
}

pub fn get_pokemon_by_name(
    connection: &mut PgConnection,
    pokemon_name: &str,
) -> QueryResult<Option<Pokemon>> {
    pokemon
        .filter(name.eq(pokemon_name))
        .first::<Pokemon>(connection)
        .optional()
}

pub fn create_pokemon(
    connection: &mut PgConnection,
    new_pokemon: NewPokemon,
) -> QueryResult<Pokemon> {
    diesel::insert_into(pokemon)
        .values(&new_pokemon)
        .get_result::<Pokemon>(connection)
}

pub fn update_pokemon_by_id(
    connection: &mut PgConnection,
    pokemon_id: i32,
    changes: NewPokemon,
) -> QueryResult<usize> {
    diesel::update(pokemon.find(pokemon_id))
        .set(&changes)
        .execute(connection)
}

/// Both fight participants in one round trip. Passing the same id twice
/// yields a single row, which the caller rejects.
pub fn get_pokemon_pair(
    connection: &mut PgConnection,
    first_id: i32,
    second_id: i32,
) -> QueryResult<Vec<Pokemon>> {
    pokemon
        .filter(id.eq_any(vec![first_id, second_id]))
        .load::<Pokemon>(connection)
}

pub fn count_pokemon(connection: &mut PgConnection) -> QueryResult<i64> {
    pokemon.count().get_result::<i64>(connection)
}

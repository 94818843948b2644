use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

use crate::models::battle::{Battle, NewBattle};
use crate::models::pokemon::{NewPokemon, Pokemon};
use crate::repository::store::{Store, StoreError};
use crate::repository::{battle_repository, pokemon_repository};

type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
type DBConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Postgres-backed store. The pool is built once at startup; every query
/// checks a connection out and returns it when the handler is done.
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool: DBPool = r2d2::Pool::builder()
            .build(manager)
            .expect("Failed to create pool.");
        Database { pool }
    }

    fn get_connection(&self) -> Result<DBConnection, StoreError> {
        self.pool.get().map_err(|err| StoreError::Pool(err.to_string()))
    }
}

impl Store for Database {
    fn list_pokemon(&self) -> Result<Vec<Pokemon>, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::get_pokemon(&mut connection)?)
    }

    fn find_pokemon_by_id(&self, pokemon_id: i32) -> Result<Option<Pokemon>, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::get_pokemon_by_id(&mut connection, pokemon_id)?)
    }

    fn find_pokemon_by_name(&self, pokemon_name: &str) -> Result<Option<Pokemon>, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::get_pokemon_by_name(&mut connection, pokemon_name)?)
    }

    fn insert_pokemon(&self, new_pokemon: NewPokemon) -> Result<Pokemon, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::create_pokemon(&mut connection, new_pokemon)?)
    }

    fn update_pokemon(&self, pokemon_id: i32, changes: NewPokemon) -> Result<(), StoreError> {
        let mut connection = self.get_connection()?;
        pokemon_repository::update_pokemon_by_id(&mut connection, pokemon_id, changes)?;
        Ok(())
    }

    fn find_pokemon_pair(&self, first_id: i32, second_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::get_pokemon_pair(&mut connection, first_id, second_id)?)
    }

    fn insert_battle(&self, new_battle: NewBattle) -> Result<Battle, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(battle_repository::create_battle(&mut connection, new_battle)?)
    }

    fn count_pokemon(&self) -> Result<i64, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(pokemon_repository::count_pokemon(&mut connection)?)
    }

    fn count_battles(&self) -> Result<i64, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(battle_repository::count_battles(&mut connection)?)
    }

    fn top_winner_name(&self) -> Result<Option<String>, StoreError> {
        let mut connection = self.get_connection()?;
        Ok(battle_repository::top_winner_name(&mut connection)?)
    }
}

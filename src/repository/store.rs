use thiserror::Error;

use crate::models::battle::{Battle, NewBattle};
use crate::models::pokemon::{NewPokemon, Pokemon};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(String),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

impl StoreError {
    /// True when the wrapped error is a unique-constraint violation, e.g. a
    /// concurrent insert slipping past the name check.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Query(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }
}

/// Everything the handlers need from the relational store. Implemented by
/// `Database` (diesel + r2d2) in production and by the in-memory store in
/// tests, so handlers never touch a connection directly.
pub trait Store: Send + Sync {
    fn list_pokemon(&self) -> Result<Vec<Pokemon>, StoreError>;
    fn find_pokemon_by_id(&self, pokemon_id: i32) -> Result<Option<Pokemon>, StoreError>;
    fn find_pokemon_by_name(&self, pokemon_name: &str) -> Result<Option<Pokemon>, StoreError>;
    fn insert_pokemon(&self, new_pokemon: NewPokemon) -> Result<Pokemon, StoreError>;
    fn update_pokemon(&self, pokemon_id: i32, changes: NewPokemon) -> Result<(), StoreError>;

    /// Fetch both participants with a single `id IN (a, b)` lookup. Rows come
    /// back in the store's natural order, which is not necessarily the order
    /// the ids were passed in.
    fn find_pokemon_pair(&self, first_id: i32, second_id: i32) -> Result<Vec<Pokemon>, StoreError>;
    fn insert_battle(&self, new_battle: NewBattle) -> Result<Battle, StoreError>;

    fn count_pokemon(&self) -> Result<i64, StoreError>;
    fn count_battles(&self) -> Result<i64, StoreError>;
    /// Name of the pokemon with the most recorded wins, or None when no
    /// battles exist.
    fn top_winner_name(&self) -> Result<Option<String>, StoreError>;
}

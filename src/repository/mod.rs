pub mod battle_repository;
pub mod database;
pub mod pokemon_repository;
pub mod schema;
pub mod store;

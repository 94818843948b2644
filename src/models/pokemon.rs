use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A stored Pokémon row. Ids are assigned by the database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Queryable, Identifiable)]
#[diesel(table_name = crate::repository::schema::pokemon)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

/// Payload for creating or fully replacing a Pokémon. All fields are
/// required; a missing field is rejected by the JSON extractor.
#[derive(Serialize, Deserialize, Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::repository::schema::pokemon)]
pub struct NewPokemon {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

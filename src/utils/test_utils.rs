use std::sync::Mutex;

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::models::battle::{Battle, NewBattle};
use crate::models::pokemon::{NewPokemon, Pokemon};
use crate::repository::store::{Store, StoreError};

/// In-memory stand-in for the Postgres store. Rows keep insertion order, ids
/// are assigned sequentially, and a name landing on another row — whether by
/// insert or by update — fails with the same unique-violation error the real
/// schema produces.
pub struct MemStore {
    pokemon: Mutex<Vec<Pokemon>>,
    battles: Mutex<Vec<Battle>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            pokemon: Mutex::new(Vec::new()),
            battles: Mutex::new(Vec::new()),
        }
    }

    fn unique_violation(pokemon_name: &str) -> StoreError {
        StoreError::Query(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(format!("duplicate key value: name = {pokemon_name}")),
        ))
    }
}

impl Store for MemStore {
    fn list_pokemon(&self) -> Result<Vec<Pokemon>, StoreError> {
        Ok(self.pokemon.lock().unwrap().clone())
    }

    fn find_pokemon_by_id(&self, pokemon_id: i32) -> Result<Option<Pokemon>, StoreError> {
        let pokemon = self.pokemon.lock().unwrap();
        Ok(pokemon.iter().find(|p| p.id == pokemon_id).cloned())
    }

    fn find_pokemon_by_name(&self, pokemon_name: &str) -> Result<Option<Pokemon>, StoreError> {
        let pokemon = self.pokemon.lock().unwrap();
        Ok(pokemon.iter().find(|p| p.name == pokemon_name).cloned())
    }

    fn insert_pokemon(&self, new_pokemon: NewPokemon) -> Result<Pokemon, StoreError> {
        let mut pokemon = self.pokemon.lock().unwrap();
        if pokemon.iter().any(|p| p.name == new_pokemon.name) {
            return Err(Self::unique_violation(&new_pokemon.name));
        }
        let created = Pokemon {
            id: pokemon.len() as i32 + 1,
            name: new_pokemon.name,
            type_: new_pokemon.type_,
            health: new_pokemon.health,
            attack: new_pokemon.attack,
            defense: new_pokemon.defense,
        };
        pokemon.push(created.clone());
        Ok(created)
    }

    fn update_pokemon(&self, pokemon_id: i32, changes: NewPokemon) -> Result<(), StoreError> {
        let mut pokemon = self.pokemon.lock().unwrap();
        if pokemon
            .iter()
            .any(|p| p.id != pokemon_id && p.name == changes.name)
        {
            return Err(Self::unique_violation(&changes.name));
        }
        if let Some(row) = pokemon.iter_mut().find(|p| p.id == pokemon_id) {
            row.name = changes.name;
            row.type_ = changes.type_;
            row.health = changes.health;
            row.attack = changes.attack;
            row.defense = changes.defense;
        }
        Ok(())
    }

    fn find_pokemon_pair(&self, first_id: i32, second_id: i32) -> Result<Vec<Pokemon>, StoreError> {
        let pokemon = self.pokemon.lock().unwrap();
        Ok(pokemon
            .iter()
            .filter(|p| p.id == first_id || p.id == second_id)
            .cloned()
            .collect())
    }

    fn insert_battle(&self, new_battle: NewBattle) -> Result<Battle, StoreError> {
        let mut battles = self.battles.lock().unwrap();
        let created = Battle {
            id: battles.len() as i32 + 1,
            pokemon1_id: new_battle.pokemon1_id,
            pokemon2_id: new_battle.pokemon2_id,
            winner_id: new_battle.winner_id,
            created_at: chrono::Utc::now().naive_utc(),
        };
        battles.push(created.clone());
        Ok(created)
    }

    fn count_pokemon(&self) -> Result<i64, StoreError> {
        Ok(self.pokemon.lock().unwrap().len() as i64)
    }

    fn count_battles(&self) -> Result<i64, StoreError> {
        Ok(self.battles.lock().unwrap().len() as i64)
    }

    fn top_winner_name(&self) -> Result<Option<String>, StoreError> {
        let battles = self.battles.lock().unwrap();
        let pokemon = self.pokemon.lock().unwrap();
        let mut wins: Vec<(i32, i64)> = Vec::new();
        for battle in battles.iter() {
            match wins.iter_mut().find(|(id, _)| *id == battle.winner_id) {
                Some((_, count)) => *count += 1,
                None => wins.push((battle.winner_id, 1)),
            }
        }
        let top = wins.into_iter().max_by_key(|(_, count)| *count);
        Ok(top.and_then(|(winner_id, _)| {
            pokemon
                .iter()
                .find(|p| p.id == winner_id)
                .map(|p| p.name.clone())
        }))
    }
}

pub fn new_pokemon(name: &str, type_: &str, health: i32, attack: i32, defense: i32) -> NewPokemon {
    NewPokemon {
        name: name.to_string(),
        type_: type_.to_string(),
        health,
        attack,
        defense,
    }
}

/// Seeds the fixture roster. Squirtle and Totodile share the same attack
/// value so tie-break behavior can be exercised.
pub fn init_test_pokemon(store: &MemStore) -> Vec<Pokemon> {
    let roster = vec![
        new_pokemon("Bulbasaur", "Grass", 45, 49, 49),
        new_pokemon("Charmander", "Fire", 39, 52, 43),
        new_pokemon("Squirtle", "Water", 44, 48, 65),
        new_pokemon("Totodile", "Water", 50, 48, 64),
        new_pokemon("Snorlax", "Normal", 160, 110, 65),
    ];
    roster
        .into_iter()
        .map(|entry| store.insert_pokemon(entry).unwrap())
        .collect()
}

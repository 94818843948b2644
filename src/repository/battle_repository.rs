use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::models::battle::{Battle, NewBattle};
use crate::repository::schema::{battle_history, pokemon};

pub fn create_battle(connection: &mut PgConnection, new_battle: NewBattle) -> QueryResult<Battle> {
    diesel::insert_into(battle_history::table)
        .values(&new_battle)
        .get_result::<Battle>(connection)
}

pub fn count_battles(connection: &mut PgConnection) -> QueryResult<i64> {
    battle_history::table.count().get_result::<i64>(connection)
}

/// Most frequent winner by pokemon name, one row. The join follows
/// battle_history.winner_id -> pokemon.id.
pub fn top_winner_name(connection: &mut PgConnection) -> QueryResult<Option<String>> {
    battle_history::table
        .inner_join(pokemon::table)
        .group_by(pokemon::name)
        .select((pokemon::name, count_star()))
        .order(count_star().desc())
        .first::<(String, i64)>(connection)
        .optional()
        .map(|row| row.map(|(winner_name, _wins)| winner_name))
}

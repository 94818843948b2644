use diesel::{Associations, Identifiable, Insertable, Queryable};

use crate::models::pokemon::Pokemon;

/// One resolved fight. Rows are immutable once inserted and never go over the
/// wire; winner_id always equals pokemon1_id or pokemon2_id.
#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(belongs_to(Pokemon, foreign_key = winner_id))]
#[diesel(table_name = crate::repository::schema::battle_history)]
pub struct Battle {
    pub id: i32,
    pub pokemon1_id: i32,
    pub pokemon2_id: i32,
    pub winner_id: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::repository::schema::battle_history)]
pub struct NewBattle {
    pub pokemon1_id: i32,
    pub pokemon2_id: i32,
    pub winner_id: i32,
}

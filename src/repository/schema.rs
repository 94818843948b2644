diesel::table! {
    pokemon (id) {
        id -> Int4,
        name -> Varchar,
        #[sql_name = "type"]
        type_ -> Varchar,
        health -> Int4,
        attack -> Int4,
        defense -> Int4,
    }
}

diesel::table! {
    battle_history (id) {
        id -> Int4,
        pokemon1_id -> Int4,
        pokemon2_id -> Int4,
        winner_id -> Int4,
        created_at -> Timestamp,
    }
}

diesel::joinable!(battle_history -> pokemon (winner_id));

diesel::allow_tables_to_appear_in_same_query!(battle_history, pokemon);

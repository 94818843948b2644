pub mod battle;
pub mod pokemon;

pub mod division;
pub mod platform;
pub mod player;
pub mod region;
pub mod roster;
pub mod score_card;
pub mod team;

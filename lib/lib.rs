/// Chess domain types.
pub mod chess;
/// Standard chess rules.
pub mod rules;
/// The game controller.
pub mod game;

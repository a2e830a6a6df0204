pub mod dice;
pub mod game;
pub mod rng;
pub mod score;
pub mod simulation;

#[cfg(test)]
mod integration_tests;

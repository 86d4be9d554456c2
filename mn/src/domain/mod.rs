//! Core domain types shared by every strategy

mod direction;
mod outcome;
mod strategy;

pub use direction::Direction;
pub use outcome::Outcome;
pub use strategy::Strategy;

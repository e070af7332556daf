//! Game state contract and the grid chase world

pub mod action;
pub mod display;
pub mod grid;
pub mod layout;
pub mod loc;
pub mod state;
pub mod world;

pub use action::Action;
pub use grid::Grid;
pub use layout::DEFAULT_LAYOUT;
pub use loc::{Loc, LocDelta};
pub use state::{AgentIndex, GameState, CONTROLLED};
pub use world::{AgentState, Outcome, World};

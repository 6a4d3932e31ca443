//! Star rating state module

mod state;


pub use state::*;

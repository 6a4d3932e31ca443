//! Skill panel module
//!
//! A panel owns its categories, star counts and selected color, and turns
//! user interactions into rating updates.

mod session;
mod view;


pub use session::*;
pub use view::*;

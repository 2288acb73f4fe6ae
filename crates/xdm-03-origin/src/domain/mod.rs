//! # Domain Module
//!
//! Engine state, events, errors and the rules that bind them.

pub mod errors;
pub mod events;
pub mod invariants;
pub mod member_set;
pub mod state;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use invariants::*;
pub use member_set::MemberSet;
pub use state::OriginState;
pub use value_objects::*;

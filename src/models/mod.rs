//! Data models for the GridAI tool hub.
//!
//! These models match the frontend TypeScript interfaces exactly for
//! seamless interoperability.

mod log;
mod message;
mod tool;
mod user;

pub use log::*;
pub use message::*;
pub use tool::*;
pub use user::*;

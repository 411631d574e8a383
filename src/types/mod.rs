//! Core data records for the Hacker News API.

pub mod changes;
pub mod item;
pub mod user;

pub use changes::Changes;
pub use item::{Item, ItemType};
pub use user::User;

//! Row models and request DTOs, one module per table.

pub mod cart_item;
pub mod favorite;
pub mod session;
pub mod user;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cart_repo;
pub mod favorite_repo;
pub mod session_repo;
pub mod user_repo;

pub use cart_repo::CartRepo;
pub use favorite_repo::FavoriteRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

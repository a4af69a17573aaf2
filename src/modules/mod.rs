pub mod auth;
pub mod property;
pub mod user;

mod router;
pub use router::get_router;

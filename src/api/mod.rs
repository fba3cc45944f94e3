pub mod errors;
pub mod handlers;
pub mod openapi;
pub mod router;

pub use router::create_router;

pub mod controller;
pub mod model;
pub mod router;

pub use model::*;
pub use router::init_permissions_router;

pub mod health;
pub mod incr;
pub mod decr;
pub mod get;

pub use health::health_handler;
pub use incr::incr_handler;
pub use decr::decr_handler;
pub use get::get_handler;

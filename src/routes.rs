// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const INCR: &str = "/incr";
pub const DECR: &str = "/decr";
pub const COUNT: &str = "/get";
pub const HEALTH: &str = "/health";

pub mod limiter;
pub mod utils;

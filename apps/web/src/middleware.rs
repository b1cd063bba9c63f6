//! # ミドルウェア

mod cache_control;
mod request_log;

pub use cache_control::no_cache;
pub use request_log::{RequestOutcome, log_request_outcome};

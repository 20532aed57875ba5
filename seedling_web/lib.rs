pub mod callable;
pub mod handlers;
pub mod identity;
mod http;

pub use http::*;

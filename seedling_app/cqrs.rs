mod command;
mod query;
mod reply;

pub mod commands;
pub mod queries;

pub use command::*;
pub use query::*;
pub use reply::*;

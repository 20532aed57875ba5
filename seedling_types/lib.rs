pub mod common;
pub mod errors;
pub mod league;
pub mod learner;

pub use errors::Result;

use seedling_types::errors::ApplicationError;

use crate::config::Config;

/// A marker trait for requests answered without a Unit of Work.
/// The output is built from the request and the configuration alone.
pub trait Reply: Send + Sync {
    type Output: Send + Sync;
}

/// A trait for handlers that answer Replies.
/// No transaction is opened, so a store outage never affects them.
pub trait ReplyHandler<R: Reply> {
    fn handle(&self, request: R, config: &Config) -> Result<R::Output, ApplicationError>;
}

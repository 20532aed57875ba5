use seedling_types::{errors::ApplicationError, learner::PointsAward};

use crate::{
    config::Config,
    cqrs::{ReplyHandler, commands::AddPoints},
};

/// Acknowledges a points grant. No balance is stored yet, so nothing is written.
pub struct AddPointsCommandHandler {}

impl AddPointsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl ReplyHandler<AddPoints> for AddPointsCommandHandler {
    fn handle(&self, command: AddPoints, _config: &Config) -> Result<PointsAward, ApplicationError> {
        tracing::info!(
            "Adding {} points to user: {}",
            command.amount,
            command.caller_id
        );

        Ok(PointsAward::new(command.amount))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Number, json};

    use super::*;

    #[test]
    fn test_add_points_echoes_amount() {
        let command = AddPoints::new("u1", &json!({ "amount": 15 })).unwrap();
        let award = AddPointsCommandHandler::new()
            .handle(command, &Config::new("secret"))
            .unwrap();

        assert!(award.success);
        assert_eq!(award.message, "Added 15 points successfully");
        assert_eq!(award.new_balance, Number::from(15));
    }

    #[test]
    fn test_add_points_prints_integral_floats_without_fraction() {
        let command = AddPoints::new("u1", &json!({ "amount": 5.0 })).unwrap();
        let award = AddPointsCommandHandler::new()
            .handle(command, &Config::new("secret"))
            .unwrap();

        assert_eq!(award.message, "Added 5 points successfully");
    }
}

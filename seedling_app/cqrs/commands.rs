use serde_json::{Number, Value};

use seedling_types::{
    Result,
    errors::{AppError, ApplicationError},
    learner::{DeletionSummary, PointsAward},
};

use crate::cqrs::{Command, Reply};

/// Grant points to the caller. No balance is stored yet, so this is answered without a transaction.
#[derive(Debug, Clone)]
pub struct AddPoints {
    pub caller_id: String,
    pub amount: Number,
}

impl AddPoints {
    /// Validates the raw callable payload: `amount` must be a number greater than zero.
    pub fn new(caller_id: impl Into<String>, data: &Value) -> Result<Self, ApplicationError> {
        let amount = match data.get("amount") {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v > 0.0) => n.clone(),
            _ => return Err(AppError::InvalidAmount.into()),
        };

        Ok(Self {
            caller_id: caller_id.into(),
            amount,
        })
    }
}

impl Reply for AddPoints {
    type Output = PointsAward;
}

/// Delete every document in `posts`. Not scoped to the caller.
#[derive(Debug, Clone)]
pub struct DeleteAllPosts {
    pub requested_by: String,
}

impl DeleteAllPosts {
    pub fn new(requested_by: impl Into<String>) -> Self {
        Self {
            requested_by: requested_by.into(),
        }
    }
}

impl Command for DeleteAllPosts {
    type Output = DeletionSummary;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rejects(data: Value) -> bool {
        matches!(
            AddPoints::new("u1", &data),
            Err(ApplicationError::App(AppError::InvalidAmount))
        )
    }

    #[test]
    fn test_add_points_rejects_bad_amounts() {
        assert!(rejects(json!({ "amount": -5 })));
        assert!(rejects(json!({ "amount": 0 })));
        assert!(rejects(json!({ "amount": "10" })));
        assert!(rejects(json!({ "amount": null })));
        assert!(rejects(json!({})));
        assert!(rejects(Value::Null));
        assert!(rejects(json!([5])));
    }

    #[test]
    fn test_add_points_accepts_positive_numbers() {
        let cmd = AddPoints::new("u1", &json!({ "amount": 5 })).unwrap();
        assert_eq!(cmd.amount, Number::from(5));

        let cmd = AddPoints::new("u1", &json!({ "amount": 0.25 })).unwrap();
        assert_eq!(cmd.amount.as_f64(), Some(0.25));
    }
}

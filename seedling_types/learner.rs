use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Learner profile. Point counters are not backed by storage yet and are always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub total_points: u64,
    pub edu_points: u64,
    pub job_points: u64,
    pub completed_lessons: u64,
}

impl Profile {
    pub fn new(uid: String, display_name: String, email: String) -> Self {
        Self {
            uid,
            display_name,
            email,
            total_points: 0,
            edu_points: 0,
            job_points: 0,
            completed_lessons: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenTile {
    /// Growth stage, 0 = empty.
    pub stage: u8,
}

/// A square grid of tiles keyed by `"row,col"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    pub size: u8,
    pub point: u32,
    pub tiles: BTreeMap<String, GardenTile>,
}

impl Garden {
    /// A garden where every tile is empty.
    pub fn empty(size: u8, point: u32) -> Self {
        let mut tiles = BTreeMap::new();
        for row in 0..size {
            for col in 0..size {
                tiles.insert(format!("{row},{col}"), GardenTile::default());
            }
        }

        Self { size, point, tiles }
    }
}

/// Acknowledgement of a points grant. `new_balance` echoes the granted amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAward {
    pub success: bool,
    pub message: String,
    pub new_balance: Number,
}

impl PointsAward {
    pub fn new(amount: Number) -> Self {
        let amount = integral_form(amount);
        Self {
            success: true,
            message: format!("Added {} points successfully", amount),
            new_balance: amount,
        }
    }
}

// Largest magnitude at which every integer is exactly representable as f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole-valued floats such as `5.0` are stored as integers so they print as `5`.
fn integral_form(n: Number) -> Number {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => {
            Number::from(v as i64)
        }
        _ => n,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionSummary {
    pub success: bool,
    pub message: String,
    pub deleted_count: u64,
}

impl DeletionSummary {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            success: true,
            message: format!("Deleted {} posts successfully", deleted_count),
            deleted_count,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use serde_json::{Map, Value};

/// Name of the field holding a member's score.
pub const POINT_FIELD: &str = "point";
/// Name of the field holding a member's public name.
pub const DISPLAY_NAME_FIELD: &str = "displayName";
/// Name of the field overridden on the league payload with the computed count.
pub const MEMBER_COUNT_FIELD: &str = "memberCount";

/// A league document. Everything but the id is opaque to ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl League {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Builds a league from a raw document body. Non-object bodies carry no fields.
    pub fn from_document(id: impl Into<String>, data: Value) -> Self {
        let fields = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    /// League fields with the stored `memberCount` replaced by `count`.
    pub fn with_member_count(&self, count: u32) -> Map<String, Value> {
        let mut fields = self.fields.clone();
        fields.insert(MEMBER_COUNT_FIELD.to_string(), Value::from(count));
        fields
    }
}

/// A per-user record inside a league, keyed by the user id.
///
/// `point` is `None` only when the field is absent. A present field keeps its raw
/// value whatever its type, `null` included.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: String,
    pub point: Option<Value>,
    pub display_name: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<String>, point: Option<Value>, display_name: Option<String>) -> Self {
        Self {
            id: id.into(),
            point,
            display_name,
        }
    }

    /// Decodes a member document. A `displayName` that is not a string is treated as missing.
    pub fn from_document(id: impl Into<String>, data: &Value) -> Self {
        let point = data.get(POINT_FIELD).cloned();
        let display_name = data
            .get(DISPLAY_NAME_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);

        Self::new(id, point, display_name)
    }

    /// A member counts toward ranking only with a non-blank display name.
    pub fn is_valid(&self) -> bool {
        self.display_name
            .as_deref()
            .is_some_and(|name| !trim_js(name).is_empty())
    }
}

/// Store ordering of `point` values, lowest first.
///
/// Values of different JSON types order by type: null, booleans, numbers,
/// strings, arrays, then objects. Within a type, booleans, numbers and strings
/// compare by value; arrays compare element-wise and objects compare equal.
pub fn compare_points(a: &Value, b: &Value) -> Ordering {
    fn type_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y)
            .map(|(x, y)| compare_points(x, y))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

// Same character set as ECMAScript `String.prototype.trim`: Unicode whitespace plus BOM.
fn trim_js(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Where the caller stands in their league. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    pub league_id: Option<String>,
    pub league: Option<Map<String, Value>>,
    pub rank: Option<u32>,
    pub member_count: u32,
}

impl LeagueStanding {
    pub fn new(league: &League, rank: Option<u32>, member_count: u32) -> Self {
        Self {
            league_id: Some(league.id.clone()),
            league: Some(league.with_member_count(member_count)),
            rank,
            member_count,
        }
    }

    /// The caller is not a member of any league.
    pub fn unmatched() -> Self {
        Self {
            league_id: None,
            league: None,
            rank: None,
            member_count: 0,
        }
    }
}

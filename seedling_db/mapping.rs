use serde_json::Value;

use seedling_types::league::{League, Member};

pub const LEAGUES_COLLECTION: &str = "leagues";
pub const POSTS_COLLECTION: &str = "posts";

/// Collection path of the members of a league.
pub fn members_collection(league_id: &str) -> String {
    format!("{}/{}/members", LEAGUES_COLLECTION, league_id)
}

/// A row of the `documents` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DocumentRow {
    pub doc_id: String,
    pub data: Value,
}

impl From<DocumentRow> for League {
    fn from(row: DocumentRow) -> Self {
        League::from_document(row.doc_id, row.data)
    }
}

impl From<DocumentRow> for Member {
    fn from(row: DocumentRow) -> Self {
        Member::from_document(row.doc_id, &row.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_members_collection_path() {
        assert_eq!(members_collection("gold"), "leagues/gold/members");
    }

    #[test]
    fn test_rows_decode_into_domain() {
        let league: League = DocumentRow {
            doc_id: "gold".to_string(),
            data: json!({ "name": "Gold" }),
        }
        .into();
        assert_eq!(league.id, "gold");
        assert_eq!(league.fields.get("name"), Some(&json!("Gold")));

        let member: Member = DocumentRow {
            doc_id: "u1".to_string(),
            data: json!({ "point": 12, "displayName": "Kim" }),
        }
        .into();
        assert_eq!(member.id, "u1");
        assert_eq!(member.point, Some(json!(12)));
        assert!(member.is_valid());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub id: String,
    pub username: String,
}

/// The player an award points at. Serialized as `{ id, username }` when the
/// player could be looked up, or as the bare id otherwise.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PlayerRef {
    Resolved(PlayerSummary),
    Unresolved(String),
}

impl PlayerRef {
    pub fn id(&self) -> &str {
        match self {
            PlayerRef::Resolved(summary) => &summary.id,
            PlayerRef::Unresolved(id) => id,
        }
    }

    /// Username when known, raw id otherwise.
    pub fn display_name(&self) -> &str {
        match self {
            PlayerRef::Resolved(summary) => &summary.username,
            PlayerRef::Unresolved(id) => id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub id: String,
    pub player_id: PlayerRef,
    pub points_awarded: i64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_player_serializes_as_object() {
        let record = AwardRecord {
            id: "a1".to_string(),
            player_id: PlayerRef::Resolved(PlayerSummary {
                id: "p1".to_string(),
                username: "Rahul".to_string(),
            }),
            points_awarded: 7,
            timestamp: DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z").unwrap().with_timezone(&Utc),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["playerId"]["id"], "p1");
        assert_eq!(json["playerId"]["username"], "Rahul");
        assert_eq!(json["pointsAwarded"], 7);
    }

    #[test]
    fn unresolved_player_serializes_as_raw_id() {
        let player_ref = PlayerRef::Unresolved("gone".to_string());
        assert_eq!(serde_json::to_value(&player_ref).unwrap(), serde_json::json!("gone"));
        assert_eq!(player_ref.display_name(), "gone");
    }

    #[test]
    fn untagged_ref_deserializes_both_shapes() {
        let resolved: PlayerRef = serde_json::from_str(r#"{"id":"p1","username":"Kamal"}"#).unwrap();
        assert_eq!(resolved.display_name(), "Kamal");
        assert_eq!(resolved.id(), "p1");

        let unresolved: PlayerRef = serde_json::from_str(r#""p2""#).unwrap();
        assert_eq!(unresolved, PlayerRef::Unresolved("p2".to_string()));
    }
}

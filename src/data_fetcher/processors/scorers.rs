use super::{list_field, map_rows};
use crate::data_fetcher::models::{ScorerRow, UpstreamScorer};
use crate::error::AppError;
use serde_json::Value;

/// Converts an upstream scorers document into scorer rows, one per entry,
/// in upstream order. A missing `scorers` list yields no rows.
pub fn to_scorers(raw: &Value) -> Result<Vec<ScorerRow>, AppError> {
    let scorers = list_field(raw, "scorers", "response")?;
    map_rows::<UpstreamScorer, ScorerRow>(scorers, "scorers")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scorer(player: &str, team: &str, goals: i32) -> Value {
        json!({
            "player": {"id": 1, "name": player, "nationality": "Somewhere", "position": "Offence"},
            "team": {"id": 2, "name": team, "tla": "XYZ"},
            "playedMatches": 20,
            "goals": goals,
            "assists": null,
            "penalties": 2
        })
    }

    #[test]
    fn test_three_scorers_keep_order() {
        let raw = json!({
            "count": 3,
            "competition": {"id": 2019},
            "scorers": [
                scorer("Mateo Retegui", "Atalanta BC", 25),
                scorer("Moise Kean", "ACF Fiorentina", 19),
                scorer("Ademola Lookman", "Atalanta BC", 15)
            ]
        });

        let rows = to_scorers(&raw).unwrap();

        assert_eq!(
            rows,
            vec![
                ScorerRow {
                    player: "Mateo Retegui".to_string(),
                    team: "Atalanta BC".to_string(),
                    goals: 25,
                },
                ScorerRow {
                    player: "Moise Kean".to_string(),
                    team: "ACF Fiorentina".to_string(),
                    goals: 19,
                },
                ScorerRow {
                    player: "Ademola Lookman".to_string(),
                    team: "Atalanta BC".to_string(),
                    goals: 15,
                },
            ]
        );
    }

    #[test]
    fn test_order_is_not_resorted() {
        let raw = json!({"scorers": [scorer("A", "X", 1), scorer("B", "Y", 9)]});
        let rows = to_scorers(&raw).unwrap();
        assert_eq!(rows[0].player, "A");
        assert_eq!(rows[1].player, "B");
    }

    #[test]
    fn test_missing_scorers_yield_no_rows() {
        assert!(to_scorers(&json!({"count": 0})).unwrap().is_empty());
        assert!(to_scorers(&json!({"scorers": []})).unwrap().is_empty());
    }

    #[test]
    fn test_missing_nested_player_is_malformed() {
        let raw = json!({"scorers": [
            scorer("Harry Kane", "FC Bayern München", 26),
            {"team": {"name": "VfB Stuttgart"}, "goals": 20}
        ]});

        match to_scorers(&raw) {
            Err(AppError::MalformedUpstreamData { message }) => {
                assert!(message.starts_with("scorers[1]"), "{message}");
                assert!(message.contains("player"), "{message}");
            }
            other => panic!("Expected MalformedUpstreamData, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_goals_is_malformed() {
        let mut entry = scorer("Ousmane Dembélé", "Paris Saint-Germain FC", 21);
        entry["goals"] = json!("21");
        let raw = json!({"scorers": [entry]});

        assert!(matches!(
            to_scorers(&raw),
            Err(AppError::MalformedUpstreamData { .. })
        ));
    }
}

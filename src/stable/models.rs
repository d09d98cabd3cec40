use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the horse data structure as exchanged with the stable API.
///
/// Field names on the wire are the Polish contract of the existing service
/// and must not change: `rasa`, `wiek`, `dostepnosc_do_jazdy`.
///
#[derive(Clone, Debug, Deserialize, Serialize, Dummy, PartialEq, Eq)]
pub struct Horse {
    /// Assigned by the server; never sent when creating a new record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "rasa")]
    pub breed: String,
    #[serde(rename = "wiek")]
    pub age: u32,
    #[serde(rename = "dostepnosc_do_jazdy")]
    pub available_for_riding: bool,
}

/// Defines the error body returned by the stable API on failures.
///
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn horse_uses_wire_field_names() {
        let horse = Horse {
            id: Some(3),
            breed: "Konik polski".to_string(),
            age: 7,
            available_for_riding: true,
        };
        let value = serde_json::to_value(&horse).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "rasa": "Konik polski",
                "wiek": 7,
                "dostepnosc_do_jazdy": true,
            })
        );
    }

    #[test]
    fn new_horse_omits_id() {
        let horse = Horse {
            id: None,
            breed: "Hucuł".to_string(),
            age: 0,
            available_for_riding: true,
        };
        let value = serde_json::to_value(&horse).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn horse_deserializes_from_wire_shape() {
        let horse: Horse = serde_json::from_value(json!({
            "id": 12,
            "rasa": "Fiord",
            "wiek": 4,
            "dostepnosc_do_jazdy": false,
        }))
        .unwrap();
        assert_eq!(horse.id, Some(12));
        assert_eq!(horse.breed, "Fiord");
        assert_eq!(horse.age, 4);
        assert!(!horse.available_for_riding);
    }
}

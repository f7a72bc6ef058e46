use serde::{Deserialize, Serialize};

/// A single hotel room as handed to the document renderer.
///
/// `name` and `description` are always present (an empty string is a valid
/// value, not a missing one). `facility_count` and `facility_list` are kept
/// independent and are never reconciled against each other; the export draws
/// the list verbatim. `image` is either a `data:` URI with inline bytes or an
/// HTTP(S) URL. `created`/`updated` carry display-formatted dates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub facility_count: u32,
    #[serde(default)]
    pub facility_list: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

impl RoomRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "name": "Deluxe Suite",
            "description": "A luxurious room",
            "facilityCount": 2,
            "facilityList": ["WiFi", "TV"]
        }"#;
        let record: RoomRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Deluxe Suite");
        assert_eq!(record.facility_count, 2);
        assert_eq!(record.facility_list, vec!["WiFi", "TV"]);
        assert!(record.image.is_none());
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: RoomRecord =
            serde_json::from_str(r#"{"name": "A", "description": ""}"#).unwrap();
        assert_eq!(record.facility_count, 0);
        assert!(record.facility_list.is_empty());
        assert!(record.created.is_none());
    }
}

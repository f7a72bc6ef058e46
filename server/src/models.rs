use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored room. `facilities` is the advertised facility count; the PDF
/// export renders `facility_list` and leaves the count informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub facilities: u32,
    #[serde(default)]
    pub facility_list: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub name: String,
    pub description: String,
    pub facilities: u32,
    #[serde(default)]
    pub facility_list: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub description: Option<String>,
    pub facilities: Option<u32>,
    pub facility_list: Option<Vec<String>>,
    pub image: Option<String>,
}

impl Room {
    pub fn create(req: CreateRoom, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            facilities: req.facilities,
            facility_list: req.facility_list,
            image: req.image,
            created: now,
            updated: None,
        }
    }

    pub fn apply(&mut self, req: UpdateRoom, now: DateTime<Utc>) {
        if let Some(name) = req.name {
            self.name = name;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(facilities) = req.facilities {
            self.facilities = facilities;
        }
        if let Some(facility_list) = req.facility_list {
            self.facility_list = facility_list;
        }
        if let Some(image) = req.image {
            self.image = Some(image);
        }
        self.updated = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case() {
        let req: CreateRoom = serde_json::from_str(
            r#"{
                "name": "No. 3 Luxury Double Room",
                "description": "Double bed, walk-in shower.",
                "facilities": 3,
                "facilityList": ["WiFi", "Nespresso System"]
            }"#,
        )
        .unwrap();
        assert_eq!(req.facility_list.len(), 2);
        assert!(req.image.is_none());
    }

    #[test]
    fn apply_only_touches_provided_fields() {
        let mut room = Room::create(
            CreateRoom {
                name: "Single".to_string(),
                description: "Compact room.".to_string(),
                facilities: 1,
                facility_list: vec!["WiFi".to_string()],
                image: None,
            },
            Utc::now(),
        );

        room.apply(
            UpdateRoom {
                description: Some("Refurbished compact room.".to_string()),
                ..UpdateRoom::default()
            },
            Utc::now(),
        );

        assert_eq!(room.name, "Single");
        assert_eq!(room.description, "Refurbished compact room.");
        assert!(room.updated.is_some());
    }
}

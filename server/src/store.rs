use crate::models::{Room, UpdateRoom};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local room storage.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: RwLock<HashMap<Uuid, Room>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rooms ordered by creation time so listings are stable.
    pub async fn list(&self) -> Vec<Room> {
        let rooms = self.rooms.read().await;
        let mut all: Vec<Room> = rooms.values().cloned().collect();
        all.sort_by_key(|room| room.created);
        all
    }

    pub async fn insert(&self, room: Room) {
        self.rooms.write().await.insert(room.id, room);
    }

    pub async fn get(&self, id: Uuid) -> Option<Room> {
        self.rooms.read().await.get(&id).cloned()
    }

    pub async fn update(&self, id: Uuid, req: UpdateRoom) -> Option<Room> {
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&id)?;
        room.apply(req, Utc::now());
        Some(room.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.rooms.write().await.remove(&id).is_some()
    }
}

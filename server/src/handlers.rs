use crate::error::{ApiError, Result};
use crate::models::{CreateRoom, Room, UpdateRoom};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use hugo::RoomRecord;
use uuid::Uuid;

const DATE_DISPLAY_FORMAT: &str = "%d/%m/%y";

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.store.list().await)
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoom>,
) -> Json<Room> {
    let room = Room::create(req, Utc::now());
    tracing::info!("created room {} ({})", room.id, room.name);
    state.store.insert(room.clone()).await;
    Json(room)
}

pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Room>> {
    let room = state.store.get(id).await.ok_or(ApiError::RoomNotFound)?;
    Ok(Json(room))
}

pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoom>,
) -> Result<Json<Room>> {
    let room = state
        .store
        .update(id, req)
        .await
        .ok_or(ApiError::RoomNotFound)?;
    Ok(Json(room))
}

pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if state.store.remove(id).await {
        tracing::info!("deleted room {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::RoomNotFound)
    }
}

/// Renders the room details PDF and returns it as an attachment.
pub async fn export_room_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let room = state.store.get(id).await.ok_or(ApiError::RoomNotFound)?;
    tracing::info!("exporting PDF for room {} ({})", room.id, room.name);

    let record = room_to_record(&room);
    let exporter = state.exporter.clone();

    // The render is synchronous and may block on a remote image fetch.
    let pdf = tokio::task::spawn_blocking(move || exporter.export(&record))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    tracing::info!("rendered {} bytes for room {}", pdf.len(), id);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"room-{id}-details.pdf\""),
            ),
        ],
        pdf,
    ))
}

fn room_to_record(room: &Room) -> RoomRecord {
    RoomRecord {
        name: room.name.clone(),
        description: room.description.clone(),
        facility_count: room.facilities,
        facility_list: room.facility_list.clone(),
        image: room.image.clone(),
        created: Some(room.created.format(DATE_DISPLAY_FORMAT).to_string()),
        updated: room
            .updated
            .map(|t| t.format(DATE_DISPLAY_FORMAT).to_string()),
    }
}

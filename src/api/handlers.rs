use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Category, FormUpdate, Mood},
    services::{detect_region, fetch_recommendations, FetchOutcome},
    session::{FeedbackEvent, Session, SessionView, FEEDBACK_TTL},
};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct SelectMoodRequest {
    pub mood: String,
    /// Center of the clicked control, in screen coordinates
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize)]
pub struct SetFilterRequest {
    pub category: Category,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Starts a session and kicks off region detection in the background
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    let session = Session::new();
    let id = session.id();
    let view = session.view();
    state.sessions.write().await.insert(id, session);

    let task_state = state.clone();
    tokio::spawn(async move {
        let detected = detect_region(task_state.locator.as_ref()).await;
        let applied = task_state
            .with_session(id, |session| {
                session.apply_detected_region(detected);
                Ok(())
            })
            .await;
        if applied.is_err() {
            tracing::debug!(session_id = %id, "Session ended before region detection finished");
        }
    });

    tracing::info!(session_id = %id, "Session started");
    (StatusCode::CREATED, Json(view))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    let view = state.with_session(id, |session| Ok(session.view())).await?;
    Ok(Json(view))
}

/// Ends a session; nothing about it is kept
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state
        .sessions
        .write()
        .await
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))?;

    tracing::info!(session_id = %id, "Session ended");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<FormUpdate>,
) -> AppResult<Json<SessionView>> {
    let view = state
        .with_session(id, |session| {
            session.update_form(update)?;
            Ok(session.view())
        })
        .await?;
    Ok(Json(view))
}

/// Picks a mood and floats its glyph for a couple of seconds
pub async fn select_mood(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectMoodRequest>,
) -> AppResult<(StatusCode, Json<FeedbackEvent>)> {
    let mood: Mood = request.mood.parse()?;
    let event = state
        .with_session(id, |session| Ok(session.select_mood(mood, request.x, request.y)))
        .await?;

    let event_id = event.id;
    let task_state = state.clone();
    tokio::spawn(async move {
        tokio::time::sleep(FEEDBACK_TTL).await;
        let retracted = task_state
            .with_session(id, |session| Ok(session.retract_feedback(event_id)))
            .await;
        if retracted.is_err() {
            tracing::debug!(session_id = %id, event_id = %event_id, "Session ended before feedback was retracted");
        }
    });

    Ok((StatusCode::CREATED, Json(event)))
}

/// Fetches recommendations for the session's current form
///
/// Validation problems and a fetch already in flight are reported to the caller.
/// Anything that goes wrong after that ends with the fallback list installed.
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    let request = state.with_session(id, |session| session.begin_fetch()).await?;

    tracing::info!(
        session_id = %id,
        mood = %request.mood,
        region = %request.region,
        "Fetching recommendations"
    );

    // Detached: the session leaves the loading state even if the client disconnects.
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let outcome = fetch_recommendations(task_state.recommender.as_ref(), &request).await;
        task_state.finish_fetch(id, outcome).await
    });

    let view = match task.await {
        Ok(result) => result?,
        Err(e) => {
            let error = AppError::Internal(format!("Fetch task failed: {}", e));
            tracing::error!(session_id = %id, error = %error, "Serving fallback list");
            state.finish_fetch(id, FetchOutcome::fallback()).await?
        }
    };

    Ok(Json(view))
}

pub async fn set_filter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetFilterRequest>,
) -> AppResult<Json<SessionView>> {
    let view = state
        .with_session(id, |session| {
            session.set_filter(request.category);
            Ok(session.view())
        })
        .await?;
    Ok(Json(view))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use uuid::Uuid;

use crate::graph::{MutableGraph, VertexId};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

type SharedSession = Arc<RwLock<Session>>;

/// Shared application state.
///
/// Each session sits behind its own lock: path queries share it, graph
/// construction takes it exclusively.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    fn session(&self, session_id: Uuid) -> Result<SharedSession, ApiError> {
        let sessions = self.sessions.read().unwrap();
        sessions.get(&session_id).cloned().ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                "session_not_found",
                format!("Session {} not found", session_id),
            )
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph).get(list_graphs))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/vertices", post(add_vertex))
        .route("/api/graphs/:session_id/edges", post(add_edge))
        .route("/api/graphs/:session_id/path", get(find_path))
        .route("/api/health", get(health_check))
}

/// Create a session with an empty graph
pub async fn create_graph(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    let session = Session::new();
    let info = session.info();

    {
        let mut sessions = state.sessions.write().unwrap();
        if sessions.len() >= state.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "too_many_sessions",
                format!("Session limit of {} reached", state.max_sessions),
            ));
        }
        sessions.insert(session.id, Arc::new(RwLock::new(session)));
    }

    info!("created session {}", info.id);
    Ok((StatusCode::CREATED, Json(info)))
}

/// List all active sessions
pub async fn list_graphs(State(state): State<AppState>) -> Json<Vec<Uuid>> {
    let sessions = state.sessions.read().unwrap();
    Json(sessions.keys().cloned().collect())
}

/// Get session information
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let session = state.session(session_id)?;
    let session = session.read().unwrap();
    Ok(Json(session.info()))
}

/// Drop a session and its graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = state.sessions.write().unwrap().remove(&session_id);
    match removed {
        Some(_) => {
            info!("deleted session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(api_error(
            StatusCode::NOT_FOUND,
            "session_not_found",
            format!("Session {} not found", session_id),
        )),
    }
}

/// Add a vertex to a session's graph
pub async fn add_vertex(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<(StatusCode, Json<VertexCreated>), ApiError> {
    let session = state.session(session_id)?;
    let vertex_id = session.write().unwrap().store.add_vertex();
    Ok((StatusCode::CREATED, Json(VertexCreated { vertex_id })))
}

/// Add a directed edge to a session's graph
pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<EdgeRequest>,
) -> Result<(StatusCode, Json<EdgeCreated>), ApiError> {
    let from = parse_vertex(request.from)?;
    let to = parse_vertex(request.to)?;

    let session = state.session(session_id)?;
    let edge_id = session
        .write()
        .unwrap()
        .store
        .add_edge(from, to, request.cost)
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(EdgeCreated { edge_id })))
}

/// Find the lowest-cost path between two vertices
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let source = parse_vertex(query.source)?;
    let target = parse_vertex(query.target)?;

    let session = state.session(session_id)?;
    let start_time = Instant::now();
    let path = session
        .read()
        .unwrap()
        .store
        .shortest_path(source, target)
        .map_err(store_error)?;
    let execution_time = start_time.elapsed();

    debug!(
        "session {}: path {} -> {} has {} edges, cost {}",
        session_id,
        source,
        target,
        path.len(),
        path.cost
    );

    Ok(Json(PathResponse {
        vertices: path.vertices,
        edges: path.edges,
        cost: path.cost,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn parse_vertex(raw: u64) -> Result<VertexId, ApiError> {
    VertexId::new(raw).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            "invalid_vertex_id",
            "Vertex id 0 is reserved as the invalid id".to_string(),
        )
    })
}

fn store_error(err: Error) -> ApiError {
    let (status, error) = match &err {
        Error::UnknownVertex(_) => (StatusCode::BAD_REQUEST, "unknown_vertex"),
        Error::NoPathFound { .. } => (StatusCode::NOT_FOUND, "no_path_found"),
        Error::CostOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "cost_overflow"),
    };
    api_error(status, error, err.to_string())
}

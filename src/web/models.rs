use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::{EdgeId, Graph, GraphStore, VertexId};

/// Session owning one graph store
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub store: GraphStore,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            store: GraphStore::new(),
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            vertex_count: self.store.vertex_count(),
            edge_count: self.store.edge_count(),
            created_at: self.created_at,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a session's graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Response to adding a vertex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexCreated {
    pub vertex_id: VertexId,
}

/// Parameters for adding an edge. Ids are raw so that 0 gets a readable error.
#[derive(Debug, Deserialize)]
pub struct EdgeRequest {
    pub from: u64,
    pub to: u64,
    pub cost: u64,
}

/// Response to adding an edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCreated {
    pub edge_id: EdgeId,
}

/// Query string of a path request
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: u64,
    pub target: u64,
}

/// Response containing a shortest path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub cost: u64,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

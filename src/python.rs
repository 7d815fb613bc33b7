use crate::graph::{EdgeId, GraphStore as Store, MutableGraph, VertexId};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

fn vertex(raw: u64) -> PyResult<VertexId> {
    VertexId::new(raw).ok_or_else(|| PyKeyError::new_err("vertex id 0 is invalid"))
}

#[pyclass(name = "GraphStore")]
pub struct PyGraphStore {
    store: Store,
}

#[pymethods]
impl PyGraphStore {
    #[new]
    fn new() -> Self {
        PyGraphStore {
            store: Store::new(),
        }
    }

    fn add_vertex(&mut self) -> u64 {
        self.store.add_vertex().get()
    }

    fn add_edge(&mut self, from: u64, to: u64, cost: u64) -> PyResult<u64> {
        self.store
            .add_edge(vertex(from)?, vertex(to)?, cost)
            .map(EdgeId::get)
            .map_err(|e| PyKeyError::new_err(e.to_string()))
    }

    fn shortest_path(&self, source: u64, target: u64) -> PyResult<(Vec<u64>, Vec<u64>)> {
        let (source, target) = match (VertexId::new(source), VertexId::new(target)) {
            (Some(source), Some(target)) => (source, target),
            _ => return Err(PyValueError::new_err("vertex id 0 is invalid")),
        };
        let path = self
            .store
            .shortest_path(source, target)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let vertices = path.vertices.into_iter().map(VertexId::get).collect();
        let edges = path.edges.into_iter().map(EdgeId::get).collect();
        Ok((vertices, edges))
    }
}

#[pymodule]
fn shortest_path_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraphStore>()?;
    Ok(())
}

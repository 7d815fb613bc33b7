use crate::graph::{EdgeId, GraphStore, MutableGraph, VertexId};
use libc::size_t;

/// Opaque store handle. Raw ids crossing this boundary are `u64`, 0 meaning invalid.
#[repr(C)]
pub struct FfiGraphStore {
    store: GraphStore,
}

#[no_mangle]
pub extern "C" fn sp_store_new() -> *mut FfiGraphStore {
    Box::into_raw(Box::new(FfiGraphStore {
        store: GraphStore::new(),
    }))
}

#[no_mangle]
pub extern "C" fn sp_store_free(g: *mut FfiGraphStore) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[no_mangle]
pub extern "C" fn sp_add_vertex(g: *mut FfiGraphStore) -> u64 {
    if g.is_null() {
        return 0;
    }
    unsafe { &mut *g }.store.add_vertex().get()
}

/// Returns the new edge id, or 0 if either vertex is unknown
#[no_mangle]
pub extern "C" fn sp_add_edge(g: *mut FfiGraphStore, from: u64, to: u64, cost: u64) -> u64 {
    if g.is_null() {
        return 0;
    }
    let (from, to) = match (VertexId::new(from), VertexId::new(to)) {
        (Some(from), Some(to)) => (from, to),
        _ => return 0,
    };
    unsafe { &mut *g }
        .store
        .add_edge(from, to, cost)
        .map(EdgeId::get)
        .unwrap_or(0)
}

#[repr(C)]
pub struct FfiPath {
    vertices: *mut u64,
    vertex_count: size_t,
    edges: *mut u64,
    edge_count: size_t,
    cost: u64,
}

fn into_raw_slice(ids: Vec<u64>) -> (*mut u64, size_t) {
    let boxed = ids.into_boxed_slice();
    let len = boxed.len();
    (Box::into_raw(boxed) as *mut u64, len)
}

/// Returns null when no path exists or an id is invalid
#[no_mangle]
pub extern "C" fn sp_shortest_path(g: *const FfiGraphStore, source: u64, target: u64) -> *mut FfiPath {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let (source, target) = match (VertexId::new(source), VertexId::new(target)) {
        (Some(source), Some(target)) => (source, target),
        _ => return std::ptr::null_mut(),
    };
    let store = unsafe { &(*g).store };
    match store.shortest_path(source, target) {
        Ok(path) => {
            let (vertices, vertex_count) =
                into_raw_slice(path.vertices.into_iter().map(VertexId::get).collect());
            let (edges, edge_count) = into_raw_slice(path.edges.into_iter().map(EdgeId::get).collect());
            Box::into_raw(Box::new(FfiPath {
                vertices,
                vertex_count,
                edges,
                edge_count,
                cost: path.cost,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn sp_path_free(path: *mut FfiPath) {
    if !path.is_null() {
        unsafe {
            let path = Box::from_raw(path);
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                path.vertices,
                path.vertex_count,
            )));
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                path.edges,
                path.edge_count,
            )));
        }
    }
}

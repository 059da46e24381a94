mod ordered;
mod route_graph;

pub use route_graph::{resolve_path, RouteGraph};

pub mod frontier_queue;
pub mod visited_vertices;

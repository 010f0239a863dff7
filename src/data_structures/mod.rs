pub mod frontier;
pub mod priority_queue;

pub use frontier::{Frontier, FrontierEntry, LinearFrontier, PriorityFrontier};
pub use priority_queue::MinHeap;

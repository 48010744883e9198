pub mod job;
pub mod recommendation;

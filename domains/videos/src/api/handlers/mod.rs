pub mod dashboard;
pub mod videos;

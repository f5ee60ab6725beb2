pub mod dashboard;
pub mod feedback;

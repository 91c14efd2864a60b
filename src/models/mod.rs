pub mod schedule;
pub mod student;

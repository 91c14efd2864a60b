pub mod generate;
pub mod log;
pub mod reset;
pub mod seed;
pub mod students;

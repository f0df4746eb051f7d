pub mod leave;
pub mod student;

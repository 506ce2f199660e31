pub mod announcement;
pub mod announcement_type;
pub mod block;

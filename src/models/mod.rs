pub mod calendar;
pub mod credits;
pub mod movie;

pub use credits::{CastCredit, CrewCredit};
pub use movie::{normalize_title, MovieRecord};

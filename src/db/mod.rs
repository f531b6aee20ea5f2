pub mod media;
pub mod users;

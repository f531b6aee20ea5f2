pub mod common;
pub mod media;
pub mod upload;
pub mod user;

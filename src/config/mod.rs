pub mod chat;
pub mod jwt;
pub mod settings;
pub mod uploads;

pub mod chat_service;
pub mod upload_transport;

pub use chat_service::ChatService;
pub use upload_transport::UploadTransportService;

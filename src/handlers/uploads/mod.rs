pub mod attachment_upload;
pub mod avatar_upload;
pub mod router_config;

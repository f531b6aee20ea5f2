pub mod file_url;

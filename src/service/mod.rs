pub mod chat_service;
pub mod resume_service;

pub mod notification_service;
pub mod prompt_service;
pub mod resume_service;
pub mod scheduling_service;

pub mod application;
pub mod candidate;
pub mod interview;
pub mod job;
pub mod outbox;
pub mod prompt;
pub mod question;

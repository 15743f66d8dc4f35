pub mod payload;
pub mod schedule_dto;

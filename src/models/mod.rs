//! Data models for catalog entities

pub mod book;
pub mod borrowing_record;
pub mod patron;

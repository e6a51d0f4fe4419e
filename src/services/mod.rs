// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod course_service;

pub use course_service::{CourseRequest, CourseService};

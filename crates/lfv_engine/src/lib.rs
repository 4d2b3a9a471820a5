//! LearnFromVideo engine: backend API client and effect execution.
mod client;
mod engine;
mod types;

pub use client::{ApiSettings, CourseApi, ReqwestCourseApi};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineEvent, FailureKind};

//! LearnFromVideo core: pure page state machine and view-model helpers.
mod course;
mod display;
mod effect;
mod msg;
mod recent;
mod state;
mod update;
mod validate;
mod view_model;

pub use course::{Course, CourseId, CourseSection, CourseVisualization};
pub use display::{display_url, PRODUCT_DOMAIN, VIDEO_HOST_DOMAIN};
pub use effect::Effect;
pub use msg::Msg;
pub use recent::{RecentCourses, RECENT_COURSES_CAPACITY};
pub use state::{AppState, Phase, RequestId};
pub use update::{update, EXAMPLE_VIDEO_URL, GENERIC_CONVERSION_ERROR};
pub use validate::{validate, InvalidReason, ValidationResult, ACCEPTED_URL_MARKERS};
pub use view_model::{
    AppViewModel, CourseView, RecentCourseCard, SectionView, VisualizationImage,
    VisualizationView, CONVERTING_LABEL, CREATE_COURSE_LABEL, VISUALIZATION_PLACEHOLDER,
};

use lfv_logging::{lfv_debug, lfv_info, lfv_warn};

use crate::{validate, AppState, Effect, Msg, ValidationResult};

pub const EXAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const GENERIC_CONVERSION_ERROR: &str = "An error occurred while processing the video";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.mount() {
                vec![Effect::LoadRecentCourses]
            } else {
                Vec::new()
            }
        }
        Msg::Unmounted => {
            state.unmount();
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ExampleRequested => {
            state.set_input(EXAMPLE_VIDEO_URL.to_string());
            Vec::new()
        }
        Msg::SubmitClicked => match validate(state.input_url()) {
            ValidationResult::Invalid(reason) => {
                lfv_debug!("Rejected input ({})", reason.as_str());
                state.reject_input(reason.user_message());
                Vec::new()
            }
            ValidationResult::Valid => {
                let video_url = state.input_url().to_string();
                let request_id = state.begin_submission();
                vec![Effect::ConvertVideo {
                    request_id,
                    video_url,
                }]
            }
        },
        Msg::ConversionSucceeded { request_id, course } => {
            if state.settle_request(request_id) {
                lfv_info!("Conversion {} produced course {}", request_id, course.id);
                state.apply_course(course);
            } else {
                lfv_info!(
                    "Dropping stale conversion result {} (course {})",
                    request_id,
                    course.id
                );
            }
            Vec::new()
        }
        Msg::ConversionFailed { request_id, detail } => {
            if state.settle_request(request_id) {
                let message = detail
                    .filter(|detail| !detail.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_CONVERSION_ERROR.to_string());
                lfv_warn!("Conversion {} failed: {}", request_id, message);
                state.apply_failure(message);
            } else {
                lfv_info!("Dropping stale conversion failure {}", request_id);
            }
            Vec::new()
        }
        Msg::RecentCoursesLoaded(courses) => {
            if state.is_mounted() {
                lfv_debug!("Loaded {} recent courses", courses.len());
                state.replace_recent_courses(courses);
            }
            Vec::new()
        }
        Msg::RecentCoursesFailed { message } => {
            lfv_warn!("Error fetching recent courses: {}", message);
            Vec::new()
        }
        Msg::RecentCourseSelected { course_id } => {
            if !state.select_recent(&course_id) {
                lfv_debug!("Ignoring selection of unknown course {}", course_id);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

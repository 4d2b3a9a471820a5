use std::sync::Once;

use chrono::{TimeZone, Utc};
use lfv_core::{
    update, AppState, Course, CourseSection, Effect, Msg, Phase, GENERIC_CONVERSION_ERROR,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(lfv_logging::initialize_for_tests);
}

fn course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        video_id: Some("dQw4w9WgXcQ".to_string()),
        title: format!("Course {id}"),
        description: "A course".to_string(),
        thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap(),
        sections: vec![CourseSection {
            id: "s1".to_string(),
            title: "Introduction".to_string(),
            content: "Welcome".to_string(),
            timestamp: None,
            order: Some(1),
        }],
        visualizations: Vec::new(),
    }
}

fn mounted() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Mounted);
    state
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ConvertVideo { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("convert effect")
}

#[test]
fn invalid_text_surfaces_message_without_request() {
    init_logging();
    let (mut state, effects) = submit(mounted(), "not a url");

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        state.error_message(),
        Some("Please enter a valid YouTube or LearnFromVideo URL")
    );
    assert!(state.consume_dirty());
}

#[test]
fn empty_input_surfaces_message() {
    init_logging();
    let (state, effects) = submit(mounted(), "  ");

    assert!(effects.is_empty());
    assert_eq!(state.error_message(), Some("Please enter a YouTube URL"));
}

#[test]
fn valid_submission_emits_convert_effect() {
    init_logging();
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    let (state, _) = submit(mounted(), "bogus");
    assert!(state.error_message().is_some());

    let (state, effects) = submit(state, url);

    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.error_message(), None);
    assert_eq!(
        effects,
        vec![Effect::ConvertVideo {
            request_id: 1,
            video_url: url.to_string(),
        }]
    );
    assert_eq!(state.awaited_request(), Some(1));
}

#[test]
fn success_sets_course_and_recent() {
    init_logging();
    let (state, effects) = submit(mounted(), "https://youtu.be/abc");
    let (state, _) = update(
        state,
        Msg::ConversionSucceeded {
            request_id: request_id(&effects),
            course: course("abc"),
        },
    );

    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.current_course().map(|c| c.id.as_str()), Some("abc"));
    assert_eq!(
        state.recent_courses().as_slice()[0].id,
        "abc".to_string()
    );
    assert_eq!(state.awaited_request(), None);
}

#[test]
fn failure_uses_server_detail() {
    init_logging();
    let (state, effects) = submit(mounted(), "https://youtu.be/abc");
    let (state, _) = update(
        state,
        Msg::ConversionFailed {
            request_id: request_id(&effects),
            detail: Some("unsupported video".to_string()),
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), Some("unsupported video"));
}

#[test]
fn failure_without_detail_uses_generic_message() {
    init_logging();
    let (state, effects) = submit(mounted(), "https://youtu.be/abc");
    let (state, _) = update(
        state,
        Msg::ConversionFailed {
            request_id: request_id(&effects),
            detail: None,
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), Some(GENERIC_CONVERSION_ERROR));
}

#[test]
fn resubmit_after_failure_clears_error_and_keeps_course() {
    init_logging();
    let (state, effects) = submit(mounted(), "https://youtu.be/one");
    let (state, _) = update(
        state,
        Msg::ConversionSucceeded {
            request_id: request_id(&effects),
            course: course("one"),
        },
    );
    let (state, effects) = submit(state, "https://youtu.be/two");
    let (state, _) = update(
        state,
        Msg::ConversionFailed {
            request_id: request_id(&effects),
            detail: Some("boom".to_string()),
        },
    );
    assert_eq!(state.phase(), Phase::Failed);

    let (state, effects) = submit(state, "https://youtu.be/three");
    assert_eq!(request_id(&effects), 3);
    assert_eq!(state.phase(), Phase::Submitting);
    assert_eq!(state.error_message(), None);
    assert_eq!(state.current_course().map(|c| c.id.as_str()), Some("one"));
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let (state, first) = submit(mounted(), "https://youtu.be/first");
    let (state, second) = submit(state, "https://youtu.be/second");
    assert_ne!(request_id(&first), request_id(&second));

    // The newer request resolves first.
    let (state, _) = update(
        state,
        Msg::ConversionSucceeded {
            request_id: request_id(&second),
            course: course("second"),
        },
    );
    // The older one arrives late and must not overwrite it.
    let (state, _) = update(
        state,
        Msg::ConversionFailed {
            request_id: request_id(&first),
            detail: Some("late failure".to_string()),
        },
    );

    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.error_message(), None);
    assert_eq!(
        state.current_course().map(|c| c.id.as_str()),
        Some("second")
    );
    assert_eq!(state.recent_courses().len(), 1);
}

#[test]
fn responses_after_unmount_are_ignored() {
    init_logging();
    let (state, effects) = submit(mounted(), "https://youtu.be/abc");
    let (state, _) = update(state, Msg::Unmounted);
    let (state, _) = update(
        state,
        Msg::ConversionSucceeded {
            request_id: request_id(&effects),
            course: course("abc"),
        },
    );

    assert!(state.current_course().is_none());
    assert!(state.recent_courses().is_empty());
}

#[test]
fn example_request_fills_input_without_submitting() {
    init_logging();
    let (state, effects) = update(mounted(), Msg::ExampleRequested);

    assert!(effects.is_empty());
    assert_eq!(
        state.input_url(),
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
    assert_eq!(state.phase(), Phase::Idle);
}

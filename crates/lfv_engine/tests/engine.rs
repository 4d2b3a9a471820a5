use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use lfv_core::Course;
use lfv_engine::{ApiError, CourseApi, EngineEvent, EngineHandle};

fn course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        video_id: None,
        title: id.to_string(),
        description: String::new(),
        thumbnail_url: String::new(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        sections: Vec::new(),
        visualizations: Vec::new(),
    }
}

/// Answers conversions after a per-URL delay so completions can be reordered.
#[derive(Default)]
struct SlowApi {
    conversions: AtomicUsize,
}

#[async_trait::async_trait]
impl CourseApi for SlowApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Ok(vec![course("existing")])
    }

    async fn convert_video(&self, video_url: &str) -> Result<Course, ApiError> {
        self.conversions.fetch_add(1, Ordering::SeqCst);
        let delay = if video_url.contains("slow") { 200 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(course(video_url))
    }
}

fn drain(engine: &EngineHandle, expected: usize) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while events.len() < expected {
        match engine.recv_timeout(Duration::from_secs(5)) {
            Some(event) => events.push(event),
            None => break,
        }
    }
    events
}

#[test]
fn load_recent_courses_reports_list() {
    lfv_logging::initialize_for_tests();
    let engine = EngineHandle::with_api(Arc::new(SlowApi::default())).expect("engine");

    engine.load_recent_courses();

    let events = drain(&engine, 1);
    assert_eq!(
        events,
        vec![EngineEvent::RecentCoursesLoaded(Ok(vec![course("existing")]))]
    );
}

#[test]
fn conversions_run_independently_and_complete_out_of_order() {
    lfv_logging::initialize_for_tests();
    let api = Arc::new(SlowApi::default());
    let engine = EngineHandle::with_api(api.clone()).expect("engine");

    engine.convert(1, "https://youtu.be/slow");
    engine.convert(2, "https://youtu.be/fast");

    let order: Vec<_> = drain(&engine, 2)
        .into_iter()
        .map(|event| match event {
            EngineEvent::ConversionCompleted { request_id, result } => {
                assert!(result.is_ok());
                request_id
            }
            other => panic!("unexpected event {other:?}"),
        })
        .collect();

    assert_eq!(order, vec![2, 1]);
    assert_eq!(api.conversions.load(Ordering::SeqCst), 2);
}

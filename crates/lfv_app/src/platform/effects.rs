use std::time::Duration;

use lfv_core::{Effect, Msg};
use lfv_engine::{EngineEvent, EngineHandle};
use lfv_logging::{lfv_info, lfv_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadRecentCourses => {
                    lfv_info!("LoadRecentCourses");
                    self.engine.load_recent_courses();
                }
                Effect::ConvertVideo {
                    request_id,
                    video_url,
                } => {
                    lfv_info!("ConvertVideo request_id={} url={}", request_id, video_url);
                    self.engine.convert(request_id, video_url);
                }
            }
        }
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(to_msg)
    }

    pub fn next_within(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(to_msg)
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecentCoursesLoaded(Ok(courses)) => Msg::RecentCoursesLoaded(courses),
        EngineEvent::RecentCoursesLoaded(Err(err)) => Msg::RecentCoursesFailed {
            message: err.to_string(),
        },
        EngineEvent::ConversionCompleted {
            request_id,
            result: Ok(course),
        } => Msg::ConversionSucceeded { request_id, course },
        EngineEvent::ConversionCompleted {
            request_id,
            result: Err(err),
        } => {
            lfv_warn!("Request {} failed: {}", request_id, err);
            Msg::ConversionFailed {
                request_id,
                detail: err.detail,
            }
        }
    }
}

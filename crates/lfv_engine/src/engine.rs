use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use lfv_core::RequestId;
use lfv_logging::lfv_debug;

use crate::client::{ApiSettings, CourseApi, ReqwestCourseApi};
use crate::EngineEvent;

enum EngineCommand {
    LoadRecentCourses,
    Convert {
        request_id: RequestId,
        video_url: String,
    },
}

/// Runs backend requests on a background runtime.
///
/// Every command becomes its own task; nothing is cancelled or coalesced, so
/// completions may arrive in any order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> io::Result<Self> {
        let api = ReqwestCourseApi::new(settings)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn CourseApi>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("lfv-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(api.as_ref(), command, event_tx).await;
                    });
                }
                lfv_debug!("Engine command channel closed; abandoning in-flight requests");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load_recent_courses(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadRecentCourses);
    }

    pub fn convert(&self, request_id: RequestId, video_url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Convert {
            request_id,
            video_url: video_url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn CourseApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::LoadRecentCourses => {
            EngineEvent::RecentCoursesLoaded(api.list_courses().await)
        }
        EngineCommand::Convert {
            request_id,
            video_url,
        } => EngineEvent::ConversionCompleted {
            request_id,
            result: api.convert_video(&video_url).await,
        },
    };
    let _ = event_tx.send(event);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page mounted; triggers the recent-courses load.
    Mounted,
    /// Page unmounted; responses arriving afterwards are dropped.
    Unmounted,
    /// User edited the URL input box.
    InputChanged(String),
    /// User asked for the example video URL.
    ExampleRequested,
    /// User submitted the current URL input for conversion.
    SubmitClicked,
    /// Startup load of existing courses finished.
    RecentCoursesLoaded(Vec<crate::Course>),
    /// Startup load of existing courses failed.
    RecentCoursesFailed { message: String },
    /// Backend converted the video.
    ConversionSucceeded {
        request_id: crate::RequestId,
        course: crate::Course,
    },
    /// Conversion failed; `detail` is the server-supplied reason, if any.
    ConversionFailed {
        request_id: crate::RequestId,
        detail: Option<String>,
    },
    /// User picked a course from the recent list.
    RecentCourseSelected { course_id: crate::CourseId },
    /// Fallback for placeholder wiring.
    NoOp,
}

use crate::display::display_url;
use crate::recent::RecentCourses;
use crate::view_model::{
    AppViewModel, CourseView, RecentCourseCard, SectionView, VisualizationImage,
    VisualizationView, CONVERTING_LABEL, CREATE_COURSE_LABEL,
};
use crate::Course;

/// Identifies one conversion request; issued in increasing order.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Workflow state for the single course page.
///
/// Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input_url: String,
    phase: Phase,
    error_message: Option<String>,
    current_course: Option<Course>,
    recent_courses: RecentCourses,
    mounted: bool,
    last_request_id: RequestId,
    awaited_request: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn current_course(&self) -> Option<&Course> {
        self.current_course.as_ref()
    }

    pub fn recent_courses(&self) -> &RecentCourses {
        &self.recent_courses
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The request whose response will be applied, if one is outstanding.
    pub fn awaited_request(&self) -> Option<RequestId> {
        self.awaited_request
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = self.phase == Phase::Submitting;
        let course = self
            .current_course
            .as_ref()
            .map(|course| course_view(course, &self.input_url));
        let recent_courses = self
            .recent_courses
            .iter()
            .map(|course| RecentCourseCard {
                id: course.id.clone(),
                title: course.title.clone(),
                description: course.description.clone(),
                thumbnail_url: course.thumbnail_url.clone(),
                created_on: course.created_at.date_naive(),
            })
            .collect();

        AppViewModel {
            phase: self.phase,
            input_url: self.input_url.clone(),
            error_message: self.error_message.clone(),
            submit_label: if submitting {
                CONVERTING_LABEL
            } else {
                CREATE_COURSE_LABEL
            },
            submit_enabled: !submitting,
            show_recent_courses: course.is_none() && !self.recent_courses.is_empty(),
            course,
            recent_courses,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.awaited_request = None;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input_url != text {
            self.input_url = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn reject_input(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.mark_dirty();
    }

    /// Moves to `Submitting` and returns the id of the new request.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.awaited_request = Some(self.last_request_id);
        self.error_message = None;
        self.phase = Phase::Submitting;
        self.mark_dirty();
        self.last_request_id
    }

    /// Claims the outstanding request if `request_id` is the one being
    /// awaited. Responses to superseded requests return `false`.
    pub(crate) fn settle_request(&mut self, request_id: RequestId) -> bool {
        if self.mounted && self.awaited_request == Some(request_id) {
            self.awaited_request = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn apply_course(&mut self, course: Course) {
        let recent = std::mem::take(&mut self.recent_courses);
        self.recent_courses = recent.merge(course.clone());
        self.current_course = Some(course);
        self.error_message = None;
        self.phase = Phase::Success;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error_message = Some(message);
        self.phase = Phase::Failed;
        self.mark_dirty();
    }

    pub(crate) fn replace_recent_courses(&mut self, courses: Vec<Course>) {
        self.recent_courses = RecentCourses::replace_all(courses);
        self.mark_dirty();
    }

    /// Shows a course from the recent list. Returns `false` for unknown ids.
    pub(crate) fn select_recent(&mut self, course_id: &str) -> bool {
        let Some(course) = self.recent_courses.get(course_id).cloned() else {
            return false;
        };
        self.current_course = Some(course);
        self.error_message = None;
        self.phase = Phase::Success;
        self.mark_dirty();
        true
    }
}

fn course_view(course: &Course, input_url: &str) -> CourseView {
    CourseView {
        id: course.id.clone(),
        title: course.title.clone(),
        description: course.description.clone(),
        thumbnail_url: course.thumbnail_url.clone(),
        course_url: display_url(input_url),
        sections: course
            .sections
            .iter()
            .map(|section| SectionView {
                title: section.title.clone(),
                content: section.content.clone(),
            })
            .collect(),
        visualizations: course
            .visualizations
            .iter()
            .map(|vis| VisualizationView {
                title: vis.title.clone(),
                description: vis.description.clone(),
                image: match &vis.image_url {
                    Some(url) => VisualizationImage::Ready(url.clone()),
                    None => VisualizationImage::Placeholder,
                },
            })
            .collect(),
    }
}

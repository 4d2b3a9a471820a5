use chrono::NaiveDate;

use crate::{CourseId, Phase};

pub const CREATE_COURSE_LABEL: &str = "Create Course";
pub const CONVERTING_LABEL: &str = "Converting...";
pub const VISUALIZATION_PLACEHOLDER: &str = "Visualization will appear here";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub input_url: String,
    pub error_message: Option<String>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub course: Option<CourseView>,
    /// Recent courses are only listed while no course is open.
    pub show_recent_courses: bool,
    pub recent_courses: Vec<RecentCourseCard>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub course_url: String,
    pub sections: Vec<SectionView>,
    pub visualizations: Vec<VisualizationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationView {
    pub title: String,
    pub description: String,
    pub image: VisualizationImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizationImage {
    Ready(String),
    Placeholder,
}

impl VisualizationImage {
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            VisualizationImage::Ready(_) => None,
            VisualizationImage::Placeholder => Some(VISUALIZATION_PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCourseCard {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub created_on: NaiveDate,
}

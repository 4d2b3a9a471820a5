#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadRecentCourses,
    ConvertVideo {
        request_id: crate::RequestId,
        video_url: String,
    },
}

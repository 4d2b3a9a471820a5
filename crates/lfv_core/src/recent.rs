use crate::Course;

pub const RECENT_COURSES_CAPACITY: usize = 5;

/// Most-recent-first list of courses the user has seen, unique by id.
///
/// [`RecentCourses::merge`] keeps the list within [`RECENT_COURSES_CAPACITY`];
/// [`RecentCourses::replace_all`] takes the startup list as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentCourses {
    courses: Vec<Course>,
}

impl RecentCourses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.get(course_id).is_some()
    }

    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    /// Adds `course` at the front unless a course with the same id is already
    /// present, in which case the list is returned untouched (no reordering).
    pub fn merge(self, course: Course) -> Self {
        if self.contains(&course.id) {
            return self;
        }
        let mut courses = Vec::with_capacity(RECENT_COURSES_CAPACITY);
        courses.push(course);
        courses.extend(
            self.courses
                .into_iter()
                .take(RECENT_COURSES_CAPACITY - 1),
        );
        Self { courses }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn course(id: &str) -> Course {
        Course {
            id: id.to_string(),
            video_id: None,
            title: format!("Course {id}"),
            description: String::new(),
            thumbnail_url: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            sections: Vec::new(),
            visualizations: Vec::new(),
        }
    }

    fn ids(recent: &RecentCourses) -> Vec<&str> {
        recent.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn merge_prepends_and_caps_at_capacity() {
        let recent = ["c1", "c2", "c3", "c4", "c5", "c6"]
            .into_iter()
            .fold(RecentCourses::new(), |recent, id| recent.merge(course(id)));

        assert_eq!(ids(&recent), vec!["c6", "c5", "c4", "c3", "c2"]);
    }

    #[test]
    fn merge_of_known_id_keeps_order() {
        let recent = RecentCourses::new()
            .merge(course("a"))
            .merge(course("b"))
            .merge(course("a"));

        assert_eq!(ids(&recent), vec!["b", "a"]);
    }

    #[test]
    fn replace_all_is_not_capped() {
        let all: Vec<_> = (0..8).map(|i| course(&i.to_string())).collect();
        let recent = RecentCourses::replace_all(all);
        assert_eq!(recent.len(), 8);

        // The next merge trims back down.
        let recent = recent.merge(course("new"));
        assert_eq!(recent.len(), RECENT_COURSES_CAPACITY);
        assert_eq!(ids(&recent)[0], "new");
    }
}

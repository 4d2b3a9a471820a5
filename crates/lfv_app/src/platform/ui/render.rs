use lfv_core::{AppViewModel, CourseView, Phase, RecentCourseCard, VisualizationImage};

use super::constants::{APP_TITLE, DOMAIN_TIP, HERO_TITLE, INPUT_HINT};

/// Renders the whole page as text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![
        format!("=== {APP_TITLE} ==="),
        HERO_TITLE.to_string(),
        INPUT_HINT.to_string(),
        format!("URL: {}", view.input_url),
        button_line(view),
    ];
    if let Some(error) = &view.error_message {
        lines.push(format!("! {error}"));
    }
    lines.push(DOMAIN_TIP.to_string());

    if let Some(course) = &view.course {
        lines.push(String::new());
        lines.extend(render_course(course));
    }

    if view.show_recent_courses {
        lines.push(String::new());
        lines.extend(render_recent(&view.recent_courses));
    }

    lines
}

fn button_line(view: &AppViewModel) -> String {
    if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("[{}] (please wait)", view.submit_label)
    }
}

fn render_course(course: &CourseView) -> Vec<String> {
    let mut lines = vec![
        format!("## {}", course.title),
        format!("Course URL: {}", course.course_url),
        format!("Thumbnail: {}", course.thumbnail_url),
        "Course Overview".to_string(),
        format!("  {}", course.description),
        "Course Content".to_string(),
    ];
    for (index, section) in course.sections.iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, section.title));
        lines.push(format!("     {}", section.content));
    }

    if !course.visualizations.is_empty() {
        lines.push("Visual Learning Aids".to_string());
        for vis in &course.visualizations {
            let image = match &vis.image {
                VisualizationImage::Ready(url) => url.clone(),
                VisualizationImage::Placeholder => {
                    format!("[{}]", vis.image.placeholder_text().unwrap_or_default())
                }
            };
            lines.push(format!("  - {}: {}", vis.title, image));
            lines.push(format!("    {}", vis.description));
        }
    }
    lines
}

fn render_recent(cards: &[RecentCourseCard]) -> Vec<String> {
    let mut lines = vec!["Recent Courses".to_string()];
    for (index, card) in cards.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({})",
            index + 1,
            card.title,
            card.created_on.format("%Y-%m-%d")
        ));
        if !card.description.is_empty() {
            lines.push(format!("     {}", card.description));
        }
    }
    lines
}

/// One-line status shown after each command.
pub fn status_line(view: &AppViewModel) -> Option<&'static str> {
    match view.phase {
        Phase::Submitting => Some("Converting video..."),
        Phase::Idle | Phase::Success | Phase::Failed => None,
    }
}

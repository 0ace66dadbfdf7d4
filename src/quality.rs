//! Advisory completeness check run before either prompt mode.
//!
//! Nothing here blocks a later call; the report is for the person filling in
//! the form.

use crate::models::PresentationRequest;

const HEADER: &str = "Prompt quality check:";
const LOOKS_GOOD: &str = "- Looks good. You can generate now.";

pub const MIN_SLIDE_COUNT: u32 = 3;
pub const MIN_DURATION_MIN: u32 = 5;

/// One weak or missing field, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    MissingTopic,
    MissingAudience,
    MissingGoal,
    FewSlides,
    ShortDuration,
}

impl Finding {
    pub fn message(self) -> &'static str {
        match self {
            Finding::MissingTopic => "Topic is missing.",
            Finding::MissingAudience => "Audience is missing (e.g., students, HR, engineers).",
            Finding::MissingGoal => "Goal is missing (what should the audience do/learn?).",
            Finding::FewSlides => "Slide count is very low; consider 5–12 for most talks.",
            Finding::ShortDuration => "Duration is very short; reduce scope or slides.",
        }
    }
}

pub fn findings(request: &PresentationRequest) -> Vec<Finding> {
    let checks = [
        (request.topic.trim().is_empty(), Finding::MissingTopic),
        (request.audience.trim().is_empty(), Finding::MissingAudience),
        (request.goal.trim().is_empty(), Finding::MissingGoal),
        (request.slide_count < MIN_SLIDE_COUNT, Finding::FewSlides),
        (request.duration_min < MIN_DURATION_MIN, Finding::ShortDuration),
    ];

    checks
        .into_iter()
        .filter_map(|(flagged, finding)| flagged.then_some(finding))
        .collect()
}

/// Multi-line report: a header, then one bullet per finding or a single
/// all-clear bullet.
pub fn check(request: &PresentationRequest) -> String {
    let found = findings(request);

    let mut lines = vec![HEADER.to_string()];
    if found.is_empty() {
        lines.push(LOOKS_GOOD.to_string());
    } else {
        lines.extend(found.iter().map(|f| format!("- {}", f.message())));
    }
    lines.join("\n")
}

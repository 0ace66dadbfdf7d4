use crate::models::PresentationRequest;

pub const SLIDES_SYSTEM: &str = include_str!("../data/prompts/slides_system.txt");
pub const REQUIREMENTS: &str = include_str!("../data/prompts/requirements.txt");
pub const GUIDED: &str = include_str!("../data/prompts/guided.txt");
pub const GENERATE: &str = include_str!("../data/prompts/generate.txt");
pub const REFINE_HINT: &str = include_str!("../data/prompts/refine_hint.txt");

/// Placeholder rendered for any empty optional field.
const NONE: &str = "None";

/// Which prompt template to fill from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// A prompt the user copies into a model themselves.
    Guided,
    /// The user message sent to the chat service.
    Generate,
}

/// Replace `{{key}}` placeholders in a template string.
///
/// Substituted values are not scanned again, and placeholders without a
/// matching key are kept as written.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        NONE
    } else {
        value
    }
}

/// The labeled parameter list shared by both templates.
pub fn requirements_block(request: &PresentationRequest) -> String {
    let duration = request.duration_min.to_string();
    let slide_count = request.slide_count.to_string();
    let speaker_notes = if request.speaker_notes { "Yes" } else { "No" };

    render(
        REQUIREMENTS,
        &[
            ("topic", &request.topic),
            ("audience", &request.audience),
            ("goal", &request.goal),
            ("tone", request.tone.label()),
            ("duration", &duration),
            ("slide_count", &slide_count),
            ("level", request.level.label()),
            ("language", request.language.label()),
            ("must_include", or_none(&request.must_include)),
            ("must_avoid", or_none(&request.must_avoid)),
            ("speaker_notes", speaker_notes),
            ("extra_notes", or_none(&request.extra_notes)),
        ],
    )
    .trim_end()
    .to_string()
}

pub fn render_prompt(request: &PresentationRequest, mode: RenderMode) -> String {
    let requirements = requirements_block(request);

    let rendered = match mode {
        RenderMode::Guided => render(
            GUIDED,
            &[
                ("requirements", &requirements),
                ("user_content", or_none(&request.user_content)),
            ],
        ),
        RenderMode::Generate => {
            let draft = request.user_content.trim();
            let content_hint = if draft.is_empty() {
                String::new()
            } else {
                format!("\n{}\n", render(REFINE_HINT, &[("content", draft)]).trim_end())
            };

            render(
                GENERATE,
                &[
                    ("requirements", &requirements),
                    ("content_hint", &content_hint),
                ],
            )
        }
    };

    rendered.trim().to_string()
}

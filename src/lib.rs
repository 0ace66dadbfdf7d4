//! Slide content builder - turns presentation parameters into model prompts
//!
//! Collects what a talk needs (topic, audience, tone, length, constraints),
//! checks it for gaps, and either renders a prompt for manual use or asks a
//! chat model for slide-by-slide content.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod prompts;
pub mod quality;

pub use app::SlideBuilder;
pub use error::{Error, ErrorCategory, Result};
pub use models::{Config, Language, Level, PresentationRequest, Tone};
pub use prompts::RenderMode;

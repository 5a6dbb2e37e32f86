// Live-preview glue: author content + color theme -> everything a template
// needs from the core for one render pass.

pub mod composer;
pub mod content;
pub mod handlers;

pub use composer::{compose_preview, PreviewPayload, PreviewRequest};

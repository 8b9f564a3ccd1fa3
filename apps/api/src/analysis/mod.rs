// Job-posting risk analysis.
// Deterministic rule scoring first; the hosted model may only adjust the
// result through the augment module, never replace it.

pub mod analyzer;
pub mod augment;
pub mod bulk;
pub mod guidance;
pub mod handlers;
pub mod prompts;
pub mod rules;
pub mod scorer;

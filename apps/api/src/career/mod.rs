// Career guidance: reality check, then an AI roadmap, then the static catalog.

pub mod advisor;
pub mod catalog;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod reality;

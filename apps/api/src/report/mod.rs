// Multi-entity report combining every engine.

pub mod aggregate;
pub mod handlers;

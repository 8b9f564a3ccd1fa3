// Company verification: hosted-model lookup, then the curated ledger, then a
// reproducible fallback keyed by the company name.

pub mod handlers;
pub mod ledger;
pub mod profile;
pub mod prompts;
pub mod resolver;
pub mod seeded;

// Resume optimization core: keyword extraction, match scoring, heuristic rewriting
// and suggestions. Everything here is pure; handlers.rs is the only async entry.

pub mod defaults;
pub mod engine;
pub mod handlers;
pub mod profile;
pub mod rewriter;
pub mod scorer;
pub mod suggestions;
pub mod vocabulary;

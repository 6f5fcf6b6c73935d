// Stored resumes: file intake, per-resume optimization and plain-text export.

pub mod extract;
pub mod handlers;

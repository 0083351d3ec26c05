// Resume API: upload + text extraction, oracle feedback, skill extraction, job matching.
// All oracle calls go through `TextGenerator`; nothing here talks to Gemini directly.

pub mod analysis;
pub mod extraction;
pub mod handlers;
pub mod store;

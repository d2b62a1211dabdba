//! Output rendering for word-group analyses.

mod envelope;
mod human;
mod jsonl;

pub use envelope::{Envelope, SUCCESS_MESSAGE, render_json};
pub use human::render_human;
pub use jsonl::JsonlWriter;

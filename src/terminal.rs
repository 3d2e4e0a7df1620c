//! Terminal front end: draws the view state and runs topic submissions.

mod render;
mod session;

pub use render::{render, render_busy, render_voices};
pub use session::Session;

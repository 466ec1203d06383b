//! Editing session module
//!
//! An [`EditSession`] owns at most one open [`Document`] and routes load, edit, save and
//! export requests to it. Opening a file replaces the previous document wholesale.

mod document;
mod edit_session;


pub use document::{Document, ImageDocument, RawDocument};
pub use edit_session::EditSession;

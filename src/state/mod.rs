//! In-process UI and conversation state, mutated one logical event at a time.

pub mod image;
pub mod notepad;
pub mod session;

pub use image::{ImageSnapshot, ImageState};
pub use notepad::Notepad;
pub use session::{Session, SessionStore, ThreadSlot};

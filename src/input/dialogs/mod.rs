//! Dialog mode handlers

mod confirm;
mod drives;
mod prompt;

pub use confirm::handle_confirm_delete_mode;
pub use drives::handle_drive_selector_mode;
pub use prompt::handle_prompt_mode;

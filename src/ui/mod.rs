//! UI components

pub mod dialog;
mod dialog_helpers;
pub mod help;
pub mod panel;
pub mod status;
pub mod theme;

pub use dialog::{ConfirmDeleteDialog, DriveSelectorDialog, PromptDialog};
pub use help::HelpViewer;
pub use panel::PanelWidget;
pub use status::StatusBar;
pub use theme::Theme;
pub use theme::ThemeConfig;

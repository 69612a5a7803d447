pub mod app;
pub mod mode;
pub mod navigator;
pub mod panel;

pub mod clipboard;
pub mod download;
pub mod icons;
pub mod json_viewer;

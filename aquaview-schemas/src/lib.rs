pub mod alert;
pub mod api;
pub mod control;
pub mod detection;
pub mod file_formats;
pub mod metric;
pub mod preset;
pub mod range;
pub mod reading;
pub mod status;

pub mod global_settings;

pub mod carousel;
pub mod common;
pub mod completions;
pub mod config;
pub mod layout;
pub mod session;

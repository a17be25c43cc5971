//! Application services
//!
//! Config loading and profile image fetching.

mod config;
mod images;

pub use config::load_desktop_config;
pub use images::{data_uri, DesktopImageCache, HttpImageFetcher};

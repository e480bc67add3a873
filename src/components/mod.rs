//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod sidebar;
mod header;
mod guarded;
mod banner;
mod loading_grid;
mod screenshot_drop;
mod image_preview;

pub use sidebar::Sidebar;
pub use header::Header;
pub use guarded::Guarded;
pub use banner::Banner;
pub use loading_grid::LoadingGrid;
pub use screenshot_drop::ScreenshotDrop;
pub use image_preview::ImagePreview;

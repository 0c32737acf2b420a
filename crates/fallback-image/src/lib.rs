//! Fallback Image Renderer
//!
//! An image element that swaps to a placeholder source when the primary
//! source fails to load, and overlays a pulsing block until the first load
//! completes. Loading itself is left to the host; it reports completion
//! through [`LoadEvent`]s. Failures are never surfaced to callers.
//!
//! ```
//! use fallback_image::{DisplayImageRequest, FallbackImage, LoadEvent};
//!
//! let mut image = FallbackImage::new(
//!     DisplayImageRequest::new("https://cdn.example/hero.jpg", "Hero")
//!         .with_fallback("/img/placeholder.png"),
//! );
//! assert!(image.render().show_placeholder);
//!
//! let next = image.handle(LoadEvent::Failed).map(str::to_owned);
//! assert_eq!(next.as_deref(), Some("/img/placeholder.png"));
//! assert_eq!(image.current_src(), "/img/placeholder.png");
//! ```

pub mod component;
pub mod options;
pub mod render;

pub use component::{
    DisplayImageRequest, FallbackImage, LoadEvent, RenderState, DEFAULT_FALLBACK_SRC,
};
pub use options::{DisplayOptions, RESERVED_ATTRIBUTES};
pub use render::{RenderedImage, PRIMARY_ONLY_ATTRIBUTES};

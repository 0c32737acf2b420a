//! Image component with one-shot fallback and a loading overlay

use tracing::debug;

use crate::options::DisplayOptions;
use crate::render::RenderedImage;

/// Placeholder shown when the primary source fails and no fallback is given
pub const DEFAULT_FALLBACK_SRC: &str = "https://placehold.co/600x400?text=Image+unavailable";

/// Everything needed to display one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImageRequest {
    pub primary_src: String,
    pub fallback_src: String,
    pub alt: String,
    pub options: DisplayOptions,
}

impl DisplayImageRequest {
    /// Request for `primary_src` with the stock fallback and no options
    pub fn new(primary_src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            primary_src: primary_src.into(),
            fallback_src: DEFAULT_FALLBACK_SRC.to_string(),
            alt: alt.into(),
            options: DisplayOptions::default(),
        }
    }

    pub fn with_fallback(mut self, fallback_src: impl Into<String>) -> Self {
        self.fallback_src = fallback_src.into();
        self
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}

/// Completion signal from the host's image loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded,
    Failed,
}

/// Per-instance flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Set once the primary source has failed; never cleared
    pub has_errored: bool,

    /// Cleared on the first load completion; never set again
    pub is_loading: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            has_errored: false,
            is_loading: true,
        }
    }
}

/// A mounted image. Owns its request and its [`RenderState`].
#[derive(Debug, Clone)]
pub struct FallbackImage {
    request: DisplayImageRequest,
    state: RenderState,
}

impl FallbackImage {
    pub fn new(request: DisplayImageRequest) -> Self {
        Self {
            request,
            state: RenderState::default(),
        }
    }

    pub fn request(&self) -> &DisplayImageRequest {
        &self.request
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Source the loader should currently be fetching
    pub fn current_src(&self) -> &str {
        if self.state.has_errored {
            &self.request.fallback_src
        } else {
            &self.request.primary_src
        }
    }

    /// The current source finished loading
    pub fn on_load(&mut self) {
        self.finish_loading();
    }

    /// The current source failed to load.
    ///
    /// Returns the source to request next when this failure triggered the
    /// swap to the fallback; `None` once the fallback is already in use.
    pub fn on_error(&mut self) -> Option<&str> {
        self.finish_loading();

        if self.state.has_errored {
            debug!("Fallback image failed to load: {}", self.request.fallback_src);
            return None;
        }

        debug!(
            "Image failed to load, switching to fallback: {} -> {}",
            self.request.primary_src, self.request.fallback_src
        );
        self.state.has_errored = true;
        Some(&self.request.fallback_src)
    }

    /// Dispatch a loader signal
    pub fn handle(&mut self, event: LoadEvent) -> Option<&str> {
        match event {
            LoadEvent::Loaded => {
                self.on_load();
                None
            }
            LoadEvent::Failed => self.on_error(),
        }
    }

    /// Snapshot of what should be on screen right now
    pub fn render(&self) -> RenderedImage<'_> {
        RenderedImage {
            src: self.current_src(),
            alt: &self.request.alt,
            attributes: &self.request.options,
            show_placeholder: self.state.is_loading,
            fallback_active: self.state.has_errored,
        }
    }

    fn finish_loading(&mut self) {
        self.state.is_loading = false;
    }
}

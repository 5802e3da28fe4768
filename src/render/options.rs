//! Rendering options and configuration.

/// Options for rendering a partitioned document back into G-code.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Insert M981 spaghetti detector commands before the filament
    /// start/end gcode comments
    pub spaghetti_detector: bool,

    /// Collect per-section statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable spaghetti detector injection.
    pub fn with_spaghetti_detector(mut self, enabled: bool) -> Self {
        self.spaghetti_detector = enabled;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            spaghetti_detector: true,
            collect_stats: false,
        }
    }
}

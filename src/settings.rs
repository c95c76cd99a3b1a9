use crate::symbol::RenderStyle;

/// Options that change diagnostic behavior of tree operations.
///
/// Built once by the caller and passed by reference; nothing reads a
/// process-wide flag.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Log every node's result while evaluating
    pub debug_mode: bool,
    pub render_style: RenderStyle,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_render_style(mut self, render_style: RenderStyle) -> Self {
        self.render_style = render_style;
        self
    }
}

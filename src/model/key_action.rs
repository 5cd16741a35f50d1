//! Domain-level keyboard actions independent of key bindings.

/// User intents the viewport controller understands.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Panning
    /// Move the viewport one pan step up. Default: ↑/k
    PanUp,
    /// Move the viewport one pan step down. Default: ↓/j
    PanDown,
    /// Move the viewport one pan step left. Default: ←/h
    PanLeft,
    /// Move the viewport one pan step right. Default: →/l
    PanRight,

    // Zoom
    /// Increase the zoom percentage by one. Default: z
    ZoomIn,
    /// Decrease the zoom percentage by one. Default: x
    ZoomOut,

    /// Switch between monochrome and colored glyphs. Default: c
    ToggleColor,

    /// Leave the viewer. Default: q/Ctrl+C
    Quit,
}

// host.rs - What the simulation needs from the window it runs in

use egui::Color32;

/// Logical keys the game reacts to, independent of physical bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    FastForward,
    TogglePause,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Adds cells.
    Primary,
    /// Removes cells.
    Secondary,
}

/// Input and drawing surface provided by the windowing layer.
///
/// Coordinates are in board cells: the surface is one logical pixel per
/// cell, `x` along columns and `y` along rows.
pub trait Host {
    /// True only on the frame the key went down.
    fn key_pressed(&self, key: LogicalKey) -> bool;

    /// True on every frame the key is down.
    fn key_held(&self, key: LogicalKey) -> bool;

    fn pointer_button_held(&self, button: PointerButton) -> bool;

    /// Cell under the pointer, or `None` when the pointer is not over the
    /// surface. Values may still fall outside the board and must be checked.
    fn pointer_position(&self) -> Option<(i32, i32)>;

    /// Fill the cell at `(x, y)` with `color`.
    fn plot_pixel(&mut self, x: i32, y: i32, color: Color32);

    /// Surface size in cells as `(width, height)`.
    fn screen_dimensions(&self) -> (i32, i32);
}

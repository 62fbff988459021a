//! Draw target abstraction.
//!
//! The sticky-header components never rasterize anything themselves. They
//! manipulate the transform of a [`Canvas`] and ask the host's view factory to
//! draw a header view onto it. Hosts adapt their own renderer to this trait.

use crate::types::Point;

/// Minimal transform stack a header draw pass needs.
pub trait Canvas {
    /// Save the current transform.
    fn save(&mut self);

    /// Restore the most recently saved transform.
    fn restore(&mut self);

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// The accumulated translation of the current transform.
    fn translation(&self) -> Point;
}

/// A command captured by [`RecordingCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    /// `save()` was called.
    Save,
    /// `restore()` was called.
    Restore,
    /// `translate()` was called with these deltas.
    Translate(f32, f32),
    /// A view was drawn with its top-left at this translation.
    DrawView { tag: u64, at: Point },
}

/// A canvas that records every call instead of drawing.
///
/// Useful for headless hosts and for asserting on draw passes in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
    stack: Vec<Point>,
    current: Point,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view draw at the current translation.
    ///
    /// `tag` is an arbitrary host identifier for the view (often a header id).
    pub fn draw_view(&mut self, tag: u64) {
        let at = self.current;
        self.commands.push(CanvasCommand::DrawView { tag, at });
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Only the view draws, in call order.
    pub fn draws(&self) -> Vec<(u64, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                CanvasCommand::DrawView { tag, at } => Some((tag, at)),
                _ => None,
            })
            .collect()
    }

    /// Number of unmatched `save()` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop all recorded commands and reset the transform.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.current = Point::ZERO;
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.stack.push(self.current);
        self.commands.push(CanvasCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
        self.commands.push(CanvasCommand::Restore);
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.current.x += tx;
        self.current.y += ty;
        self.commands.push(CanvasCommand::Translate(tx, ty));
    }

    fn translation(&self) -> Point {
        self.current
    }
}

//! Drawing side channel for visualizing grids
//!
//! A grid translates its bounding box and populated cells into calls against
//! a [`Renderer`], a minimal 2-D drawing-context capability. The grid never
//! reads anything back. [`CommandBuffer`] is the buffering implementation that
//! forwards batches to a remote viewer through a [`CommandSink`].

use std::sync::mpsc::Sender;

use tracing::{debug, warn};

use crate::spatial::grid::SparseGrid;

/// Drawing primitives a grid can issue
pub trait Renderer {
    /// Start a new path
    fn begin_path(&mut self);
    /// Move the pen without drawing
    fn move_to(&mut self, x: i32, y: i32);
    /// Draw a straight line from the pen to `(x, y)`
    fn line_to(&mut self, x: i32, y: i32);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
    /// Discard everything drawn so far
    fn clear(&mut self);
    /// Push pending drawing to its destination
    fn flush(&mut self);
}

/// A recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Canvas reset, always first in a batch after [`Renderer::clear`]
    Clear,
    /// [`Renderer::begin_path`]
    BeginPath,
    /// [`Renderer::move_to`]
    MoveTo {
        /// Target x
        x: i32,
        /// Target y
        y: i32,
    },
    /// [`Renderer::line_to`]
    LineTo {
        /// Target x
        x: i32,
        /// Target y
        y: i32,
    },
    /// [`Renderer::fill_rect`]
    FillRect {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
    },
}

/// Destination of flushed command batches
///
/// Delivery is fire-and-forget: nothing is acknowledged and failures are not
/// reported back to the renderer.
pub trait CommandSink {
    /// Deliver one batch, in buffer order
    fn send(&mut self, batch: Vec<DrawCommand>);
}

impl CommandSink for Sender<Vec<DrawCommand>> {
    fn send(&mut self, batch: Vec<DrawCommand>) {
        if let Err(err) = Sender::send(self, batch) {
            warn!("Dropping {} draw commands: {err}", err.0.len());
        }
    }
}

impl CommandSink for Vec<Vec<DrawCommand>> {
    fn send(&mut self, batch: Vec<DrawCommand>) {
        self.push(batch);
    }
}

/// Buffering renderer forwarding batches to an optional sink
///
/// Without a sink every call is a no-op, so puzzle code can render
/// unconditionally.
#[derive(Default)]
pub struct CommandBuffer {
    sink: Option<Box<dyn CommandSink>>,
    buffer: Vec<DrawCommand>,
    last_flush: Option<Vec<DrawCommand>>,
}

impl CommandBuffer {
    /// A renderer that discards everything
    pub fn detached() -> Self {
        Self::default()
    }

    /// A renderer forwarding to `sink`
    ///
    /// The buffer starts with a [`DrawCommand::Clear`] so the first batch
    /// resets the viewer.
    pub fn new(sink: Box<dyn CommandSink>) -> Self {
        Self {
            sink: Some(sink),
            buffer: vec![DrawCommand::Clear],
            last_flush: None,
        }
    }

    /// Whether a sink is attached
    pub const fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Commands waiting for the next flush
    pub fn pending(&self) -> &[DrawCommand] {
        &self.buffer
    }

    /// The most recently flushed batch, replayable to late viewers
    pub fn last_flush(&self) -> Option<&[DrawCommand]> {
        self.last_flush.as_deref()
    }

    fn push(&mut self, command: DrawCommand) {
        if self.sink.is_some() {
            self.buffer.push(command);
        }
    }
}

impl Renderer for CommandBuffer {
    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear(&mut self) {
        if self.sink.is_some() {
            self.buffer.clear();
            self.buffer.push(DrawCommand::Clear);
        }
    }

    fn flush(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let batch = std::mem::take(&mut self.buffer);
        self.last_flush = Some(batch.clone());
        sink.send(batch);
    }
}

impl<T> SparseGrid<T> {
    /// Draw the grid lines of the bounding box
    ///
    /// Issues `begin_path`, the top border, one horizontal line below every
    /// row from top to bottom, the left border, then one vertical line right
    /// of every column from left to right. `cell_size` is the pixel pitch.
    /// Nothing is drawn when the pixel extent does not fit in `i32`.
    pub fn render_grid<R: Renderer + ?Sized>(&self, renderer: &mut R, cell_size: i32) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        debug!(
            rows = ?bounds.row_range(),
            columns = ?bounds.column_range(),
            cell_size,
            "rendering grid lines"
        );
        let extent = |cells: usize| {
            let cells = i32::try_from(cells).ok()?;
            Some((cells, cells.checked_mul(cell_size)?))
        };
        let (Some((columns, px_width)), Some((rows, px_height))) =
            (extent(bounds.width()), extent(bounds.height()))
        else {
            warn!(
                width = bounds.width(),
                height = bounds.height(),
                cell_size,
                "grid too large to draw"
            );
            return;
        };

        renderer.begin_path();
        renderer.move_to(0, 0);
        renderer.line_to(px_width, 0);
        for row in 1..=rows {
            let px_y = row * cell_size;
            renderer.move_to(0, px_y);
            renderer.line_to(px_width, px_y);
        }

        renderer.move_to(0, 0);
        renderer.line_to(0, px_height);
        for column in 1..=columns {
            let px_x = column * cell_size;
            renderer.move_to(px_x, 0);
            renderer.line_to(px_x, px_height);
        }
    }

    /// Fill one unit square per populated cell, in scan order
    ///
    /// Cells are offset so the bounding box minimum lands on `(0, 0)`.
    /// Scale the renderer to get larger cells. Nothing is drawn when an
    /// offset does not fit in `i32`.
    pub fn render_cells<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        if i32::try_from(bounds.width()).is_err() || i32::try_from(bounds.height()).is_err() {
            warn!(
                width = bounds.width(),
                height = bounds.height(),
                "grid too large to draw"
            );
            return;
        }
        for (pos, _) in self.iter() {
            renderer.fill_rect(
                pos[0].abs_diff(bounds.min[0]) as i32,
                pos[1].abs_diff(bounds.min[1]) as i32,
                1,
                1,
            );
        }
    }
}

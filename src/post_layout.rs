//! Work deferred until the host's layout pass has completed.
//!
//! Zoom and offset changes only observe correct geometry once layout has
//! settled, so the viewport queues them here instead of running them inline.
//! The host drains the queue once per frame, after layout, via
//! [`GridViewport::run_post_layout`](crate::GridViewport::run_post_layout).

use crate::traits::{CellCoord, ReadyHandler};
use egui::Vec2;
use std::collections::VecDeque;
use std::fmt;

/// A single deferred step.
pub enum PostLayoutTask {
    /// Reset zoom to 1.0 and recenter, falling back to the origin offset.
    ResetZoomAndRecenter,
    /// Report the grid's pixel size to the caller of `configure`.
    NotifyReady { handler: ReadyHandler, size: Vec2 },
    /// Re-read the given cells from the data source.
    RefreshCells(Vec<CellCoord>),
}

impl fmt::Debug for PostLayoutTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetZoomAndRecenter => f.write_str("ResetZoomAndRecenter"),
            Self::NotifyReady { size, .. } => f
                .debug_struct("NotifyReady")
                .field("size", size)
                .finish_non_exhaustive(),
            Self::RefreshCells(cells) => f.debug_tuple("RefreshCells").field(&cells.len()).finish(),
        }
    }
}

/// FIFO of deferred steps. Tasks run in the order they were scheduled.
#[derive(Debug, Default)]
pub struct PostLayoutQueue {
    tasks: VecDeque<PostLayoutTask>,
}

impl PostLayoutQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: PostLayoutTask) {
        self.tasks.push_back(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks waiting to run, in scheduling order.
    pub fn iter(&self) -> impl Iterator<Item = &PostLayoutTask> + '_ {
        self.tasks.iter()
    }

    /// Takes every task scheduled so far.
    ///
    /// Tasks scheduled while the returned batch runs wait for the next drain.
    pub fn take_batch(&mut self) -> VecDeque<PostLayoutTask> {
        std::mem::take(&mut self.tasks)
    }
}

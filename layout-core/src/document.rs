use log::debug;

use crate::blocks::FlowBlock;
use crate::error::LayoutError;
use crate::geometry::{compute_frames, ColumnSpec, Frame, FrameId, PageGeometry};

/// Builder that assigns blocks to the two column frames in order.
///
/// Blocks go to the left frame until `break_to_next_frame` is called,
/// then to the right frame. Each builder is independent; separate
/// instances may run concurrently on separate threads.
#[derive(Debug)]
pub struct LayoutBuilder {
    geometry: PageGeometry,
    left_frame: Frame,
    right_frame: Frame,
    active: FrameId,
    left_blocks: Vec<FlowBlock>,
    right_blocks: Vec<FlowBlock>,
}

impl LayoutBuilder {
    /// Compute the column frames and start an empty layout with the
    /// left frame active.
    pub fn new(geometry: PageGeometry, spec: ColumnSpec) -> Result<Self, LayoutError> {
        let (left_frame, right_frame) = compute_frames(&geometry, &spec)?;
        Ok(LayoutBuilder {
            geometry,
            left_frame,
            right_frame,
            active: FrameId::Left,
            left_blocks: Vec::new(),
            right_blocks: Vec::new(),
        })
    }

    /// Append a block to the active frame's sequence.
    pub fn append_block(&mut self, block: FlowBlock) -> &mut Self {
        match self.active {
            FrameId::Left => self.left_blocks.push(block),
            FrameId::Right => self.right_blocks.push(block),
        }
        self
    }

    /// Switch the active frame from left to right.
    ///
    /// A two-column layout has no third frame, so calling this a
    /// second time fails with `InvalidLayoutState`. Breaking before
    /// any content is allowed; an empty left column is a valid layout.
    pub fn break_to_next_frame(&mut self) -> Result<(), LayoutError> {
        match self.active {
            FrameId::Left => {
                self.active = FrameId::Right;
                Ok(())
            }
            FrameId::Right => Err(LayoutError::InvalidLayoutState(
                "already on the last frame",
            )),
        }
    }

    /// The frame new blocks are currently appended to.
    pub fn active_frame(&self) -> FrameId {
        self.active
    }

    /// Finalize into an immutable document.
    ///
    /// Fails with `EmptyDocument` when no blocks were appended to
    /// either frame.
    pub fn build(self) -> Result<LayoutDocument, LayoutError> {
        if self.left_blocks.is_empty() && self.right_blocks.is_empty() {
            return Err(LayoutError::EmptyDocument);
        }
        debug!(
            "built layout: {} left blocks, {} right blocks",
            self.left_blocks.len(),
            self.right_blocks.len(),
        );
        Ok(LayoutDocument {
            geometry: self.geometry,
            left_frame: self.left_frame,
            right_frame: self.right_frame,
            left_blocks: self.left_blocks,
            right_blocks: self.right_blocks,
        })
    }
}

/// Finalized pairing of the two frame geometries with their assigned
/// block sequences, ready for a render backend.
///
/// The document exclusively owns its frames and blocks; it is
/// discarded after rendering.
#[derive(Debug)]
pub struct LayoutDocument {
    geometry: PageGeometry,
    left_frame: Frame,
    right_frame: Frame,
    left_blocks: Vec<FlowBlock>,
    right_blocks: Vec<FlowBlock>,
}

impl LayoutDocument {
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn left_frame(&self) -> &Frame {
        &self.left_frame
    }

    pub fn right_frame(&self) -> &Frame {
        &self.right_frame
    }

    pub fn left_blocks(&self) -> &[FlowBlock] {
        &self.left_blocks
    }

    pub fn right_blocks(&self) -> &[FlowBlock] {
        &self.right_blocks
    }
}

//! # Attribute Views
//!
//! Non-owning views over an interleaved vertex buffer. All three views of a
//! buffer have the same element count: one entry per vertex record.

use config::constants::{
    ATTRIBUTE_COMPONENTS, COLOR_OFFSET, NORMAL_OFFSET, POSITION_OFFSET, VERTEX_STRIDE,
};

/// The three logical attributes of a decoded mesh buffer.
///
/// Borrows the buffer; obtain one via [`crate::decode`]. The raw interleaved
/// slice remains available through [`VertexAttributes::interleaved`] so GPU
/// hosts can upload once and address attributes by stride and offset.
#[derive(Debug, Clone, Copy)]
pub struct VertexAttributes<'a> {
    data: &'a [f32],
}

impl<'a> VertexAttributes<'a> {
    /// Invariant: `data.len()` is a multiple of the stride. `decode` is the
    /// only constructor path and has already validated it.
    pub(crate) fn new(data: &'a [f32]) -> Self {
        debug_assert_eq!(data.len() % VERTEX_STRIDE, 0);
        Self { data }
    }

    /// Returns the number of vertex records.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / VERTEX_STRIDE
    }

    /// Returns the position view (offset 0).
    pub fn position(&self) -> AttributeView<'a> {
        AttributeView {
            data: self.data,
            offset: POSITION_OFFSET,
        }
    }

    /// Returns the normal view (offset 3).
    pub fn normal(&self) -> AttributeView<'a> {
        AttributeView {
            data: self.data,
            offset: NORMAL_OFFSET,
        }
    }

    /// Returns the color view (offset 6).
    pub fn color(&self) -> AttributeView<'a> {
        AttributeView {
            data: self.data,
            offset: COLOR_OFFSET,
        }
    }

    /// Returns the raw interleaved floats backing all three views.
    pub fn interleaved(&self) -> &'a [f32] {
        self.data
    }
}

/// One attribute of an interleaved buffer: a strided sequence of
/// three-float tuples.
#[derive(Debug, Clone, Copy)]
pub struct AttributeView<'a> {
    data: &'a [f32],
    offset: usize,
}

impl<'a> AttributeView<'a> {
    /// Returns the number of tuples in the view.
    pub fn len(&self) -> usize {
        self.data.len() / VERTEX_STRIDE
    }

    /// Returns true if the view has no tuples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the tuple at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(VERTEX_STRIDE)?.checked_add(self.offset)?;
        let slice = self.data.get(start..start + ATTRIBUTE_COMPONENTS)?;
        Some([slice[0], slice[1], slice[2]])
    }

    /// Iterates over all tuples in record order.
    pub fn iter(&self) -> impl Iterator<Item = [f32; 3]> + 'a {
        let data = self.data;
        let offset = self.offset;
        data.chunks_exact(VERTEX_STRIDE).map(move |record| {
            [
                record[offset],
                record[offset + 1],
                record[offset + 2],
            ]
        })
    }
}

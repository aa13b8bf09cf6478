//! Index-segment view over a mutable sequence.
//!
//! This module provides the thin addressing layer the algorithms see: a
//! `(base, len)` window over a borrowed slice. Every local index is checked
//! against the window and translated to an absolute position in the backing
//! slice, which is what observers are told about.

// Internal dependencies
use crate::primitives::errors::SortError;

/// Borrowed `[base, base + len)` window over a mutable sequence.
///
/// The view never owns the sequence. Sub-segments reborrow it, so a child view
/// is always inside its parent and the parent is unusable while the child lives.
#[derive(Debug)]
pub struct IndexSegment<'a, T> {
    // Full backing sequence; `base` is an offset into it.
    data: &'a mut [T],

    // Absolute offset of local index 0.
    base: usize,

    // Number of addressable elements.
    len: usize,
}

impl<'a, T> IndexSegment<'a, T> {
    /// View covering the whole sequence.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self { data, base: 0, len }
    }

    /// Absolute offset of this view inside the backing sequence.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Number of elements addressable through this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Translate a local index into an absolute index.
    #[inline]
    pub fn absolute(&self, index: usize) -> Result<usize, SortError> {
        if index >= self.len {
            return Err(SortError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.base + index)
    }

    /// Read the element at a local index.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, SortError> {
        let abs = self.absolute(index)?;
        Ok(&self.data[abs])
    }

    /// Overwrite the element at a local index.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SortError> {
        let abs = self.absolute(index)?;
        self.data[abs] = value;
        Ok(())
    }

    /// Exchange two elements. `i == j` is allowed and leaves the view unchanged.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        let a = self.absolute(i)?;
        let b = self.absolute(j)?;
        self.data.swap(a, b);
        Ok(())
    }

    /// Narrow the view to `[offset, offset + len)` in local coordinates.
    pub fn slice(&mut self, offset: usize, len: usize) -> Result<IndexSegment<'_, T>, SortError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(IndexSegment {
                data: &mut *self.data,
                base: self.base + offset,
                len,
            }),
            _ => Err(SortError::SegmentOutOfRange {
                offset,
                len,
                parent_len: self.len,
            }),
        }
    }

    /// Elements currently addressable through this view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.base..self.base + self.len]
    }
}

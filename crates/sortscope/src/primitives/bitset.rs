//! Fixed-capacity bit mask used by the arbitrary selection filter.
//!
//! ## Purpose
//!
//! One flag per sequence index, packed into `u64` words. Set bits are
//! enumerated in index order with `trailing_zeros`, which is what produces the
//! strictly increasing index lists the sorting service expects.
//!
//! ## Invariants
//!
//! * `len <= MAX_MASK_LEN`.
//! * Bits at positions `>= len` are always clear.

// External dependencies
use core::iter::FusedIterator;

// Internal dependencies
use crate::primitives::errors::SortError;

/// Largest number of flags a [`SelectionMask`] can hold.
pub const MAX_MASK_LEN: usize = 1 << 16;

const WORD_BITS: usize = u64::BITS as usize;

/// Packed per-index enable flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionMask {
    words: Vec<u64>,
    len: usize,
}

impl SelectionMask {
    /// Mask of `len` flags, all set.
    pub fn all_set(len: usize) -> Result<Self, SortError> {
        let mut mask = Self::empty(0)?;
        mask.resize(len, true)?;
        Ok(mask)
    }

    /// Mask of `len` flags, all clear.
    pub fn empty(len: usize) -> Result<Self, SortError> {
        Self::check_capacity(len)?;
        Ok(Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        })
    }

    /// Whether a mask of `len` flags can be represented.
    #[inline]
    pub fn can_hold(len: usize) -> bool {
        len <= MAX_MASK_LEN
    }

    fn check_capacity(len: usize) -> Result<(), SortError> {
        if Self::can_hold(len) {
            Ok(())
        } else {
            Err(SortError::MaskCapacityExceeded {
                len,
                max: MAX_MASK_LEN,
            })
        }
    }

    /// Number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the mask holds no flags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read a flag.
    pub fn get(&self, index: usize) -> Result<bool, SortError> {
        if index >= self.len {
            return Err(SortError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0)
    }

    /// Write a flag.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), SortError> {
        if index >= self.len {
            return Err(SortError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let bit = 1 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= bit;
        } else {
            *word &= !bit;
        }
        Ok(())
    }

    /// Grow with `fill` flags or truncate to `new_len`.
    pub fn resize(&mut self, new_len: usize, fill: bool) -> Result<(), SortError> {
        Self::check_capacity(new_len)?;

        if new_len < self.len {
            self.words.truncate(new_len.div_ceil(WORD_BITS));
            self.len = new_len;
            self.clear_tail();
            return Ok(());
        }

        let old_len = self.len;
        self.words.resize(new_len.div_ceil(WORD_BITS), 0);
        self.len = new_len;
        if fill {
            for index in old_len..new_len {
                self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
            }
        }
        Ok(())
    }

    /// Number of set flags.
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of set flags, in increasing order.
    pub fn set_indices(&self) -> SetIndices<'_> {
        SetIndices {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    // Keep bits past `len` clear in the last word.
    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

/// Iterator over set flags of a [`SelectionMask`].
#[derive(Debug, Clone)]
pub struct SetIndices<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for SetIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}

impl FusedIterator for SetIndices<'_> {}

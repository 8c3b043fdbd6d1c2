//! # Arena Allocator
//!
//! A bump allocator over a fixed-size reserved block. Allocation is a cursor
//! bump, bulk deallocation is a cursor rewind, and both are O(1) with zero
//! per-allocation bookkeeping.
//!
//! Allocation patterns in the host are strictly nested: scratch computations
//! within a frame, scoped buffer work within startup. A [`Mark`] captures the
//! cursor so a whole nest of allocations can be rolled back at once; marks
//! must be restored in reverse order of acquisition.
//!
//! # Thread Safety
//!
//! The arena is NOT thread-safe. The host is single-threaded by construction.
//!
//! # Panics
//!
//! Capacity overruns, cursor underflows, non-power-of-two alignments, and
//! out-of-order mark restores all indicate a violated invariant that cannot
//! be safely continued past. Each one panics immediately.

/// A saved cursor position used to roll back all allocations made after it.
///
/// Opaque to callers other than as a rollback token for [`Arena::pop_to_mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark(usize);

/// A bump-pointer arena over an owned byte block of fixed capacity.
///
/// Callers receive byte *offsets* from [`Arena::push`] and read or write
/// through [`Arena::slice_mut`]. The raw base address is available via
/// [`Arena::base_ptr`] solely for the host/module FFI boundary.
///
/// # Example
///
/// ```
/// use vessel_core::Arena;
///
/// let mut arena = Arena::new(1024);
/// let mark = arena.mark();
/// let off = arena.push(64, 8);
/// arena.slice_mut(off, 64).fill(0xAB);
/// arena.pop_to_mark(mark);
/// assert_eq!(arena.used(), 0);
/// ```
pub struct Arena {
    /// The backing storage, reserved once and never resized.
    storage: Box<[u8]>,
    /// Current allocation offset.
    cursor: usize,
    /// Total capacity in bytes.
    capacity: usize,
    /// Highest cursor value ever observed. Survives `clear`.
    high_watermark: usize,
}

impl Arena {
    /// Reserves a new arena with the given capacity in bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let storage = vec![0u8; capacity].into_boxed_slice();
        Self {
            storage,
            cursor: 0,
            capacity,
            high_watermark: 0,
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current cursor, i.e. the number of bytes in use.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.cursor
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.cursor
    }

    /// Returns the highest cursor value observed over the arena's lifetime.
    ///
    /// Unlike the cursor itself this is not reset by [`Arena::clear`], which
    /// makes it the per-run answer to "how big does this arena need to be".
    #[inline]
    #[must_use]
    pub const fn high_watermark(&self) -> usize {
        self.high_watermark
    }

    /// Allocates `size` bytes at the next offset satisfying `align`.
    ///
    /// Returns the byte offset of the start of the allocation.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two or if the aligned range would
    /// exceed capacity. Both are programming/configuration errors.
    pub fn push(&mut self, size: usize, align: usize) -> usize {
        assert!(
            align.is_power_of_two(),
            "arena push with non-power-of-two alignment {align}"
        );

        let aligned = self
            .cursor
            .checked_add(align - 1)
            .map(|c| c & !(align - 1))
            .unwrap_or(usize::MAX);
        let end = aligned.checked_add(size).unwrap_or(usize::MAX);
        assert!(
            end <= self.capacity,
            "arena overflow: push of {size} bytes (align {align}) at cursor {} exceeds capacity {}",
            self.cursor,
            self.capacity
        );

        self.cursor = end;
        if self.cursor > self.high_watermark {
            self.high_watermark = self.cursor;
        }
        aligned
    }

    /// Rewinds the cursor by exactly `size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the rewind would take the cursor below zero.
    pub fn pop(&mut self, size: usize) {
        assert!(
            size <= self.cursor,
            "arena underflow: pop of {size} bytes at cursor {}",
            self.cursor
        );
        self.cursor -= size;
    }

    /// Captures the current cursor as a rollback token.
    #[inline]
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark(self.cursor)
    }

    /// Restores the cursor to a previously captured [`Mark`].
    ///
    /// Marks must be restored in reverse order of acquisition.
    ///
    /// # Panics
    ///
    /// Panics if the mark is ahead of the current cursor, which indicates a
    /// corrupted rollback order.
    pub fn pop_to_mark(&mut self, mark: Mark) {
        assert!(
            mark.0 <= self.cursor,
            "arena mark {} is ahead of cursor {}: rollback order violated",
            mark.0,
            self.cursor
        );
        self.cursor = mark.0;
    }

    /// Resets the cursor to zero without touching the high-water mark.
    ///
    /// Invalidates every allocation made since the last clear; callers must
    /// not retain offsets across it. Used once per frame on the frame arena.
    #[inline]
    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// Bounds-checked mutable access to a live allocation.
    ///
    /// # Panics
    ///
    /// Panics if the requested range is not fully inside `[0, used())`.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        let end = offset.checked_add(len).unwrap_or(usize::MAX);
        assert!(
            end <= self.cursor,
            "arena slice {offset}..{end} outside live range 0..{}",
            self.cursor
        );
        &mut self.storage[offset..end]
    }

    /// Raw base pointer of the backing block.
    ///
    /// Exists only so the scheduler can loan a span of this arena to the
    /// loaded game module across the C ABI. Everything host-side goes through
    /// offsets and [`Arena::slice_mut`].
    #[inline]
    pub fn base_ptr(&mut self) -> *mut u8 {
        self.storage.as_mut_ptr()
    }
}

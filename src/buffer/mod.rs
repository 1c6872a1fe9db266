//! Byte storage behind a field handler.
//!
//! Three backends share the [`Buffer`] / [`BufferMut`] contract:
//!
//! | Backend          | Storage                        | Ceiling             |
//! |------------------|--------------------------------|---------------------|
//! | [`FixedBuffer`]  | inline `ArrayVec<u8, C>`       | `C`                 |
//! | [`DynamicBuffer`]| heap `Vec<u8>`, grows on write | configured maximum  |
//! | [`ChildBuffer`]  | none, forwards to outer field  | outer field capacity|
//!
//! Offsets are relative to the start of the buffer. Every mutation reports a
//! [`Probe`]: on rejection `insert` carries the largest growth that fits,
//! `remove` the largest removable count and `resize` the reachable size.

mod child;
mod dynamic;
mod fixed;

pub use child::ChildBuffer;
pub use dynamic::DynamicBuffer;
pub use fixed::FixedBuffer;

use crate::types::Probe;

pub trait Buffer {
    /// Bytes currently in use (`length()` of them).
    fn bytes(&self) -> &[u8];

    /// Largest length this buffer can reach.
    fn capacity(&self) -> usize;

    #[inline]
    fn length(&self) -> usize {
        self.bytes().len()
    }

    /// Bytes from `offset` to the end, empty when out of range.
    #[inline]
    fn data(&self, offset: usize) -> &[u8] {
        self.bytes().get(offset..).unwrap_or(&[])
    }
}

pub trait BufferMut: Buffer {
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Inserts `n` zero bytes at `offset`, shifting the tail right.
    fn insert(&mut self, offset: usize, n: usize) -> Probe;

    /// Removes `n` bytes at `offset`, shifting the tail left.
    fn remove(&mut self, offset: usize, n: usize) -> Probe;

    /// Moves the end of the buffer to `size`. New bytes are zero.
    fn resize(&mut self, size: usize) -> Probe;

    #[inline]
    fn data_mut(&mut self, offset: usize) -> &mut [u8] {
        self.bytes_mut().get_mut(offset..).unwrap_or(&mut [])
    }
}

#[cfg(test)]
mod tests;

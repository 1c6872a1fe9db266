//! Field handlers: one position set plus one buffer behind a single contract.
//!
//! Every field that references the same handler addresses the same bytes.
//! Lookups on unknown ids return empty sentinels (`0`, `&[]`) and never fail;
//! mutations report a [`Probe`] so callers can retry with a feasible amount.
//!
//! Fields are expected to be set up in ascending-offset order. `resize` moves
//! the trailing end of the buffer, so it is only honored for the field nothing
//! else extends beyond; `insert` and `remove` splice inside a field and shift
//! every field located after it.

mod indexed;

pub use indexed::{ChildHandler, IndexedHandler};

use crate::error::FieldError;
use crate::types::{FieldId, Probe};

pub trait FieldHandler {
    fn contains(&self, id: FieldId) -> bool;

    /// Every byte of the underlying buffer.
    fn bytes(&self) -> &[u8];

    /// Bytes of field `id`, empty when unknown.
    fn data(&self, id: FieldId) -> &[u8];

    fn offset(&self, id: FieldId) -> usize;

    fn length(&self, id: FieldId) -> usize;

    /// `length(id)` plus the room left in the buffer.
    fn capacity(&self, id: FieldId) -> usize;
}

pub trait FieldHandlerMut: FieldHandler {
    /// Registers field `id` at `offset` with `length` bytes, growing the
    /// buffer to fit. Calling it again for a known id overwrites its position.
    fn setup(&mut self, id: FieldId, offset: usize, length: usize) -> Result<(), FieldError>;

    fn data_mut(&mut self, id: FieldId) -> &mut [u8];

    /// Inserts `n` zero bytes at `offset` inside field `id`.
    fn insert(&mut self, id: FieldId, offset: usize, n: usize) -> Probe;

    /// Removes `n` bytes at `offset` inside field `id`.
    fn remove(&mut self, id: FieldId, offset: usize, n: usize) -> Probe;

    /// Sets the length of trailing field `id` to `size`. Empty fields at its
    /// end move with it; asking for the current length always succeeds.
    fn resize(&mut self, id: FieldId, size: usize) -> Probe;
}

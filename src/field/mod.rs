//! Typed views over handler fields.
//!
//! A field holds nothing but the id it was bound to; the handler is passed
//! in on every access (`&H` to read, `&mut H` to write), so a field can never
//! outlive or race the bytes it reads.
//!
//! | Field            | Length                       | Encoding                   |
//! |------------------|------------------------------|----------------------------|
//! | [`ByteField`]    | 1                            | u8                         |
//! | [`WordField`]    | 2                            | u16, little-endian         |
//! | [`LongField`]    | 4                            | u32, little-endian         |
//! | [`QuadField`]    | 8                            | u64, little-endian         |
//! | [`Ipv4Field`]    | 4                            | IPv4, network byte order   |
//! | [`FixedString`]  | N                            | not terminated when full   |
//! | [`DynString`]    | content + 1                  | NUL-terminated             |
//! | [`FixedArray`]   | sum of its N sub-fields      | nested handler             |
//!
//! An unbound field reads defaults and ignores writes.

mod array;
mod layout;
mod scalar;
mod string;

pub use array::FixedArray;
pub use layout::Layout;
pub use scalar::{ByteField, Ipv4Field, LongField, QuadField, ScalarField, Wire, WordField};
pub use string::{DynString, FixedString};

use crate::error::FieldError;
use crate::handler::{FieldHandler, FieldHandlerMut};
use crate::types::FieldId;

/// Lifecycle of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No handler attached; reads return defaults, writes are no-ops.
    Unbound,
    /// Position registered, no bytes behind it yet.
    Bound,
    /// Bytes accessible through the shared buffer.
    Active,
}

pub trait Field {
    /// Binds the field to `id` at `offset` and registers its span.
    ///
    /// `budget` is the most bytes the field may take; fixed-length fields
    /// ignore it. Returns the concrete length, which is where the next field
    /// starts.
    fn init<H: FieldHandlerMut + ?Sized>(
        &mut self,
        handler: &mut H,
        id: FieldId,
        offset: usize,
        budget: usize,
    ) -> Result<usize, FieldError>;

    fn id(&self) -> Option<FieldId>;

    #[inline]
    fn is_bound(&self) -> bool {
        self.id().is_some()
    }

    fn state<H: FieldHandler + ?Sized>(&self, handler: &H) -> FieldState {
        match self.id() {
            None => FieldState::Unbound,
            Some(id) if !handler.data(id).is_empty() => FieldState::Active,
            Some(_) => FieldState::Bound,
        }
    }
}

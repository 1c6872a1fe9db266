use std::ops::{Deref, DerefMut};

use super::{Buffer, BufferMut};
use crate::error::FieldError;
use crate::handler::{FieldHandler, FieldHandlerMut};
use crate::types::{FieldId, Probe};

/// Buffer that owns nothing: every call is forwarded to field `id` of an
/// outer handler, so offsets here are relative to that field's start.
///
/// `R` is `&H` for read-only access or `&mut H` for mutation.
#[derive(Debug)]
pub struct ChildBuffer<R> {
    outer: R,
    id: FieldId,
}

impl<R> ChildBuffer<R> {
    /// Wraps an already registered outer field.
    #[inline]
    pub fn new(outer: R, id: FieldId) -> Self {
        Self { outer, id }
    }
}

impl<R> ChildBuffer<R>
where
    R: DerefMut,
    R::Target: FieldHandlerMut,
{
    /// Reserves `length` bytes at `offset` for field `id` in the outer
    /// handler, then wraps it.
    pub fn attach(mut outer: R, id: FieldId, offset: usize, length: usize) -> Result<Self, FieldError> {
        outer.setup(id, offset, length)?;
        Ok(Self { outer, id })
    }
}

impl<R> Buffer for ChildBuffer<R>
where
    R: Deref,
    R::Target: FieldHandler,
{
    #[inline]
    fn bytes(&self) -> &[u8] {
        self.outer.data(self.id)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.outer.capacity(self.id)
    }
}

impl<R> BufferMut for ChildBuffer<R>
where
    R: DerefMut,
    R::Target: FieldHandlerMut,
{
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.outer.data_mut(self.id)
    }

    #[inline]
    fn insert(&mut self, offset: usize, n: usize) -> Probe {
        self.outer.insert(self.id, offset, n)
    }

    #[inline]
    fn remove(&mut self, offset: usize, n: usize) -> Probe {
        self.outer.remove(self.id, offset, n)
    }

    #[inline]
    fn resize(&mut self, size: usize) -> Probe {
        self.outer.resize(self.id, size)
    }
}

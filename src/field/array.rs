use super::{Field, ScalarField, Wire};
use crate::buffer::{ChildBuffer, FixedBuffer};
use crate::error::FieldError;
use crate::handler::{FieldHandler, FieldHandlerMut, IndexedHandler};
use crate::positions::FixedPositions;
use crate::types::FieldId;

/// Array of exactly `N` sub-fields addressed through a nested handler.
///
/// Sub-field `i` has id `i` inside the array. Sub-fields are initialized in
/// index order, each at the end of the previous one, with whatever is left
/// of the array's budget, so fixed- and variable-length sub-fields can be
/// mixed. Arrays nest: `FixedArray<FixedArray<ByteField, 2>, 3>` is a 3x2
/// grid.
#[derive(Debug, Clone)]
pub struct FixedArray<T, const N: usize> {
    id: Option<FieldId>,
    positions: FixedPositions<N>,
    elements: [T; N],
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    pub fn new() -> Self {
        Self {
            id: None,
            positions: FixedPositions::new(),
            elements: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of sub-fields.
    pub const fn length(&self) -> usize {
        N
    }

    /// Number of sub-fields; an array never grows.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes taken by all sub-fields.
    pub fn byte_length<H: FieldHandler + ?Sized>(&self, outer: &H) -> usize {
        self.id.map_or(0, |id| outer.length(id))
    }

    /// Runs `f` with the nested handler and the sub-fields, for reading.
    ///
    /// When the array is unbound, `f` sees an empty handler: every read
    /// returns its default.
    pub fn with<H, R>(&self, outer: &H, f: impl FnOnce(&dyn FieldHandler, &[T; N]) -> R) -> R
    where
        H: FieldHandler + ?Sized,
    {
        match self.id {
            Some(id) => {
                let child = IndexedHandler::new(&self.positions, ChildBuffer::new(outer, id));
                f(&child, &self.elements)
            }
            None => f(&detached(), &self.elements),
        }
    }

    /// Runs `f` with the nested handler and the sub-fields, for writing.
    ///
    /// When the array is unbound, `f` sees an empty handler: every write is
    /// dropped.
    pub fn with_mut<H, R>(
        &mut self,
        outer: &mut H,
        f: impl FnOnce(&mut dyn FieldHandlerMut, &mut [T; N]) -> R,
    ) -> R
    where
        H: FieldHandlerMut + ?Sized,
    {
        match self.id {
            Some(id) => {
                let mut child =
                    IndexedHandler::new(&mut self.positions, ChildBuffer::new(outer, id));
                f(&mut child, &mut self.elements)
            }
            None => f(&mut detached(), &mut self.elements),
        }
    }
}

/// Handler with no ids and no bytes, standing in for an unbound array.
fn detached() -> IndexedHandler<FixedPositions<0>, FixedBuffer<0>> {
    IndexedHandler::new(FixedPositions::new(), FixedBuffer::new())
}

impl<T: Wire, const N: usize> FixedArray<ScalarField<T>, N> {
    /// Value of element `idx`, zero when out of range.
    pub fn get<H: FieldHandler + ?Sized>(&self, outer: &H, idx: usize) -> T {
        self.with(outer, |handler, elements| {
            elements.get(idx).map_or(T::ZERO, |e| e.get(handler))
        })
    }

    /// Writes element `idx`; out-of-range indexes are ignored.
    pub fn set<H: FieldHandlerMut + ?Sized>(&mut self, outer: &mut H, idx: usize, value: T) {
        self.with_mut(outer, |handler, elements| {
            if let Some(e) = elements.get(idx) {
                e.set(handler, value);
            }
        })
    }
}

impl<T: Field, const N: usize> Field for FixedArray<T, N> {
    /// Reserves the array's span in `outer` (as much of the existing bytes as
    /// the budget allows), initializes every sub-field with the shrinking
    /// budget, then records the summed length.
    fn init<H: FieldHandlerMut + ?Sized>(
        &mut self,
        outer: &mut H,
        id: FieldId,
        offset: usize,
        budget: usize,
    ) -> Result<usize, FieldError> {
        let visible = outer.bytes().len().saturating_sub(offset).min(budget);
        let buffer = ChildBuffer::attach(&mut *outer, id, offset, visible)?;
        let mut child = IndexedHandler::new(&mut self.positions, buffer);

        let mut consumed = 0;
        for (i, element) in self.elements.iter_mut().enumerate() {
            consumed += element.init(&mut child, i, consumed, budget.saturating_sub(consumed))?;
        }
        drop(child);

        outer.setup(id, offset, consumed)?;
        self.id = Some(id);
        Ok(consumed)
    }

    #[inline]
    fn id(&self) -> Option<FieldId> {
        self.id
    }
}

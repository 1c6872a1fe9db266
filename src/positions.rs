use crate::types::{FieldId, Position};

// ─── Traits ─────────────────────────────────────────────────────────────────

/// Read side of a set of field positions. Ids index into a slice.
pub trait PositionSet {
    fn as_slice(&self) -> &[Position];

    #[inline]
    fn contains(&self, id: FieldId) -> bool {
        id < self.as_slice().len()
    }

    #[inline]
    fn get(&self, id: FieldId) -> Option<&Position> {
        self.as_slice().get(id)
    }
}

/// Write side of a set of field positions.
pub trait PositionSetMut: PositionSet {
    fn as_mut_slice(&mut self) -> &mut [Position];

    /// Makes `id` addressable. Existing entries are left untouched.
    /// Returns false when the set cannot hold `id`.
    fn add(&mut self, id: FieldId) -> bool;

    #[inline]
    fn get_mut(&mut self, id: FieldId) -> Option<&mut Position> {
        self.as_mut_slice().get_mut(id)
    }
}

impl<T: PositionSet + ?Sized> PositionSet for &T {
    #[inline]
    fn as_slice(&self) -> &[Position] {
        (**self).as_slice()
    }
}

impl<T: PositionSet + ?Sized> PositionSet for &mut T {
    #[inline]
    fn as_slice(&self) -> &[Position] {
        (**self).as_slice()
    }
}

impl<T: PositionSetMut + ?Sized> PositionSetMut for &mut T {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Position] {
        (**self).as_mut_slice()
    }

    #[inline]
    fn add(&mut self, id: FieldId) -> bool {
        (**self).add(id)
    }
}

// ─── Fixed ──────────────────────────────────────────────────────────────────

/// `N` pre-allocated positions. Never reallocates; ids `>= N` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPositions<const N: usize> {
    slots: [Position; N],
}

impl<const N: usize> FixedPositions<N> {
    pub const fn new() -> Self {
        Self {
            slots: [Position::new(0, 0); N],
        }
    }
}

impl<const N: usize> Default for FixedPositions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PositionSet for FixedPositions<N> {
    #[inline]
    fn as_slice(&self) -> &[Position] {
        &self.slots
    }
}

impl<const N: usize> PositionSetMut for FixedPositions<N> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Position] {
        &mut self.slots
    }

    #[inline]
    fn add(&mut self, id: FieldId) -> bool {
        id < N
    }
}

// ─── Dynamic ────────────────────────────────────────────────────────────────

/// Positions that grow to `id + 1` entries on demand. Skipped ids are
/// zero until they are set up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicPositions {
    slots: Vec<Position>,
}

impl DynamicPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl PositionSet for DynamicPositions {
    #[inline]
    fn as_slice(&self) -> &[Position] {
        &self.slots
    }
}

impl PositionSetMut for DynamicPositions {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Position] {
        &mut self.slots
    }

    fn add(&mut self, id: FieldId) -> bool {
        if id >= self.slots.len() {
            self.slots.resize(id + 1, Position::default());
        }
        true
    }
}

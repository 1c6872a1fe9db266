use tracing::{debug, trace};

use super::{FieldHandler, FieldHandlerMut};
use crate::buffer::{Buffer, BufferMut, ChildBuffer};
use crate::error::FieldError;
use crate::positions::{PositionSet, PositionSetMut};
use crate::types::{FieldId, Position, Probe};

/// Field handler whose ids are indexes into its position set.
#[derive(Debug, Clone, Default)]
pub struct IndexedHandler<P, B> {
    positions: P,
    buffer: B,
}

/// Handler addressing the inside of a composite field. `P` is usually a
/// borrowed position set, `R` a borrowed outer handler.
pub type ChildHandler<P, R> = IndexedHandler<P, ChildBuffer<R>>;

impl<P, B> IndexedHandler<P, B> {
    pub fn new(positions: P, buffer: B) -> Self {
        Self { positions, buffer }
    }

    #[inline]
    pub fn positions(&self) -> &P {
        &self.positions
    }

    #[inline]
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn into_parts(self) -> (P, B) {
        (self.positions, self.buffer)
    }
}

/// True when field `i` at `p` sits after field `id` at `pos` and moves with
/// its end. Empty fields sharing an offset are ordered by id.
#[inline]
fn follows(id: FieldId, pos: Position, i: FieldId, p: &Position) -> bool {
    i != id && (pos.is_followed_by(p) || (i > id && p.offset == pos.end()))
}

impl<P: PositionSet, B> IndexedHandler<P, B> {
    /// Largest end boundary among every field except `id` and the empty
    /// fields that follow it.
    fn floor_excluding(&self, id: FieldId, pos: Position) -> usize {
        self.positions
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != id && !(p.length == 0 && follows(id, pos, i, p)))
            .map(|(_, p)| p.end())
            .max()
            .unwrap_or(0)
    }
}

impl<P: PositionSetMut, B> IndexedHandler<P, B> {
    /// After a splice at the end of `pos`, move every field after it.
    fn shift_following(&mut self, id: FieldId, pos: Position, grow: bool, n: usize) {
        for (i, p) in self.positions.as_mut_slice().iter_mut().enumerate() {
            if !follows(id, pos, i, p) {
                continue;
            }
            if grow {
                p.offset += n;
            } else {
                p.offset -= n;
            }
        }
    }
}

impl<P: PositionSet, B: Buffer> FieldHandler for IndexedHandler<P, B> {
    #[inline]
    fn contains(&self, id: FieldId) -> bool {
        self.positions.contains(id)
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.buffer.bytes()
    }

    fn data(&self, id: FieldId) -> &[u8] {
        let Some(pos) = self.positions.get(id) else {
            return &[];
        };
        let bytes = self.buffer.bytes();
        let end = pos.end().min(bytes.len());
        bytes.get(pos.offset..end).unwrap_or(&[])
    }

    #[inline]
    fn offset(&self, id: FieldId) -> usize {
        self.positions.get(id).map_or(0, |p| p.offset)
    }

    #[inline]
    fn length(&self, id: FieldId) -> usize {
        self.positions.get(id).map_or(0, |p| p.length)
    }

    fn capacity(&self, id: FieldId) -> usize {
        let Some(pos) = self.positions.get(id) else {
            return 0;
        };
        let room = self.buffer.capacity().saturating_sub(self.buffer.length());
        pos.length.saturating_add(room)
    }
}

impl<P: PositionSetMut, B: BufferMut> FieldHandlerMut for IndexedHandler<P, B> {
    fn setup(&mut self, id: FieldId, offset: usize, length: usize) -> Result<(), FieldError> {
        if !self.positions.contains(id) && !self.positions.add(id) {
            debug!(id, offset, length, "setup rejected: id out of range");
            return Err(FieldError::IdOutOfRange {
                id,
                bound: self.positions.as_slice().len(),
            });
        }
        let Some(required) = offset.checked_add(length) else {
            debug!(id, offset, length, "setup rejected: span overflows");
            return Err(FieldError::SetupOverflow {
                id,
                required: usize::MAX,
                feasible: self.buffer.capacity(),
            });
        };
        if self.buffer.length() < required {
            if let Probe::Rejected { feasible } = self.buffer.resize(required) {
                debug!(id, offset, length, feasible, "setup could not grow buffer, bad packet definition?");
                return Err(FieldError::SetupOverflow {
                    id,
                    required,
                    feasible,
                });
            }
        }
        if let Some(pos) = self.positions.get_mut(id) {
            *pos = Position::new(offset, length);
        }
        trace!(id, offset, length, "field set up");
        Ok(())
    }

    fn data_mut(&mut self, id: FieldId) -> &mut [u8] {
        let Some(pos) = self.positions.get(id).copied() else {
            return &mut [];
        };
        let bytes = self.buffer.bytes_mut();
        let end = pos.end().min(bytes.len());
        bytes.get_mut(pos.offset..end).unwrap_or(&mut [])
    }

    fn insert(&mut self, id: FieldId, offset: usize, n: usize) -> Probe {
        let Some(pos) = self.positions.get(id).copied() else {
            return Probe::Rejected { feasible: 0 };
        };
        if offset > pos.length {
            return Probe::Rejected { feasible: 0 };
        }
        let probe = self.buffer.insert(pos.offset + offset, n);
        if probe.is_applied() {
            self.shift_following(id, pos, true, n);
            if let Some(p) = self.positions.get_mut(id) {
                p.length += n;
            }
        }
        probe
    }

    fn remove(&mut self, id: FieldId, offset: usize, n: usize) -> Probe {
        let Some(pos) = self.positions.get(id).copied() else {
            return Probe::Rejected { feasible: 0 };
        };
        let within = offset.checked_add(n).is_some_and(|end| end <= pos.length);
        if !within {
            return Probe::Rejected {
                feasible: pos.length.saturating_sub(offset),
            };
        }
        let probe = self.buffer.remove(pos.offset + offset, n);
        if probe.is_applied() {
            self.shift_following(id, pos, false, n);
            if let Some(p) = self.positions.get_mut(id) {
                p.length -= n;
            }
        }
        probe
    }

    fn resize(&mut self, id: FieldId, size: usize) -> Probe {
        let Some(pos) = self.positions.get(id).copied() else {
            return Probe::Rejected { feasible: 0 };
        };
        if size == pos.length {
            return Probe::Applied(size);
        }
        let floor = self.floor_excluding(id, pos);
        if floor > pos.end() {
            debug!(id, size, floor, "resize rejected: field is not trailing");
            return Probe::Rejected {
                feasible: pos.length,
            };
        }
        // Never cut into another field.
        let min = floor.saturating_sub(pos.offset);
        if size < min {
            return Probe::Rejected { feasible: min };
        }

        let target = pos.offset.saturating_add(size);
        let current = self.buffer.length();
        // Growing into bytes that are already present needs no reallocation.
        if target > current || (size < pos.length && target < current) {
            let probe = self
                .buffer
                .resize(target)
                .map(|n| n.saturating_sub(pos.offset));
            if !probe.is_applied() {
                debug!(id, size, feasible = probe.amount(), "resize rejected by buffer");
                return probe;
            }
        }
        if let Some(p) = self.positions.get_mut(id) {
            p.length = size;
        }
        // Empty fields parked at the old end move to the new one.
        if size > pos.length {
            self.shift_following(id, pos, true, size - pos.length);
        } else {
            self.shift_following(id, pos, false, pos.length - size);
        }
        Probe::Applied(size)
    }
}

use super::Field;
use crate::error::FieldError;
use crate::handler::FieldHandlerMut;
use crate::types::FieldId;

/// Forward-only cursor that places fields back to back.
///
/// Each appended field gets the next id, starts where the previous one
/// ended, and may take whatever is left of the budget. Because offsets only
/// ever move forward, the last appended field is always the trailing one
/// and the only one a later `resize` will honor.
///
/// ```rust
/// use packet_fields::field::{DynString, Layout, LongField, WordField};
/// use packet_fields::packet::FixedPacket;
///
/// let mut packet = FixedPacket::<3, 64>::new();
/// let (mut kind, mut account, mut name) = (WordField::new(), LongField::new(), DynString::new());
///
/// let mut layout = packet.layout();
/// layout.append(&mut kind).unwrap();
/// layout.append(&mut account).unwrap();
/// layout.append(&mut name).unwrap();
/// assert_eq!(layout.offset(), 7);
///
/// kind.set(&mut packet, 0x0064);
/// name.set(&mut packet, "ok").unwrap();
/// assert_eq!(packet.data(), &[0x64, 0x00, 0, 0, 0, 0, b'o', b'k', 0]);
/// ```
pub struct Layout<'h, H: ?Sized> {
    handler: &'h mut H,
    next_id: FieldId,
    offset: usize,
    budget: usize,
}

impl<'h, H: FieldHandlerMut + ?Sized> Layout<'h, H> {
    /// Starts at id 0, offset 0, with `budget` bytes in total.
    pub fn new(handler: &'h mut H, budget: usize) -> Self {
        Self::starting_at(handler, 0, 0, budget)
    }

    pub fn starting_at(handler: &'h mut H, first_id: FieldId, offset: usize, budget: usize) -> Self {
        Self {
            handler,
            next_id: first_id,
            offset,
            budget,
        }
    }

    /// Initializes `field` at the cursor and moves past it.
    /// Returns the field's length.
    pub fn append<F: Field>(&mut self, field: &mut F) -> Result<usize, FieldError> {
        let remaining = self.budget.saturating_sub(self.offset);
        let length = field.init(&mut *self.handler, self.next_id, self.offset, remaining)?;
        self.next_id += 1;
        self.offset += length;
        Ok(length)
    }

    /// Leaves `count` ids unassigned. Skipped ids read as empty fields.
    pub fn skip_ids(&mut self, count: usize) -> &mut Self {
        self.next_id += count;
        self
    }

    /// Where the next field will start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_id(&self) -> FieldId {
        self.next_id
    }

    /// Bytes still available to later fields.
    pub fn remaining(&self) -> usize {
        self.budget.saturating_sub(self.offset)
    }
}

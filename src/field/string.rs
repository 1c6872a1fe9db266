use tracing::debug;

use super::Field;
use crate::error::FieldError;
use crate::handler::{FieldHandler, FieldHandlerMut};
use crate::types::{FieldId, Probe};

/// Bytes before the first NUL.
#[inline]
fn until_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

// ─── FixedString ────────────────────────────────────────────────────────────

/// String of exactly `N` bytes, zero-padded.
///
/// Not NUL-terminated when the content fills all `N` bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedString<const N: usize> {
    id: Option<FieldId>,
}

impl<const N: usize> FixedString<N> {
    pub const fn new() -> Self {
        Self { id: None }
    }

    /// Content bytes, without padding.
    pub fn bytes<'h, H: FieldHandler + ?Sized>(&self, handler: &'h H) -> &'h [u8] {
        match self.id {
            Some(id) => until_nul(handler.data(id)),
            None => &[],
        }
    }

    /// `None` when the content is not valid UTF-8.
    pub fn to_str<'h, H: FieldHandler + ?Sized>(&self, handler: &'h H) -> Option<&'h str> {
        std::str::from_utf8(self.bytes(handler)).ok()
    }

    pub fn length<H: FieldHandler + ?Sized>(&self, handler: &H) -> usize {
        self.bytes(handler).len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Writes `value`, silently truncated to `N` bytes.
    pub fn set<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, value: &str) {
        self.copy(handler, value.as_bytes(), N);
    }

    /// Writes at most `min(N, max)` bytes of `value` and zero-pads the rest
    /// of that span. Bytes past the span are left alone.
    pub fn copy<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, value: &[u8], max: usize) {
        let Some(id) = self.id else {
            return;
        };
        let out = handler.data_mut(id);
        let span = N.min(max).min(out.len());
        let content = until_nul(value);
        let n = content.len().min(span);
        out[..n].copy_from_slice(&content[..n]);
        out[n..span].fill(0);
    }

    /// Copies all `N` raw bytes of `other`, which lives on the same handler.
    pub fn assign_from<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, other: &Self) {
        let (Some(id), Some(src_id)) = (self.id, other.id) else {
            return;
        };
        let mut raw = [0u8; N];
        let src = handler.data(src_id);
        let n = src.len().min(N);
        raw[..n].copy_from_slice(&src[..n]);
        let out = handler.data_mut(id);
        let m = out.len().min(N);
        out[..m].copy_from_slice(&raw[..m]);
    }
}

impl<const N: usize> Field for FixedString<N> {
    fn init<H: FieldHandlerMut + ?Sized>(
        &mut self,
        handler: &mut H,
        id: FieldId,
        offset: usize,
        _budget: usize,
    ) -> Result<usize, FieldError> {
        handler.setup(id, offset, N)?;
        self.id = Some(id);
        Ok(N)
    }

    #[inline]
    fn id(&self) -> Option<FieldId> {
        self.id
    }
}

// ─── DynString ──────────────────────────────────────────────────────────────

/// NUL-terminated string whose field length is its content length plus one.
///
/// Every write resizes the field, so it must be the trailing field of its
/// handler whenever the content length changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynString {
    id: Option<FieldId>,
}

impl DynString {
    pub const fn new() -> Self {
        Self { id: None }
    }

    /// Content bytes, without the terminator.
    pub fn bytes<'h, H: FieldHandler + ?Sized>(&self, handler: &'h H) -> &'h [u8] {
        match self.id {
            Some(id) => until_nul(handler.data(id)),
            None => &[],
        }
    }

    /// `None` when the content is not valid UTF-8.
    pub fn to_str<'h, H: FieldHandler + ?Sized>(&self, handler: &'h H) -> Option<&'h str> {
        std::str::from_utf8(self.bytes(handler)).ok()
    }

    /// Content length; the terminator is not counted.
    pub fn length<H: FieldHandler + ?Sized>(&self, handler: &H) -> usize {
        self.id
            .map_or(0, |id| handler.length(id).saturating_sub(1))
    }

    /// Longest content the field can grow to.
    pub fn capacity<H: FieldHandler + ?Sized>(&self, handler: &H) -> usize {
        self.id
            .map_or(0, |id| handler.capacity(id).saturating_sub(1))
    }

    pub fn set<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, value: &str) -> Result<(), FieldError> {
        self.copy(handler, value.as_bytes(), usize::MAX)
    }

    /// Writes at most `max` bytes of `value` (up to its first NUL) and
    /// resizes the field to fit them plus the terminator.
    pub fn copy<H: FieldHandlerMut + ?Sized>(
        &self,
        handler: &mut H,
        value: &[u8],
        max: usize,
    ) -> Result<(), FieldError> {
        let Some(id) = self.id else {
            return Ok(());
        };
        let content = until_nul(value);
        let n = content.len().min(max);
        let required = n + 1;

        if let Probe::Rejected { feasible } = handler.resize(id, required) {
            return Err(FieldError::ResizeRejected {
                id,
                requested: required,
                feasible,
            });
        }
        let out = handler.data_mut(id);
        if out.len() < required {
            return Err(FieldError::ResizeRejected {
                id,
                requested: required,
                feasible: out.len(),
            });
        }
        out[..n].copy_from_slice(&content[..n]);
        out[n] = 0;
        Ok(())
    }

    /// Copies the content of `other`, which lives on the same handler.
    pub fn assign_from<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, other: &DynString) -> Result<(), FieldError> {
        if !other.is_bound() {
            return Ok(());
        }
        let content = other.bytes(&*handler).to_vec();
        self.copy(handler, &content, usize::MAX)
    }
}

impl Field for DynString {
    /// Measures existing bytes at `offset`: the terminated run within
    /// `budget`, or just the terminator when there are none. A run that fills
    /// the whole budget gets its last byte replaced by the terminator.
    fn init<H: FieldHandlerMut + ?Sized>(
        &mut self,
        handler: &mut H,
        id: FieldId,
        offset: usize,
        budget: usize,
    ) -> Result<usize, FieldError> {
        let budget = budget.max(1);
        let available = handler.bytes().get(offset..).unwrap_or(&[]);
        let window = &available[..available.len().min(budget)];

        let (length, force_terminator) = match window.iter().position(|&b| b == 0) {
            Some(nul) => (nul + 1, false),
            None if window.is_empty() => (1, false),
            None if window.len() == budget => (budget, true),
            // Runs off the end of the buffer; setup appends a zero byte.
            None => (window.len() + 1, false),
        };

        handler.setup(id, offset, length)?;
        if force_terminator {
            debug!(id, offset, budget, "unterminated string cut to budget");
            if let Some(last) = handler.data_mut(id).last_mut() {
                *last = 0;
            }
        }
        self.id = Some(id);
        Ok(length)
    }

    #[inline]
    fn id(&self) -> Option<FieldId> {
        self.id
    }
}

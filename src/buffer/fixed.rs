use arrayvec::ArrayVec;
use std::iter;
use tracing::{debug, warn};

use super::{Buffer, BufferMut};
use crate::types::Probe;

/// Buffer backed by exactly `C` bytes of inline storage.
#[derive(Debug, Clone, Default)]
pub struct FixedBuffer<const C: usize> {
    buf: ArrayVec<u8, C>,
}

impl<const C: usize> FixedBuffer<C> {
    pub fn new() -> Self {
        Self {
            buf: ArrayVec::new(),
        }
    }

    /// Copies inbound bytes. Anything past `C` is dropped.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let keep = bytes.len().min(C);
        if keep < bytes.len() {
            warn!(
                received = bytes.len(),
                capacity = C,
                "inbound bytes truncated to fixed buffer capacity"
            );
        }
        let mut buf = ArrayVec::new();
        buf.extend(bytes[..keep].iter().copied());
        Self { buf }
    }
}

impl<const C: usize> Buffer for FixedBuffer<C> {
    #[inline]
    fn bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    fn capacity(&self) -> usize {
        C
    }
}

impl<const C: usize> BufferMut for FixedBuffer<C> {
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn insert(&mut self, offset: usize, n: usize) -> Probe {
        let len = self.buf.len();
        if offset > len {
            return Probe::Rejected { feasible: 0 };
        }
        let room = C - len;
        if n > room {
            debug!(offset, n, room, "fixed buffer insert rejected");
            return Probe::Rejected { feasible: room };
        }
        self.buf.extend(iter::repeat_n(0u8, n));
        // Shift tail right
        self.buf.copy_within(offset..len, offset + n);
        self.buf[offset..offset + n].fill(0);
        Probe::Applied(n)
    }

    fn remove(&mut self, offset: usize, n: usize) -> Probe {
        let len = self.buf.len();
        match offset.checked_add(n) {
            Some(end) if end <= len => {
                self.buf.drain(offset..end);
                Probe::Applied(n)
            }
            _ => Probe::Rejected {
                feasible: len.saturating_sub(offset),
            },
        }
    }

    fn resize(&mut self, size: usize) -> Probe {
        if size > C {
            debug!(size, capacity = C, "fixed buffer resize rejected");
            return Probe::Rejected { feasible: C };
        }
        let len = self.buf.len();
        if size < len {
            self.buf.truncate(size);
        } else {
            self.buf.extend(iter::repeat_n(0u8, size - len));
        }
        Probe::Applied(size)
    }
}

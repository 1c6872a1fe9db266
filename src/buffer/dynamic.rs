use std::iter;
use tracing::debug;

use super::{Buffer, BufferMut};
use crate::config::BufferConfig;
use crate::types::Probe;

/// Heap buffer that grows on demand up to `max_length`.
#[derive(Debug, Clone)]
pub struct DynamicBuffer {
    buf: Vec<u8>,
    max_length: usize,
}

impl DynamicBuffer {
    pub fn new() -> Self {
        Self::with_config(&BufferConfig::default())
    }

    pub fn with_config(config: &BufferConfig) -> Self {
        Self {
            buf: Vec::with_capacity(config.initial_capacity),
            max_length: config.max_length,
        }
    }

    /// Takes ownership of inbound bytes. The ceiling is raised to fit them
    /// so that no received byte is lost.
    pub fn from_vec(buf: Vec<u8>, config: &BufferConfig) -> Self {
        let max_length = config.max_length.max(buf.len());
        Self { buf, max_length }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for DynamicBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer for DynamicBuffer {
    #[inline]
    fn bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.max_length
    }
}

impl BufferMut for DynamicBuffer {
    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn insert(&mut self, offset: usize, n: usize) -> Probe {
        let len = self.buf.len();
        if offset > len {
            return Probe::Rejected { feasible: 0 };
        }
        let room = self.max_length.saturating_sub(len);
        if n > room {
            debug!(offset, n, room, "dynamic buffer insert rejected");
            return Probe::Rejected { feasible: room };
        }
        self.buf.splice(offset..offset, iter::repeat_n(0u8, n));
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
        if size > self.max_length {
            debug!(size, max_length = self.max_length, "dynamic buffer resize rejected");
            return Probe::Rejected {
                feasible: self.max_length,
            };
        }
        self.buf.resize(size, 0);
        Probe::Applied(size)
    }
}

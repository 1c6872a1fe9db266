//! Packets: the only owners of bytes in the whole field graph.
//!
//! A packet owns one root buffer and one field handler. Transport code only
//! ever sees [`Packet::data`] and [`Packet::length`]; fields reach the bytes
//! through the handler traits the packet implements.
//!
//! | Alias               | Positions           | Buffer                      |
//! |---------------------|---------------------|-----------------------------|
//! | [`FixedPacket`]     | `FixedPositions<NUM>` | `FixedBuffer<SZ>` (inline)|
//! | [`BoundedPacket`]   | `DynamicPositions`  | `FixedBuffer<SZ>` (inline)  |
//! | [`DynamicPacket`]   | `DynamicPositions`  | `DynamicBuffer` (heap)      |

use crate::buffer::{Buffer, BufferMut, DynamicBuffer, FixedBuffer};
use crate::config::BufferConfig;
use crate::error::FieldError;
use crate::field::Layout;
use crate::handler::{FieldHandler, FieldHandlerMut, IndexedHandler};
use crate::positions::{DynamicPositions, FixedPositions, PositionSet, PositionSetMut};
use crate::types::{CLIENT_PACKET_MAX, FieldId, Probe};

#[derive(Debug, Clone, Default)]
pub struct Packet<P, B> {
    handler: IndexedHandler<P, B>,
}

/// `NUM` fields over at most `SZ` bytes of inline storage.
pub type FixedPacket<const NUM: usize, const SZ: usize = CLIENT_PACKET_MAX> =
    Packet<FixedPositions<NUM>, FixedBuffer<SZ>>;

/// Any number of fields over at most `SZ` bytes of inline storage.
pub type BoundedPacket<const SZ: usize = CLIENT_PACKET_MAX> = Packet<DynamicPositions, FixedBuffer<SZ>>;

/// Any number of fields over a heap buffer that grows on demand.
pub type DynamicPacket = Packet<DynamicPositions, DynamicBuffer>;

impl<P: Default, const SZ: usize> Packet<P, FixedBuffer<SZ>> {
    pub fn new() -> Self {
        Self {
            handler: IndexedHandler::new(P::default(), FixedBuffer::new()),
        }
    }

    /// Copies received bytes; anything past `SZ` is dropped.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            handler: IndexedHandler::new(P::default(), FixedBuffer::from_bytes(bytes)),
        }
    }
}

impl<P: Default> Packet<P, DynamicBuffer> {
    pub fn new() -> Self {
        Self::with_config(&BufferConfig::default())
    }

    pub fn with_config(config: &BufferConfig) -> Self {
        Self {
            handler: IndexedHandler::new(P::default(), DynamicBuffer::with_config(config)),
        }
    }

    /// Copies received bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec(), &BufferConfig::default())
    }

    /// Takes ownership of received bytes.
    pub fn from_vec(bytes: Vec<u8>, config: &BufferConfig) -> Self {
        Self {
            handler: IndexedHandler::new(P::default(), DynamicBuffer::from_vec(bytes, config)),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        let (_, buffer) = self.handler.into_parts();
        buffer.into_vec()
    }
}

impl<P, B: Buffer> Packet<P, B> {
    /// Raw bytes, ready to hand to a transport.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.handler.buffer().bytes()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.handler.buffer().length()
    }

    /// Largest length the packet can reach.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.handler.buffer().capacity()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.data().to_vec()
    }

    pub fn handler(&self) -> &IndexedHandler<P, B> {
        &self.handler
    }
}

impl<P: PositionSetMut, B: BufferMut> Packet<P, B> {
    /// Cursor for placing fields from id 0, offset 0, with the whole
    /// capacity as budget.
    pub fn layout(&mut self) -> Layout<'_, Self> {
        let budget = self.capacity();
        Layout::new(self, budget)
    }
}

impl<P: PositionSet, B: Buffer> FieldHandler for Packet<P, B> {
    #[inline]
    fn contains(&self, id: FieldId) -> bool {
        self.handler.contains(id)
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.handler.bytes()
    }

    #[inline]
    fn data(&self, id: FieldId) -> &[u8] {
        self.handler.data(id)
    }

    #[inline]
    fn offset(&self, id: FieldId) -> usize {
        self.handler.offset(id)
    }

    #[inline]
    fn length(&self, id: FieldId) -> usize {
        self.handler.length(id)
    }

    #[inline]
    fn capacity(&self, id: FieldId) -> usize {
        self.handler.capacity(id)
    }
}

impl<P: PositionSetMut, B: BufferMut> FieldHandlerMut for Packet<P, B> {
    #[inline]
    fn setup(&mut self, id: FieldId, offset: usize, length: usize) -> Result<(), FieldError> {
        self.handler.setup(id, offset, length)
    }

    #[inline]
    fn data_mut(&mut self, id: FieldId) -> &mut [u8] {
        self.handler.data_mut(id)
    }

    #[inline]
    fn insert(&mut self, id: FieldId, offset: usize, n: usize) -> Probe {
        self.handler.insert(id, offset, n)
    }

    #[inline]
    fn remove(&mut self, id: FieldId, offset: usize, n: usize) -> Probe {
        self.handler.remove(id, offset, n)
    }

    #[inline]
    fn resize(&mut self, id: FieldId, size: usize) -> Probe {
        self.handler.resize(id, size)
    }
}

use std::marker::PhantomData;
use std::net::Ipv4Addr;

use super::Field;
use crate::error::FieldError;
use crate::handler::{FieldHandler, FieldHandlerMut};
use crate::types::FieldId;

// ─── Wire encoding ──────────────────────────────────────────────────────────

/// Fixed-width value with an exact byte layout, independent of host order.
pub trait Wire: Copy {
    const WIDTH: usize;
    const ZERO: Self;

    /// `bytes` is exactly `WIDTH` long.
    fn decode(bytes: &[u8]) -> Self;

    /// `out` is exactly `WIDTH` long.
    fn encode(self, out: &mut [u8]);
}

impl Wire for u8 {
    const WIDTH: usize = 1;
    const ZERO: Self = 0;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self;
    }
}

impl Wire for u16 {
    const WIDTH: usize = 2;
    const ZERO: Self = 0;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl Wire for u32 {
    const WIDTH: usize = 4;
    const ZERO: Self = 0;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl Wire for u64 {
    const WIDTH: usize = 8;
    const ZERO: Self = 0;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        let mut le = [0u8; 8];
        le.copy_from_slice(bytes);
        u64::from_le_bytes(le)
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

/// IPv4 addresses travel in network byte order.
impl Wire for Ipv4Addr {
    const WIDTH: usize = 4;
    const ZERO: Self = Ipv4Addr::UNSPECIFIED;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.octets());
    }
}

// ─── ScalarField ────────────────────────────────────────────────────────────

/// Fixed-length field holding one [`Wire`] value.
#[derive(Debug)]
pub struct ScalarField<T> {
    id: Option<FieldId>,
    _value: PhantomData<T>,
}

pub type ByteField = ScalarField<u8>;
pub type WordField = ScalarField<u16>;
pub type LongField = ScalarField<u32>;
pub type QuadField = ScalarField<u64>;
pub type Ipv4Field = ScalarField<Ipv4Addr>;

impl<T> ScalarField<T> {
    pub const fn new() -> Self {
        Self {
            id: None,
            _value: PhantomData,
        }
    }
}

impl<T> Default for ScalarField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScalarField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarField<T> {}

impl<T: Wire> ScalarField<T> {
    pub fn get<H: FieldHandler + ?Sized>(&self, handler: &H) -> T {
        let Some(id) = self.id else {
            return T::ZERO;
        };
        match handler.data(id).get(..T::WIDTH) {
            Some(bytes) => T::decode(bytes),
            None => T::ZERO,
        }
    }

    pub fn set<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, value: T) {
        let Some(id) = self.id else {
            return;
        };
        if let Some(out) = handler.data_mut(id).get_mut(..T::WIDTH) {
            value.encode(out);
        }
    }

    /// Copies the value of `other`, which lives on the same handler.
    pub fn assign_from<H: FieldHandlerMut + ?Sized>(&self, handler: &mut H, other: &Self) {
        if other.is_bound() {
            let value = other.get(&*handler);
            self.set(handler, value);
        }
    }
}

impl<T: Wire> Field for ScalarField<T> {
    fn init<H: FieldHandlerMut + ?Sized>(
        &mut self,
        handler: &mut H,
        id: FieldId,
        offset: usize,
        _budget: usize,
    ) -> Result<usize, FieldError> {
        handler.setup(id, offset, T::WIDTH)?;
        self.id = Some(id);
        Ok(T::WIDTH)
    }

    #[inline]
    fn id(&self) -> Option<FieldId> {
        self.id
    }
}

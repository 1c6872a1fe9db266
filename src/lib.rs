//! Zero-copy typed fields over binary packet buffers.
//!
//! A [`packet::Packet`] owns one byte buffer. Fields ([`field::WordField`],
//! [`field::DynString`], [`field::FixedArray`], ...) own no bytes: each is
//! bound to an id in the packet's field handler and reads or writes the
//! packet's buffer in place. Composite fields address their sub-fields
//! through nested handlers whose buffers forward to the parent field, so
//! growing an element moves the packet's trailing end.
//!
//! ```rust
//! use packet_fields::field::{DynString, Field, LongField, WordField};
//! use packet_fields::packet::FixedPacket;
//!
//! let mut out = FixedPacket::<3>::new();
//! let (mut kind, mut account, mut name) = (WordField::new(), LongField::new(), DynString::new());
//! let budget = out.capacity();
//! kind.init(&mut out, 0, 0, budget).unwrap();
//! account.init(&mut out, 1, 2, budget - 2).unwrap();
//! name.init(&mut out, 2, 6, budget - 6).unwrap();
//! kind.set(&mut out, 7);
//! account.set(&mut out, 42);
//! name.set(&mut out, "ok").unwrap();
//!
//! let mut inbound = FixedPacket::<3>::from_bytes(out.data());
//! let (mut kind, mut account, mut name) = (WordField::new(), LongField::new(), DynString::new());
//! let mut layout = inbound.layout();
//! layout.append(&mut kind).unwrap();
//! layout.append(&mut account).unwrap();
//! layout.append(&mut name).unwrap();
//!
//! assert_eq!(kind.get(&inbound), 7);
//! assert_eq!(account.get(&inbound), 42);
//! assert_eq!(name.to_str(&inbound), Some("ok"));
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod field;
pub mod handler;
pub mod packet;
pub mod positions;
pub mod types;

pub use buffer::{Buffer, BufferMut, ChildBuffer, DynamicBuffer, FixedBuffer};
pub use config::BufferConfig;
pub use error::FieldError;
pub use field::{
    ByteField, DynString, Field, FieldState, FixedArray, FixedString, Ipv4Field, Layout, LongField, QuadField,
    ScalarField, WordField,
};
pub use handler::{ChildHandler, FieldHandler, FieldHandlerMut, IndexedHandler};
pub use packet::{BoundedPacket, DynamicPacket, FixedPacket, Packet};
pub use positions::{DynamicPositions, FixedPositions, PositionSet, PositionSetMut};
pub use types::{CLIENT_PACKET_MAX, FieldId, Position, Probe};

//! Property-based tests using proptest
//!
//! These tests check field and handler invariants across randomly generated
//! values and mutation sequences.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use packet_fields::buffer::{Buffer, BufferMut, DynamicBuffer, FixedBuffer};
use packet_fields::field::{DynString, Field, FixedString, Layout, LongField, QuadField, WordField};
use packet_fields::handler::{FieldHandler, FieldHandlerMut};
use packet_fields::packet::{BoundedPacket, DynamicPacket};
use proptest::prelude::*;

/// Strings without an embedded terminator.
fn wire_string(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(1u8..=127, 0..max).prop_map(|bytes| String::from_utf8(bytes).unwrap())
}

#[derive(Debug, Clone)]
enum Op {
    Insert { id: usize, offset: usize, n: usize },
    Remove { id: usize, offset: usize, n: usize },
    Resize { size: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3usize, 0..8usize, 0..6usize).prop_map(|(id, offset, n)| Op::Insert { id, offset, n }),
        (0..3usize, 0..8usize, 0..6usize).prop_map(|(id, offset, n)| Op::Remove { id, offset, n }),
        (0..12usize).prop_map(|size| Op::Resize { size }),
    ]
}

// Property: scalars survive a trip through the wire bytes
proptest! {
    #[test]
    fn prop_scalar_roundtrip(word in any::<u16>(), long in any::<u32>(), quad in any::<u64>()) {
        let mut out = BoundedPacket::<32>::new();
        let (mut w, mut l, mut q) = (WordField::new(), LongField::new(), QuadField::new());
        {
            let mut layout = out.layout();
            layout.append(&mut w).unwrap();
            layout.append(&mut l).unwrap();
            layout.append(&mut q).unwrap();
        }
        w.set(&mut out, word);
        l.set(&mut out, long);
        q.set(&mut out, quad);

        let mut inbound = BoundedPacket::<32>::from_bytes(out.data());
        let (mut w, mut l, mut q) = (WordField::new(), LongField::new(), QuadField::new());
        let mut layout = inbound.layout();
        layout.append(&mut w).unwrap();
        layout.append(&mut l).unwrap();
        layout.append(&mut q).unwrap();

        prop_assert_eq!(w.get(&inbound), word);
        prop_assert_eq!(l.get(&inbound), long);
        prop_assert_eq!(q.get(&inbound), quad);
    }
}

// Property: a trailing string is read back exactly, and its field length is
// its content length plus the terminator
proptest! {
    #[test]
    fn prop_dyn_string_roundtrip(head in any::<u16>(), text in wire_string(300)) {
        let mut out = DynamicPacket::new();
        let (mut w, mut s) = (WordField::new(), DynString::new());
        {
            let mut layout = out.layout();
            layout.append(&mut w).unwrap();
            layout.append(&mut s).unwrap();
        }
        w.set(&mut out, head);
        s.set(&mut out, &text).unwrap();
        prop_assert_eq!(out.length(), 2 + text.len() + 1);

        let mut inbound = DynamicPacket::from_bytes(out.data());
        let (mut w, mut s) = (WordField::new(), DynString::new());
        let mut layout = inbound.layout();
        layout.append(&mut w).unwrap();
        layout.append(&mut s).unwrap();

        prop_assert_eq!(w.get(&inbound), head);
        prop_assert_eq!(s.to_str(&inbound), Some(text.as_str()));
        prop_assert_eq!(s.length(&inbound), text.len());
    }
}

// Property: a fixed string keeps a prefix of at most N bytes and never
// changes the packet length
proptest! {
    #[test]
    fn prop_fixed_string_truncates(text in wire_string(40)) {
        let mut out = BoundedPacket::<16>::new();
        let mut s = FixedString::<8>::new();
        out.layout().append(&mut s).unwrap();
        s.set(&mut out, &text);

        let keep = text.len().min(8);
        prop_assert_eq!(s.bytes(&out), &text.as_bytes()[..keep]);
        prop_assert_eq!(out.length(), 8);
    }
}

// Property: insert, remove and resize keep adjacent fields adjacent and the
// buffer exactly as long as the fields it holds
proptest! {
    #[test]
    fn prop_splices_keep_fields_contiguous(ops in prop::collection::vec(op(), 0..40)) {
        let mut packet = BoundedPacket::<24>::new();
        packet.setup(0, 0, 2).unwrap();
        packet.setup(1, 2, 3).unwrap();
        packet.setup(2, 5, 1).unwrap();

        for op in ops {
            let before = packet.length();
            let probe = match op {
                Op::Insert { id, offset, n } => packet.insert(id, offset, n),
                Op::Remove { id, offset, n } => packet.remove(id, offset, n),
                Op::Resize { size } => FieldHandlerMut::resize(&mut packet, 2, size),
            };
            if !probe.is_applied() {
                prop_assert_eq!(packet.length(), before);
            }

            prop_assert_eq!(packet.offset(0), 0);
            prop_assert_eq!(packet.offset(1), FieldHandler::length(&packet, 0));
            prop_assert_eq!(packet.offset(2), packet.offset(1) + FieldHandler::length(&packet, 1));
            prop_assert_eq!(packet.offset(2) + FieldHandler::length(&packet, 2), packet.length());
            prop_assert!(packet.length() <= 24);
        }
    }
}

// Property: both buffer backends agree while under their ceiling
proptest! {
    #[test]
    fn prop_backends_agree(
        seed in prop::collection::vec(any::<u8>(), 0..16),
        ops in prop::collection::vec((0..3u8, 0..20usize, 0..8usize), 0..30),
    ) {
        let mut fixed = FixedBuffer::<64>::from_bytes(&seed);
        let mut dynamic = DynamicBuffer::from_vec(seed.clone(), &packet_fields::BufferConfig::new(16, 64).unwrap());

        for (kind, offset, n) in ops {
            let (a, b) = match kind {
                0 => (fixed.insert(offset, n), dynamic.insert(offset, n)),
                1 => (fixed.remove(offset, n), dynamic.remove(offset, n)),
                _ => (fixed.resize(offset), dynamic.resize(offset)),
            };
            prop_assert_eq!(a, b);
            prop_assert_eq!(fixed.bytes(), dynamic.bytes());
        }
    }
}

// Property: a layout always ends where the summed field lengths end
proptest! {
    #[test]
    fn prop_layout_offsets_sum(count in 1usize..6, text in wire_string(20)) {
        let mut packet = DynamicPacket::new();
        let mut words = vec![WordField::new(); count];
        let mut tail = DynString::new();
        let mut layout = Layout::new(&mut packet, 256);
        for w in words.iter_mut() {
            layout.append(w).unwrap();
        }
        layout.append(&mut tail).unwrap();
        prop_assert_eq!(layout.offset(), 2 * count + 1);
        prop_assert_eq!(layout.next_id(), count + 1);

        tail.set(&mut packet, &text).unwrap();
        prop_assert_eq!(tail.id().map(|id| packet.offset(id)), Some(2 * count));
        prop_assert_eq!(packet.length(), 2 * count + text.len() + 1);
    }
}

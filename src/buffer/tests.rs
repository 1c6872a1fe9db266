mod buffer_tests {
    use crate::buffer::{Buffer, BufferMut, DynamicBuffer, FixedBuffer};
    use crate::config::BufferConfig;
    use crate::types::Probe;

    // ═══════════════════════════════════════════════════════════════════════
    // FixedBuffer
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_fixed_from_bytes_truncates() {
        let buf = FixedBuffer::<4>::from_bytes(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.bytes(), &[1, 2, 3, 4]);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_fixed_insert_shifts_tail_right() {
        let mut buf = FixedBuffer::<8>::from_bytes(&[1, 2, 3]);
        assert_eq!(buf.insert(1, 2), Probe::Applied(2));
        assert_eq!(buf.bytes(), &[1, 0, 0, 2, 3]);
    }

    #[test]
    fn test_fixed_insert_reports_room() {
        let mut buf = FixedBuffer::<4>::from_bytes(&[1, 2, 3]);
        assert_eq!(buf.insert(0, 2), Probe::Rejected { feasible: 1 });
        assert_eq!(buf.bytes(), &[1, 2, 3]);
        assert_eq!(buf.insert(5, 1), Probe::Rejected { feasible: 0 });
    }

    #[test]
    fn test_fixed_remove_shifts_tail_left() {
        let mut buf = FixedBuffer::<8>::from_bytes(&[1, 2, 3, 4]);
        assert_eq!(buf.remove(1, 2), Probe::Applied(2));
        assert_eq!(buf.bytes(), &[1, 4]);
        assert_eq!(buf.remove(1, 5), Probe::Rejected { feasible: 1 });
    }

    #[test]
    fn test_fixed_resize_reports_ceiling() {
        let mut buf = FixedBuffer::<4>::new();
        assert_eq!(buf.resize(9), Probe::Rejected { feasible: 4 });
        assert_eq!(buf.resize(3), Probe::Applied(3));
        assert_eq!(buf.bytes(), &[0, 0, 0]);
        assert_eq!(buf.resize(1), Probe::Applied(1));
        assert_eq!(buf.length(), 1);
    }

    #[test]
    fn test_data_offsets() {
        let mut buf = FixedBuffer::<4>::from_bytes(&[9, 8, 7]);
        assert_eq!(buf.data(1), &[8, 7]);
        assert!(buf.data(10).is_empty());
        buf.data_mut(2)[0] = 1;
        assert_eq!(buf.bytes(), &[9, 8, 1]);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DynamicBuffer
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_dynamic_grows_to_limit() {
        let config = BufferConfig::new(0, 6).unwrap();
        let mut buf = DynamicBuffer::with_config(&config);
        assert_eq!(buf.resize(4), Probe::Applied(4));
        assert_eq!(buf.insert(2, 2), Probe::Applied(2));
        assert_eq!(buf.insert(0, 1), Probe::Rejected { feasible: 0 });
        assert_eq!(buf.resize(7), Probe::Rejected { feasible: 6 });
        assert_eq!(buf.length(), 6);
    }

    #[test]
    fn test_dynamic_from_vec_keeps_every_byte() {
        let config = BufferConfig::new(0, 2).unwrap();
        let buf = DynamicBuffer::from_vec(vec![1, 2, 3, 4], &config);
        assert_eq!(buf.bytes(), &[1, 2, 3, 4]);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_dynamic_splice() {
        let mut buf = DynamicBuffer::from_vec(vec![5, 6, 7], &BufferConfig::default());
        assert_eq!(buf.insert(3, 1), Probe::Applied(1));
        assert_eq!(buf.bytes(), &[5, 6, 7, 0]);
        assert_eq!(buf.remove(0, 2), Probe::Applied(2));
        assert_eq!(buf.bytes(), &[7, 0]);
    }
}

use multibits_codec::{
    MAX_PLANES, OverflowPolicy, PlaneSet, Square, ValueGrid, decode, encode, encode_with_width,
    plane_count,
};
use proptest::prelude::*;

fn grid_strategy(max_bits: u32) -> impl Strategy<Value = ValueGrid> {
    let limit = if max_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << max_bits) - 1
    };
    prop::collection::vec(0..=limit, 64).prop_map(|v| ValueGrid::from_slice(&v).unwrap())
}

proptest! {
    #[test]
    fn roundtrip_at_derived_width(values in grid_strategy(12)) {
        let planes = encode(&values);
        prop_assert_eq!(planes.width(), plane_count(values.max_value()));
        prop_assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn roundtrip_at_any_sufficient_width(values in grid_strategy(8), extra in 0usize..8) {
        let width = values.plane_count() + extra;
        let planes = encode_with_width(&values, width, OverflowPolicy::Reject).unwrap();
        prop_assert_eq!(planes.width(), width);
        prop_assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn roundtrip_full_range(values in grid_strategy(64)) {
        let planes = encode(&values);
        prop_assert!(planes.width() <= MAX_PLANES);
        prop_assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn single_square_edit_only_touches_its_bit(
        values in grid_strategy(6),
        index in 0u8..64,
        replacement in 0u64..64,
    ) {
        let square = Square::new(index);
        let width = 6;
        let before = encode_with_width(&values, width, OverflowPolicy::Reject).unwrap();
        let after = encode_with_width(&values.with_value(square, replacement), width, OverflowPolicy::Reject).unwrap();
        for plane in 0..width {
            prop_assert_eq!(before[plane] & !square.bit(), after[plane] & !square.bit());
        }
    }

    #[test]
    fn truncation_keeps_low_bits(values in grid_strategy(10), width in 0usize..10) {
        let planes = encode_with_width(&values, width, OverflowPolicy::Truncate).unwrap();
        let decoded = decode(planes.as_slice()).unwrap();
        let mask = if width == 0 { 0 } else { (1u64 << width) - 1 };
        for (square, value) in values.iter() {
            prop_assert_eq!(decoded.get(square), value & mask);
        }
    }

    #[test]
    fn literal_text_roundtrip(values in grid_strategy(16)) {
        let text = encode(&values).to_string();
        let planes: PlaneSet = text.parse().unwrap();
        prop_assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }
}

//! End-to-end decode tests over mock host values.
//!
//! Each test builds the nested layout a debugger would expose for a family
//! member and checks the exact display string coming out of the facade.

use std::collections::HashMap;

use numscope::prelude::*;
use strum::IntoEnumIterator;

/// An in-memory stand-in for a live debugger value.
#[derive(Debug, Default)]
struct MockValue {
    type_name: String,
    bits: u128,
    byte_size: usize,
    fields: HashMap<String, MockValue>,
}

impl MockValue {
    fn leaf(bits: u128, byte_size: usize) -> Self {
        MockValue {
            bits,
            byte_size,
            ..MockValue::default()
        }
    }

    fn split(low: u64, high: u64) -> Self {
        MockValue::leaf(0, 16)
            .with_field(LOW_FIELD, MockValue::leaf(u128::from(low), 8))
            .with_field(HIGH_FIELD, MockValue::leaf(u128::from(high), 8))
    }

    /// Wraps `storage` in `layers` nested `basis_` fields under `type_name`.
    fn wrapped(type_name: &str, layers: usize, storage: MockValue) -> Self {
        let mut value = storage;
        for _ in 0..layers {
            value = MockValue::leaf(0, value.byte_size).with_field(BASIS_FIELD, value);
        }
        value.type_name = type_name.to_string();
        value
    }

    fn with_field(mut self, name: &str, child: MockValue) -> Self {
        self.fields.insert(name.to_string(), child);
        self
    }
}

impl HostValue for MockValue {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field(&self, name: &str) -> Option<&Self> {
        self.fields.get(name)
    }

    fn as_unsigned(&self) -> u128 {
        self.bits
    }

    fn byte_size(&self) -> usize {
        self.byte_size
    }
}

#[test]
fn test_plain_widths_display_grouped_decimal() {
    let cases: &[(&str, u128, usize, &str)] = &[
        ("u8", 200, 1, "200"),
        ("boost::safe_numbers::u16", 65_535, 2, "65,535"),
        ("u32", 1_000_000, 4, "1,000,000"),
        ("boost::safe_numbers::u64", u128::from(u64::MAX), 8, "18,446,744,073,709,551,615"),
    ];
    for (name, bits, size, expected) in cases {
        let value = MockValue::wrapped(name, 1, MockValue::leaf(*bits, *size));
        assert_eq!(decode(&value).as_deref(), Some(*expected), "{name}");
    }
}

#[test]
fn test_plain_width_masks_host_extension() {
    // The host zero- or sign-extends narrow reads; display must not.
    let value = MockValue::wrapped("u8", 1, MockValue::leaf(0xFFFF_FF2A, 1));
    assert_eq!(decode(&value).as_deref(), Some("42"));
}

#[test]
fn test_u128_split_representation() {
    // low = 2^64 - 1, high = 1  ->  2^65 - 1
    let value = MockValue::wrapped("u128", 1, MockValue::split(u64::MAX, 1));
    assert_eq!(
        decode(&value).as_deref(),
        Some("36,893,488,147,419,103,231")
    );
}

#[test]
fn test_u128_flat_fallback() {
    let value = MockValue::wrapped("u128", 1, MockValue::leaf(1_000, 16));
    assert_eq!(decode(&value).as_deref(), Some("1,000"));
}

#[test]
fn test_bounded_uint_display() {
    let value = MockValue::wrapped("bounded_uint<10, 20>", 2, MockValue::leaf(15, 1));
    assert_eq!(decode(&value).as_deref(), Some("[10, 20] 15"));
}

#[test]
fn test_bounded_uint_with_128_bit_storage() {
    let value = MockValue::wrapped(
        "boost::safe_numbers::bounded_uint<0, 340282366920938463463374607431768211455ULL>",
        2,
        MockValue::split(5, 0),
    );
    assert_eq!(
        decode(&value).as_deref(),
        Some("[0, 340282366920938463463374607431768211455] 5")
    );
}

#[test]
fn test_bounded_uint_masks_by_storage_size() {
    // 1-byte storage, host sign-extended the read.
    let value = MockValue::wrapped("bounded_uint<0, 200>", 2, MockValue::leaf(0xFFFF_FFC8, 1));
    assert_eq!(decode(&value).as_deref(), Some("[0, 200] 200"));
}

#[test]
fn test_verified_plain_adds_one_layer() {
    for width in Width::iter().filter(|w| *w != Width::W128) {
        let value = MockValue::wrapped(
            width.verified_alias(),
            2,
            MockValue::leaf(99, (width.bits() / 8) as usize),
        );
        assert_eq!(decode(&value).as_deref(), Some("99"), "{width:?}");
    }
}

#[test]
fn test_verified_u128() {
    let value = MockValue::wrapped("verified_u128", 2, MockValue::split(7, 2));
    assert_eq!(
        decode(&value).as_deref(),
        Some("36,893,488,147,419,103,239")
    );
}

#[test]
fn test_verified_bounded_integer() {
    let value = MockValue::wrapped("verified_bounded_integer<10, 20>", 3, MockValue::leaf(15, 1));
    assert_eq!(decode(&value).as_deref(), Some("[10, 20] 15"));
}

#[test]
fn test_unrecognized_type_contributes_nothing() {
    let value = MockValue::wrapped("std::vector<int>", 1, MockValue::leaf(15, 8));
    assert_eq!(decode(&value), None);
}

#[test]
fn test_pointer_never_reaches_resolution() {
    // A pointer to a family type decodes to nothing, not to a diagnostic:
    // classification rejects it before any field is touched.
    let value = MockValue::wrapped("boost::safe_numbers::u8 *", 1, MockValue::leaf(15, 1));
    assert_eq!(decode(&value), None);
}

#[test]
fn test_layout_mismatch_yields_diagnostic() {
    let value = MockValue::leaf(0, 1).with_field("other_", MockValue::leaf(1, 1));
    let value = MockValue {
        type_name: "u8".to_string(),
        ..value
    };
    assert_eq!(
        decode(&value).as_deref(),
        Some("<invalid u8: missing field `basis_`>")
    );
}

#[test]
fn test_missing_high_half_yields_diagnostic() {
    let storage = MockValue::leaf(0, 16).with_field(LOW_FIELD, MockValue::leaf(1, 8));
    let value = MockValue::wrapped("verified_u128", 2, storage);
    assert_eq!(
        decode(&value).as_deref(),
        Some("<invalid verified_u128: missing field `high`>")
    );
}

#[test]
fn test_malformed_value_does_not_poison_others() {
    let broken = MockValue::wrapped("bounded_uint<1, 2>", 1, MockValue::leaf(0, 1));
    let healthy = MockValue::wrapped("u32", 1, MockValue::leaf(77, 4));

    assert_eq!(
        decode(&broken).as_deref(),
        Some("<invalid bounded_uint: missing field `basis_`>")
    );
    assert_eq!(decode(&healthy).as_deref(), Some("77"));
}

#[test]
fn test_registration_is_idempotent_end_to_end() {
    let mut chain: PrinterRegistry<MockValue> = PrinterRegistry::new();
    register(&mut chain);
    register(&mut chain);
    assert_eq!(chain.len(), 1);

    let value = MockValue::wrapped("bounded_uint<10, 20>", 2, MockValue::leaf(15, 1));
    assert_eq!(chain.render(&value).as_deref(), Some("[10, 20] 15"));

    let unknown = MockValue::wrapped("float", 1, MockValue::leaf(1, 4));
    assert_eq!(chain.render(&unknown), None);
}

#[test]
fn test_drill_down_child_is_first_basis_layer() {
    let value = MockValue::wrapped("verified_u8", 2, MockValue::leaf(3, 1));
    let child = storage_child(&value).unwrap();
    // One unwrap only: the child still holds the inner plain layer.
    assert!(child.field(BASIS_FIELD).is_some());
    assert_eq!(storage_child(child).unwrap().as_unsigned(), 3);
}

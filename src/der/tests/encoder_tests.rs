// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

use super::*;

fn encode_single_int(value: i32) -> Vec<u8> {
    let mut encoder = DerEncoder::new();
    encoder.append_int(value);
    let der = encoder.encode();
    // strip the outer SEQUENCE header, leaving the INTEGER element
    assert_eq!(der[0], 0x30);
    der[2..].to_vec()
}

#[test]
fn test_integer_edge_cases() {
    assert_eq!(encode_single_int(0), [0x02, 0x01, 0x00]);
    assert_eq!(encode_single_int(-1), [0x02, 0x01, 0xff]);
    assert_eq!(encode_single_int(127), [0x02, 0x01, 0x7f]);
    assert_eq!(encode_single_int(128), [0x02, 0x02, 0x00, 0x80]);
    assert_eq!(encode_single_int(-128), [0x02, 0x01, 0x80]);
    assert_eq!(encode_single_int(256), [0x02, 0x02, 0x01, 0x00]);
}

#[test]
fn test_integer_extremes() {
    assert_eq!(
        encode_single_int(i32::MAX),
        [0x02, 0x04, 0x7f, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encode_single_int(i32::MIN),
        [0x02, 0x04, 0x80, 0x00, 0x00, 0x00]
    );
    assert_eq!(encode_single_int(-129), [0x02, 0x02, 0xff, 0x7f]);
    assert_eq!(encode_single_int(-256), [0x02, 0x02, 0xff, 0x00]);
    assert_eq!(encode_single_int(65536), [0x02, 0x03, 0x01, 0x00, 0x00]);
}

#[test]
fn test_sequence_layout() {
    let mut encoder = DerEncoder::new();
    encoder.append_int(0);
    encoder.append_octet_string(Some(&[0xaa, 0xbb, 0xcc]));

    let der = encoder.encode();
    assert_eq!(
        der,
        [0x30, 0x08, 0x02, 0x01, 0x00, 0x04, 0x03, 0xaa, 0xbb, 0xcc]
    );
}

#[test]
fn test_append_none_is_noop() {
    let mut encoder = DerEncoder::new();
    encoder.append_octet_string(None);
    encoder.append_int(5);
    encoder.append_octet_string(None);

    let der = encoder.encode();
    assert_eq!(der, [0x30, 0x03, 0x02, 0x01, 0x05]);
}

#[test]
fn test_long_form_lengths() {
    // 200-byte payload: item needs the 0x81 long form
    let payload = vec![0x5a; 200];
    let mut encoder = DerEncoder::new();
    encoder.append_octet_string(Some(&payload));
    let der = encoder.encode();

    assert_eq!(der[0], 0x30);
    assert_eq!(der[1], 0x81);
    assert_eq!(der[2] as usize, 3 + 200);
    assert_eq!(der[3], 0x04);
    assert_eq!(der[4], 0x81);
    assert_eq!(der[5] as usize, 200);
    assert_eq!(&der[6..], payload.as_slice());

    // 300-byte payload: two length bytes
    let payload = vec![0xa5; 300];
    let mut encoder = DerEncoder::new();
    encoder.append_octet_string(Some(&payload));
    let der = encoder.encode();

    assert_eq!(&der[..2], [0x30, 0x82]);
    assert_eq!(((der[2] as usize) << 8) | der[3] as usize, 4 + 300);
    assert_eq!(&der[4..6], [0x04, 0x82]);
    assert_eq!(((der[6] as usize) << 8) | der[7] as usize, 300);
}

#[test]
fn test_encode_is_repeatable_and_appendable() {
    let mut encoder = DerEncoder::new();
    encoder.append_int(1);
    let first = encoder.encode();
    assert_eq!(first, encoder.encode());

    encoder.append_int(2);
    let second = encoder.encode();
    assert_eq!(second, [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]);
}

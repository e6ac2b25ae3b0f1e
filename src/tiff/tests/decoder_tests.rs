//! Tests for the container decoder and the IFD chain walk

extern crate std;

use std::io::Cursor;

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::field_types;
use crate::tiff::errors::TiffError;
use crate::tiff::ifd::decode_dir;
use crate::tiff::reader::{decode, CycleGuard, TiffDecoder};
use super::test_utils::{classic_ifd_size, Entry, TiffWriter};

/// Header immediately followed by one IFD at offset 8
fn single_ifd(order: ByteOrder, entries: &[Entry]) -> TiffWriter {
    let mut writer = TiffWriter::new(order, false);
    writer.header(8).ifd(entries, 0);
    writer
}

#[test]
fn test_minimal_empty_ifd() {
    let writer = single_ifd(ByteOrder::LittleEndian, &[]);
    let tiff = decode(&mut writer.cursor()).unwrap();

    std::assert_eq!(tiff.order, ByteOrder::LittleEndian);
    std::assert!(!tiff.is_big);
    std::assert_eq!(tiff.dir_count(), 1);
    std::assert!(tiff.main_dir().unwrap().is_empty());
}

#[test]
fn test_invalid_magic() {
    let mut cursor = Cursor::new(b"XX*\x00\x08\x00\x00\x00".to_vec());
    let result = decode(&mut cursor);

    std::assert!(std::matches!(result, Err(TiffError::Structural { .. })));
    std::assert_eq!(cursor.position(), 2);
}

#[test]
fn test_invalid_version_marker() {
    let mut writer = TiffWriter::new(ByteOrder::BigEndian, false);
    writer.bytes(b"MM").u16(41).u32(8);

    let result = decode(&mut writer.cursor());
    match result {
        Err(e @ TiffError::Structural { .. }) => {
            std::assert!(e.to_string().contains("could not find special tiff marker"));
            std::assert!(!e.is_recoverable());
        },
        other => std::panic!("expected structural error, got {:?}", other),
    }
}

#[test]
fn test_truncated_header() {
    std::assert!(decode(&mut Cursor::new(b"II".to_vec())).is_err());
    std::assert!(decode(&mut Cursor::new(b"II*\x00\x08".to_vec())).is_err());
    std::assert!(decode(&mut Cursor::new(Vec::new())).is_err());
}

#[test]
fn test_big_endian_values() {
    let string_offset = 8 + classic_ifd_size(2);
    let mut writer = single_ifd(ByteOrder::BigEndian, &[
        Entry::inline(0x0100, field_types::SHORT, 1, &[0x02, 0x80]),
        Entry::at(0x010F, field_types::ASCII, 6, string_offset),
    ]);
    writer.bytes(b"Canon\0");

    let tiff = decode(&mut writer.cursor()).unwrap();
    let dir = tiff.main_dir().unwrap();

    std::assert_eq!(tiff.order, ByteOrder::BigEndian);
    std::assert_eq!(dir.len(), 2);
    std::assert_eq!(dir.get(0x0100).unwrap().int(0).unwrap(), 640);

    let make = dir.get(0x010F).unwrap();
    std::assert_eq!(make.string_val().unwrap(), "Canon");
    std::assert_eq!(make.val_offset, string_offset);
}

#[test]
fn test_bigtiff() {
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, true);
    writer.header(16).ifd(&[
        Entry::inline(0x0100, field_types::LONG8, 1, &5_000_000_000u64.to_le_bytes()),
        Entry::inline(0x0112, field_types::SHORT, 1, &[3, 0]),
    ], 0);

    let tiff = decode(&mut writer.cursor()).unwrap();
    let dir = tiff.main_dir().unwrap();

    std::assert!(tiff.is_big);
    std::assert_eq!(tiff.dir_count(), 1);
    std::assert_eq!(dir.get(0x0100).unwrap().int(0).unwrap(), 5_000_000_000);
    std::assert_eq!(dir.get(0x0112).unwrap().int(0).unwrap(), 3);
}

#[test]
fn test_ifd_chain() {
    let second = 8 + classic_ifd_size(1);
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8)
        .ifd(&[Entry::inline(0x0100, field_types::SHORT, 1, &[0x40, 0x01])], second)
        .ifd(&[Entry::inline(0x0100, field_types::SHORT, 1, &[0xA0, 0x00])], 0);

    let tiff = decode(&mut writer.cursor()).unwrap();

    std::assert_eq!(tiff.dir_count(), 2);
    std::assert_eq!(tiff.dirs[0].get(0x0100).unwrap().int(0).unwrap(), 320);
    std::assert_eq!(tiff.dirs[1].get(0x0100).unwrap().int(0).unwrap(), 160);
}

#[test]
fn test_self_referencing_ifd() {
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8).ifd(&[], 8);

    let result = decode(&mut writer.cursor());
    std::assert!(std::matches!(result, Err(TiffError::RecursiveIfd { offset: 8 })));
}

#[test]
fn test_two_ifd_cycle() {
    let second = 8 + classic_ifd_size(0);
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8).ifd(&[], second).ifd(&[], 8);

    let visited = TiffDecoder::builder().cycle_guard(CycleGuard::Visited).build();
    let result = visited.decode(&mut writer.cursor());
    std::assert!(std::matches!(result, Err(TiffError::RecursiveIfd { offset: 8 })));

    // The self-loop guard alone does not see this cycle; the chain limit ends it.
    let bounded = TiffDecoder::builder().max_dirs(4).build();
    let result = bounded.decode(&mut writer.cursor());
    std::assert!(std::matches!(result, Err(TiffError::Structural { .. })));
}

#[test]
fn test_max_dirs_allows_exact_length() {
    let second = 8 + classic_ifd_size(0);
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8).ifd(&[], second).ifd(&[], 0);

    let decoder = TiffDecoder::builder().max_dirs(2).build();
    std::assert_eq!(decoder.decode(&mut writer.cursor()).unwrap().dir_count(), 2);
}

#[test]
fn test_dangling_next_pointer_ends_chain() {
    let second = 8 + classic_ifd_size(0);
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8).ifd(&[], second).ifd(&[], 1000);

    let tiff = decode(&mut writer.cursor()).unwrap();
    std::assert_eq!(tiff.dir_count(), 2);
}

#[test]
fn test_first_pointer_past_end() {
    let mut writer = TiffWriter::new(ByteOrder::BigEndian, false);
    writer.header(1000);

    let tiff = decode(&mut writer.cursor()).unwrap();
    std::assert_eq!(tiff.dir_count(), 0);
}

#[test]
fn test_truncated_ifd_is_dropped() {
    let mut writer = TiffWriter::new(ByteOrder::LittleEndian, false);
    writer.header(8).u16(3);
    writer.u16(0x0100).u16(field_types::SHORT).u32(1).u32(64);

    let tiff = decode(&mut writer.cursor()).unwrap();
    std::assert_eq!(tiff.dir_count(), 0);
}

#[test]
fn test_unhandled_type_is_skipped() {
    let writer = single_ifd(ByteOrder::LittleEndian, &[
        Entry::inline(0x9999, 99, 1, &[1, 2, 3, 4]),
        Entry::inline(0x0112, field_types::SHORT, 1, &[6, 0]),
    ]);

    let tiff = decode(&mut writer.cursor()).unwrap();
    let dir = tiff.main_dir().unwrap();

    std::assert_eq!(dir.len(), 1);
    std::assert_eq!(dir.tags[0].id, 0x0112);
    std::assert_eq!(dir.tags[0].int(0).unwrap(), 6);
}

#[test]
fn test_out_of_line_value_past_end() {
    let writer = single_ifd(ByteOrder::LittleEndian, &[
        Entry::at(0x010E, field_types::ASCII, 32, 4096),
    ]);

    let result = decode(&mut writer.cursor());
    std::assert!(std::matches!(result, Err(TiffError::Structural { .. })));
}

#[test]
fn test_out_of_line_value_then_next_tag() {
    let data_offset = 8 + classic_ifd_size(3);
    let mut writer = single_ifd(ByteOrder::LittleEndian, &[
        Entry::at(0x011A, field_types::RATIONAL, 1, data_offset),
        Entry::at(0x0131, field_types::ASCII, 9, data_offset + 8),
        Entry::inline(0x0128, field_types::SHORT, 1, &[2, 0]),
    ]);
    writer.u32(300).u32(1).bytes(b"firmware\0");

    let tiff = decode(&mut writer.cursor()).unwrap();
    let dir = tiff.main_dir().unwrap();

    std::assert_eq!(dir.get(0x011A).unwrap().rat(0).unwrap(), (300, 1));
    std::assert_eq!(dir.get(0x0131).unwrap().string_val().unwrap(), "firmware");
    std::assert_eq!(dir.get(0x0128).unwrap().int(0).unwrap(), 2);
}

#[test]
fn test_decode_dir_at_offset() {
    let mut writer = TiffWriter::new(ByteOrder::BigEndian, false);
    writer.bytes(&[0xEE; 6]).ifd(&[
        Entry::inline(0x0001, field_types::ASCII, 4, b"0100"),
    ], 77);
    let mut cursor = writer.cursor();
    cursor.set_position(6);

    let (dir, next) = decode_dir(&mut cursor, ByteOrder::BigEndian, false).unwrap();
    std::assert_eq!(dir.len(), 1);
    std::assert_eq!(dir.tags[0].raw(), b"0100");
    std::assert_eq!(next, 77);
}

#[test]
fn test_fuzz_payloads_do_not_panic() {
    let payloads: [Vec<u8>; 3] = [
        [
            &b"II*\x00\x08\x00\x00\x00\x09\x00000000000000"[..],
            &[b'0'; 80][..],
            &b"000000i\x87\x04\x00\x01\x00\x00\x00\xac\x00\x00\x0000"[..],
            &[b'0'; 40][..],
            &b"0000000000000000\x05\x00\x00\x00"[..],
            &b"\x00\xe00000"[..],
        ].concat(),
        [
            &b"MM\x00*\x00\x00\x00\x08\x00\x070000000000"[..],
            &[b'0'; 20][..],
            &b"000000000000000000\x87i"[..],
            &b"\x00\x04\x00\x00\x00\x0000000000000000"[..],
            &[b'0'; 34][..],
        ].concat(),
        b"II*\x00\x08\x00\x00\x000000\x05\x00\x00\x00\x00\xa00000".to_vec(),
    ];

    for payload in payloads.iter() {
        let _ = decode(&mut Cursor::new(payload.clone()));
    }
}

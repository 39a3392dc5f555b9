use pdbtypes_core::ReadError;

use crate::test_utils::{Payload, frame, stream};

use super::*;

fn barray(element: u32) -> (u16, Vec<u8>) {
    (0x1207, Payload::new().ti(element).build())
}

fn pointer(target: u32) -> (u16, Vec<u8>) {
    (0x1002, Payload::new().ti(target).u32(0x0001_000c).build())
}

#[test]
fn decodes_consecutive_indices() {
    let bytes = stream(&[pointer(0x0074), barray(0x1000), (0x0203, vec![0; 10])]);
    let decoded = decode_stream(&bytes, &Config::default());

    assert!(decoded.failures.is_empty());
    assert_eq!(decoded.table.len(), 3);
    assert_eq!(decoded.table.render(TypeIndex(0x1001)).unwrap(), "(int*)[]");
    assert_eq!(
        decoded.table.render(TypeIndex(0x1002)).unwrap(),
        "<<LF_LIST dataLength=10>>"
    );
}

#[test]
fn stack_is_empty_after_every_record() {
    let records = [pointer(0x0074), barray(0x1000), barray(0x1001), pointer(0x1002)];
    let mut table = TypeTable::new();
    let mut deps = DependencyStack::new();
    let config = Config::default();

    for (i, (leaf, payload)) in records.iter().enumerate() {
        let index = TypeIndex(0x1000 + i as u32);
        decode_record(&mut table, &mut deps, index, *leaf, payload, &config).unwrap();
        assert!(deps.is_empty());
    }
    assert_eq!(table.len(), records.len());
}

#[test]
fn short_record_leaves_table_unchanged() {
    let mut table = TypeTable::new();
    let mut deps = DependencyStack::new();
    let config = Config::default();
    decode_record(&mut table, &mut deps, TypeIndex(0x1000), 0x1207, &[0x74, 0, 0, 0], &config)
        .unwrap();
    let before = table.clone();

    let short = [0x74, 0, 0];
    let err = decode_record(&mut table, &mut deps, TypeIndex(0x1001), 0x1207, &short, &config)
        .unwrap_err();

    assert!(matches!(err, DecodeError::MalformedData(_)));
    assert_eq!(table, before);
    assert!(deps.is_empty());
}

#[test]
fn decode_record_rejects_taken_index() {
    let mut table = TypeTable::new();
    let mut deps = DependencyStack::new();
    let config = Config::default();
    let payload = [0x74, 0, 0, 0];
    decode_record(&mut table, &mut deps, TypeIndex(0x1000), 0x1207, &payload, &config).unwrap();

    let err = decode_record(&mut table, &mut deps, TypeIndex(0x1000), 0x1207, &payload, &config)
        .unwrap_err();
    assert_eq!(err, DecodeError::Table(TableError::DuplicateIndex(TypeIndex(0x1000))));
}

#[test]
fn failed_record_still_consumes_index() {
    // middle record's payload is one byte short of an index
    let bytes = stream(&[barray(0x0074), (0x1207, vec![0x74, 0, 0]), barray(0x1000)]);
    let decoded = decode_stream(&bytes, &Config::default());

    assert_eq!(decoded.table.len(), 2);
    assert!(decoded.table.contains(TypeIndex(0x1000)));
    assert!(!decoded.table.contains(TypeIndex(0x1001)));
    assert_eq!(decoded.table.render(TypeIndex(0x1002)).unwrap(), "int[][]");

    assert_eq!(decoded.failures.len(), 1);
    let failure = &decoded.failures[0];
    assert_eq!(failure.index, TypeIndex(0x1001));
    assert_eq!(failure.offset, 8);
    assert_eq!(failure.leaf, Some(0x1207));
    assert!(matches!(failure.error, DecodeError::MalformedData(_)));
}

#[test]
fn truncated_stream_stops() {
    let mut bytes = stream(&[barray(0x0074)]);
    // length claims 6 bytes, only 3 follow
    bytes.extend_from_slice(&[0x06, 0x00, 0x07, 0x12, 0x74]);
    let decoded = decode_stream(&bytes, &Config::default());

    assert_eq!(decoded.table.len(), 1);
    assert_eq!(decoded.failures.len(), 1);
    assert_eq!(decoded.failures[0].index, TypeIndex(0x1001));
    assert_eq!(decoded.failures[0].leaf, None);
    assert_eq!(
        decoded.failures[0].error,
        DecodeError::MalformedData(ReadError::InsufficientData {
            needed: 6,
            remaining: 3,
            context: "record body",
        })
    );
}

#[test]
fn headless_record_is_skipped() {
    let mut bytes = vec![0x01, 0x00, 0xff];
    bytes.extend(frame(0x1207, &[0x74, 0, 0, 0]));
    let decoded = decode_stream(&bytes, &Config::default());

    assert_eq!(decoded.failures.len(), 1);
    assert_eq!(decoded.failures[0].leaf, None);
    assert_eq!(decoded.table.render(TypeIndex(0x1001)).unwrap(), "int[]");
}

#[test]
fn custom_first_index() {
    let bytes = stream(&[barray(0x0074), barray(0x2000)]);
    let config = Config::new().first_index(TypeIndex(0x2000));
    let decoded = decode_stream(&bytes, &config);

    assert_eq!(decoded.table.first_index(), TypeIndex(0x2000));
    assert_eq!(decoded.table.render(TypeIndex(0x2001)).unwrap(), "int[][]");
}

#[test]
fn stops_when_index_space_runs_out() {
    let bytes = stream(&[barray(0x0074), barray(0x0074), barray(0x0074)]);
    let config = Config::new().first_index(TypeIndex(u32::MAX));
    let decoded = decode_stream(&bytes, &config);

    assert_eq!(decoded.table.len(), 1);
    assert_eq!(decoded.table.render(TypeIndex(u32::MAX)).unwrap(), "int[]");
    assert!(!decoded.table.contains(TypeIndex(0)));
    assert_eq!(decoded.table.next_index(), None);

    assert_eq!(decoded.failures.len(), 1);
    let failure = &decoded.failures[0];
    assert_eq!(failure.index, TypeIndex(u32::MAX));
    assert_eq!(failure.offset, 8);
    assert_eq!(failure.leaf, None);
    assert_eq!(failure.error, DecodeError::IndexSpaceExhausted(TypeIndex(u32::MAX)));
    assert_eq!(failure.error.to_string(), "type index space exhausted after 0xffffffff");
}

#[test]
fn last_index_with_nothing_after_it() {
    let bytes = stream(&[barray(0x0074)]);
    let decoded = decode_stream(&bytes, &Config::new().first_index(TypeIndex(u32::MAX)));

    assert_eq!(decoded.table.len(), 1);
    assert!(decoded.failures.is_empty());
}

#[test]
fn unmodelled_leaves() {
    let bytes = stream(&[(0x000a, vec![1, 0, 0x10, 0]), barray(0x0074)]);

    let lenient = decode_stream(&bytes, &Config::default());
    assert!(lenient.failures.is_empty());
    assert_eq!(
        lenient.table.render(TypeIndex(0x1000)).unwrap(),
        "<<LF_VTSHAPE dataLength=4>>"
    );

    let strict = decode_stream(&bytes, &Config::new().strict_leaves(true));
    assert_eq!(strict.table.len(), 1);
    assert_eq!(strict.failures[0].error, DecodeError::UnrecognizedLeaf(0x000a));
    assert_eq!(strict.failures[0].error.to_string(), "unrecognized leaf 0x000a");
}

#[test]
fn empty_stream() {
    let decoded = decode_stream(&[], &Config::default());
    assert!(decoded.table.is_empty());
    assert!(decoded.failures.is_empty());
}

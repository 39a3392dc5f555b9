use crate::test_utils::{Payload, parse, table};
use crate::{Property, TableError, TypeIndex, TypeTable, sub};

use super::*;

const PTR64: u32 = 0x0001_000c;
const CONST: u32 = 1 << 10;

fn pointer(target: u32) -> (u16, Vec<u8>) {
    (0x1002, Payload::new().ti(target).u32(PTR64).build())
}

fn barray(element: u32) -> (u16, Vec<u8>) {
    (0x1207, Payload::new().ti(element).build())
}

fn arglist(args: &[u32]) -> (u16, Vec<u8>) {
    let payload = args
        .iter()
        .fold(Payload::new().u32(args.len() as u32), |p, &a| p.ti(a));
    (0x1201, payload.build())
}

fn procedure(ret: u32, args: u32) -> (u16, Vec<u8>) {
    let payload = Payload::new().ti(ret).u8(0).u8(0).u16(0).ti(args).build();
    (0x1008, payload)
}

fn structure(name: &str, field_list: u32, size: u16) -> (u16, Vec<u8>) {
    let payload = Payload::new()
        .u16(0)
        .u16(0)
        .ti(field_list)
        .ti(0)
        .ti(0)
        .u16(size)
        .cstr(name)
        .build();
    (0x1505, payload)
}

fn render_at(table: &TypeTable, raw: u32) -> String {
    table.render(TypeIndex(raw)).unwrap()
}

#[test]
fn array_of_pointers_is_parenthesized() {
    let table = table(&[pointer(0x0074), barray(0x1000)]);

    assert_eq!(render_at(&table, 0x1000), "int*");
    assert_eq!(render_at(&table, 0x1001), "(int*)[]");
}

#[test]
fn array_of_primitive_pointer_is_parenthesized() {
    let table = table(&[barray(0x0674)]);
    assert_eq!(render_at(&table, 0x1000), "(int*)[]");
}

#[test]
fn array_of_reserved_mode_primitive_stays_plain() {
    let table = table(&[barray(0x0874)]);
    assert_eq!(render_at(&table, 0x1000), "<<primitive 0x0874>>[]");
}

#[test]
fn array_of_plain_element() {
    let table = TypeTable::new();
    let (leaf, payload) = barray(0x0074);
    let record = parse(leaf, &payload).unwrap();

    assert_eq!(render(&table, &record, Bind::Plain).unwrap(), "int[]");
    assert_eq!(render(&table, &record, Bind::Ptr).unwrap(), "int[]");
}

#[test]
fn array_of_arrays() {
    let table = table(&[barray(0x0074), barray(0x1000)]);
    assert_eq!(render_at(&table, 0x1001), "int[][]");
}

#[test]
fn opaque_records() {
    let table = TypeTable::new();
    let list = parse(0x0203, &[0; 10]).unwrap();
    assert_eq!(
        render(&table, &list, Bind::Plain).unwrap(),
        "<<LF_LIST dataLength=10>>"
    );

    let vtshape = parse(0x000a, &[1, 0, 0x10, 0]).unwrap();
    assert_eq!(
        render(&table, &vtshape, Bind::Plain).unwrap(),
        "<<LF_VTSHAPE dataLength=4>>"
    );
}

#[test]
fn friend_function() {
    let table = TypeTable::new();
    let record = parse(0x150c, &Payload::new().u16(0).ti(0x0074).cstr("Foo").build()).unwrap();

    assert_eq!(record.precedence(), Bind::Plain);
    assert_eq!(render(&table, &record, Bind::Plain).unwrap(), "friend: Foo int");
}

#[test]
fn rendering_is_idempotent() {
    let table = table(&[pointer(0x0074), barray(0x1000)]);
    let first = render_at(&table, 0x1001);
    let second = render_at(&table, 0x1001);
    assert_eq!(first, second);
}

#[test]
fn unknown_index_propagates() {
    let table = TypeTable::new();
    let (leaf, payload) = barray(0x1005);
    let record = parse(leaf, &payload).unwrap();

    assert_eq!(
        render(&table, &record, Bind::Plain),
        Err(TableError::UnknownIndex(TypeIndex(0x1005)))
    );
    assert_eq!(
        table.render(TypeIndex(0x1000)),
        Err(TableError::UnknownIndex(TypeIndex(0x1000)))
    );
}

#[test]
fn mutual_array_cycle_terminates() {
    let table = table(&[barray(0x1001), barray(0x1000)]);

    assert_eq!(render_at(&table, 0x1000), "<<cycle 0x1000>>[][]");
    assert_eq!(render_at(&table, 0x1001), "<<cycle 0x1001>>[][]");
}

#[test]
fn self_referential_pointer_terminates() {
    // 0x1000 points at itself
    let table = table(&[pointer(0x1000)]);
    assert_eq!(render_at(&table, 0x1000), "<<cycle 0x1000>>*");
}

#[test]
fn procedures() {
    let table = table(&[
        arglist(&[0x0074]),
        procedure(0x0003, 0x1000),
        pointer(0x1001),
        barray(0x1002),
    ]);

    assert_eq!(render_at(&table, 0x1001), "void (int)");
    assert_eq!(render_at(&table, 0x1002), "(void (int))*");
    assert_eq!(render_at(&table, 0x1003), "((void (int))*)[]");
}

#[test]
fn argument_lists() {
    let table = table(&[arglist(&[]), arglist(&[0x0074, 0x0000])]);

    assert_eq!(render_at(&table, 0x1000), "void");
    assert_eq!(render_at(&table, 0x1001), "int, ...");
}

#[test]
fn const_qualifiers() {
    let const_int = (0x1001, Payload::new().ti(0x0074).u16(1).build());
    let const_ptr = (0x1001, Payload::new().ti(0x1000).u16(1).build());
    let ptr_const_attr = (0x1002, Payload::new().ti(0x0070).u32(PTR64 | CONST).build());
    let table = table(&[pointer(0x0074), const_int, const_ptr, ptr_const_attr]);

    assert_eq!(render_at(&table, 0x1001), "const int");
    assert_eq!(render_at(&table, 0x1002), "int* const");
    assert_eq!(render_at(&table, 0x1003), "char* const");
}

#[test]
fn sized_arrays() {
    let int_array = Payload::new().ti(0x0074).ti(0x0023).u16(16).cstr("").build();
    let struct_array = Payload::new().ti(0x1000).ti(0x0023).u16(24).cstr("").build();
    let opaque_array = Payload::new().ti(0x1003).ti(0x0023).u16(6).cstr("").build();
    let table = table(&[
        structure("Point", 0, 12),
        (0x1503, int_array),
        (0x1503, struct_array),
        (0x0203, vec![0; 2]),
        (0x1503, opaque_array),
    ]);

    assert_eq!(render_at(&table, 0x1001), "int[4]");
    assert_eq!(render_at(&table, 0x1002), "struct Point[2]");
    assert_eq!(render_at(&table, 0x1004), "<<LF_LIST dataLength=2>>[size=6]");
}

#[test]
fn member_pointers() {
    let data_member = Payload::new()
        .ti(0x0074)
        .u32(PTR64 | (2 << 5))
        .ti(0x1000)
        .u16(0)
        .build();
    let method = Payload::new()
        .ti(0x0074)
        .ti(0x1000)
        .ti(0x0603)
        .u8(0)
        .u8(0)
        .u16(0)
        .ti(0x1001)
        .i32(0)
        .build();
    let table = table(&[
        structure("Foo", 0, 4),
        arglist(&[]),
        (0x1002, data_member),
        (0x1009, method),
    ]);

    assert_eq!(render_at(&table, 0x1002), "int Foo::*");
    assert_eq!(render_at(&table, 0x1003), "int Foo::(void)");
}

#[test]
fn references() {
    let lvalue = Payload::new().ti(0x0074).u32(PTR64 | (1 << 5)).build();
    let rvalue = Payload::new().ti(0x0074).u32(PTR64 | (4 << 5)).build();
    let table = table(&[(0x1002, lvalue), (0x1002, rvalue)]);

    assert_eq!(render_at(&table, 0x1000), "int&");
    assert_eq!(render_at(&table, 0x1001), "int&&");
}

#[test]
fn field_list_and_self_reference() {
    let fields = Payload::new()
        .u16(sub::MEMBER)
        .u16(3)
        .ti(0x1001)
        .u16(0)
        .cstr("next")
        .u16(sub::MEMBER)
        .u16(3)
        .ti(0x1003)
        .u16(8)
        .cstr("flags")
        .build();
    let bitfield = Payload::new().ti(0x0075).u8(3).u8(0).build();
    let table = table(&[
        structure("Node", 0x1002, 16),
        pointer(0x1000),
        (0x1203, fields),
        (0x1205, bitfield),
    ]);

    assert_eq!(render_at(&table, 0x1003), "unsigned int : 3");
    assert_eq!(
        render_at(&table, 0x1002),
        "{ struct Node* next; unsigned int : 3 flags }"
    );
}

#[test]
fn enums_and_unions() {
    let enumeration = Payload::new()
        .u16(0)
        .u16(0)
        .ti(0x0074)
        .ti(0)
        .cstr("Color")
        .build();
    let union = Payload::new()
        .u16(0)
        .u16(Property::FORWARD_REF)
        .ti(0)
        .u16(0)
        .cstr("Value")
        .build();
    let table = table(&[(0x1507, enumeration), (0x1506, union)]);

    assert_eq!(render_at(&table, 0x1000), "enum Color");
    assert_eq!(render_at(&table, 0x1001), "union Value");
}

#[test]
fn precedence_by_kind() {
    let table = table(&[pointer(0x0074), barray(0x0074), arglist(&[]), procedure(0x0074, 0x1002)]);
    let kinds: Vec<Bind> = table.iter().map(|(_, r)| r.precedence()).collect();
    assert_eq!(kinds, vec![Bind::Ptr, Bind::Array, Bind::Plain, Bind::Proc]);
    assert!(Bind::Ptr < Bind::Array && Bind::Array < Bind::Proc && Bind::Proc < Bind::Plain);
}

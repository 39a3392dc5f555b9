//! Human-readable dump of a decoded type table.
//!
//! ```text
//! [types]
//! 0x1000 = LF_POINTER  ; int*
//!
//! [deps]
//! 0x1000 -> data:0x0074
//!
//! [failures]
//! 0x1001 @ 0x000c LF_BARRAY: malformed record: ...
//! ```
//!
//! Empty sections are left out.

use std::fmt::Write as _;

use pdbtypes_core::Colors;

use crate::decode::RecordFailure;
use crate::leaf::leaf_name;
use crate::table::TypeTable;

/// Generate a human-readable dump of the table and any decode failures.
pub fn dump(table: &TypeTable, failures: &[RecordFailure], colors: Colors) -> String {
    let mut sections = Vec::new();
    if !table.is_empty() {
        sections.push(dump_types(table, colors));
    }
    let deps = dump_deps(table, colors);
    if !deps.is_empty() {
        sections.push(deps);
    }
    if !failures.is_empty() {
        sections.push(dump_failures(failures, colors));
    }
    sections.join("\n")
}

fn header(out: &mut String, name: &str, c: Colors) {
    writeln!(out, "{}[{name}]{}", c.blue, c.reset).unwrap();
}

fn dump_types(table: &TypeTable, c: Colors) -> String {
    let mut out = String::new();
    header(&mut out, "types", c);
    for (index, record) in table.iter() {
        let text = match table.render(index) {
            Ok(text) => text,
            Err(err) => format!("<<{err}>>"),
        };
        writeln!(
            out,
            "{}{index}{} = {}{}{}  {}; {}{}{}",
            c.blue,
            c.reset,
            c.dim,
            record.tag_name(),
            c.reset,
            c.dim,
            c.green,
            text,
            c.reset
        )
        .unwrap();
    }
    out
}

fn dump_deps(table: &TypeTable, c: Colors) -> String {
    let mut out = String::new();
    for (index, _) in table.iter() {
        let Some(deps) = table.dependencies(index).filter(|deps| !deps.is_empty()) else {
            continue;
        };
        if out.is_empty() {
            header(&mut out, "deps", c);
        }
        let list: Vec<String> = deps.iter().map(ToString::to_string).collect();
        writeln!(out, "{index} -> {}", list.join(", ")).unwrap();
    }
    out
}

fn dump_failures(failures: &[RecordFailure], c: Colors) -> String {
    let mut out = String::new();
    header(&mut out, "failures", c);
    for failure in failures {
        let leaf = match failure.leaf {
            Some(tag) => leaf_name(tag).map_or_else(|| format!("{tag:#06x}"), str::to_string),
            None => "<no leaf>".to_string(),
        };
        writeln!(
            out,
            "{} @ {:#06x} {}{leaf}{}: {}",
            failure.index, failure.offset, c.dim, c.reset, failure.error
        )
        .unwrap();
    }
    out
}

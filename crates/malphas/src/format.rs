//! Hex rendering of the converted blob.
//!
//! Rendering, joining, and grouping are separate steps over the literal
//! sequence. Grouping never re-parses joined text, so the line layout cannot
//! drift from the separator format. Downstream C compilers parse the array
//! body literally: no byte may be dropped, reordered, or case-altered.

/// Separator between hex literals.
pub const SEPARATOR: &str = ", ";

/// Literals per line in the grouped layout.
pub const GROUP_WIDTH: usize = 12;

/// Render each byte as a `0x`-prefixed lowercase two-digit literal, in blob
/// order.
pub fn hex_literals(blob: &[u8]) -> Vec<String> {
    blob.iter().map(|b| format!("0x{b:02x}")).collect()
}

/// Join literals with [`SEPARATOR`].
///
/// With `grouped` set, a line break and a single tab follow the separator
/// after every [`GROUP_WIDTH`]th literal. The break is cosmetic: the count
/// and order of literals are identical in both layouts, and no break follows
/// the final literal.
pub fn join_literals(literals: &[String], grouped: bool) -> String {
    if !grouped {
        return literals.join(SEPARATOR);
    }

    // "0x00, " is 6 bytes; the occasional "\n\t" is noise at this scale.
    let mut out = String::with_capacity(literals.len() * 6);
    for (i, literal) in literals.iter().enumerate() {
        out.push_str(literal);
        if i + 1 < literals.len() {
            out.push_str(SEPARATOR);
            if (i + 1) % GROUP_WIDTH == 0 {
                out.push_str("\n\t");
            }
        }
    }
    out
}

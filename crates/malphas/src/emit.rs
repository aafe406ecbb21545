//! C source assembly.
//!
//! Pure formatting: upstream data is taken as-is and never re-validated
//! here. The emitted text is a contract with embedded build systems —
//! in particular the `DATA_ALIGN_ATTRIBUTE` block, which flash/DMA
//! placement depends on, is reproduced verbatim on every invocation.

use chrono::{DateTime, Local};

use crate::format::{hex_literals, join_literals};
use crate::model::ModelShape;

/// Value emitted as `TF_NUM_OPS`. Fixed placeholder expected by downstream
/// resolver setup; not derived from the model.
pub const TF_NUM_OPS: usize = 2;

/// Clock abstraction so the generated banner is deterministic under test.
pub trait Clock {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Process clock; the production [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Assemble the complete header text.
///
/// Layout, in order: warning banner with generation timestamp, single
/// inclusion guard, `HAVE_ATTRIBUTE` shim, `DATA_ALIGN_ATTRIBUTE` macro,
/// shape constant macros, size constant, byte array, trailing CRLF.
pub fn emit_header(
    shape: ModelShape,
    blob: &[u8],
    model_name: &str,
    pretty_print: bool,
    clock: &impl Clock,
) -> String {
    let literals = hex_literals(blob);
    let body = join_literals(&literals, pretty_print);
    let size = literals.len();
    let timestamp = clock.now().format("%Y-%m-%d %H:%M:%S");
    let num_inputs = shape.num_inputs;
    let num_outputs = shape.num_outputs;

    let mut text = format!(
        "
/***************************************************************************
 * WARNING: This is an automatically generated file.
 * DO NOT MODIFY THIS FILE DIRECTLY.
 * Any changes made to this file will be overwritten
 * when the file is regenerated. To make modifications,
 * please edit the source files that generate this code.
 *
 * File generated on: {timestamp}
****************************************************************************/

#pragma once

#ifdef __has_attribute
#define HAVE_ATTRIBUTE(x) __has_attribute(x)
#else
#define HAVE_ATTRIBUTE(x) 0
#endif

#if HAVE_ATTRIBUTE(aligned) || (defined(__GNUC__) && !defined(__clang__))
#define DATA_ALIGN_ATTRIBUTE __attribute__((aligned(4)))
#else
#define DATA_ALIGN_ATTRIBUTE
#endif

#define TF_NUM_OPS {TF_NUM_OPS}
#define TF_NUM_INPUTS {num_inputs}
#define TF_NUM_OUTPUTS {num_outputs}

/** Model bytes size. */
const int {model_name}_size = {size};

"
    );

    // Array doc comment and the final terminator use CRLF endings.
    let (open, close) = if pretty_print { ("{\n\t", "\n}") } else { ("{", "}") };
    text.push_str("/** Model bytes. */\r\n");
    text.push_str(&format!(
        "const unsigned char {model_name}[] DATA_ALIGN_ATTRIBUTE = {open}{body}{close};"
    ));
    text.push_str("\r\n");
    text
}

//! # Malphas
//!
//! Exports trained models as C byte arrays for embedded firmware.
//!
//! Malphas is named after the 39th demon of the Ars Goetia, a builder of
//! houses and towers — here building the C source artifact that houses a
//! model's weights inside firmware. Microcontroller targets cannot load a
//! model from a filesystem at runtime, so the serialized model is linked
//! into the binary as a `const unsigned char` array instead.
//!
//! # Pipeline
//!
//! ```text
//! Model ──> Normalizer ──> Converter ──> Byte Formatter ──> Source Emitter
//!           (shape)        (flat blob)   (hex literals)     (header text)
//! ```
//!
//! One straight line, no retries, no concurrency. Conversion itself (graph
//! lowering, quantization, flattening) lives behind the [`Converter`] trait;
//! this crate selects the optimization directives, formats the resulting
//! blob, and assembles the header around it.
//!
//! # Example
//!
//! ```ignore
//! use malphas::{export_c_header, ExportOptions, Optimize};
//!
//! let options = ExportOptions::new()
//!     .with_model_name("gesture_net")
//!     .with_pretty_print(true);
//! let header = export_c_header(&model, &tflite_converter, &options)?;
//! std::fs::write("gesture_net.h", header)?;
//! ```
//!
//! The generated header contains the array, a `<name>_size` constant, the
//! `TF_NUM_OPS` / `TF_NUM_INPUTS` / `TF_NUM_OUTPUTS` macros, and a
//! 4-byte-alignment attribute macro for DMA/flash placement.

mod convert;
mod emit;
mod error;
mod format;
mod model;
mod options;

pub use convert::{Converter, Optimization, Optimize};
pub use emit::{Clock, SystemClock, TF_NUM_OPS};
pub use error::{ExportError, Result};
pub use format::{hex_literals, join_literals, GROUP_WIDTH, SEPARATOR};
pub use model::{ModelInfo, ModelShape, TensorShape};
pub use options::{ExportOptions, DEFAULT_MODEL_NAME};

use std::io::Write;

use tracing::{debug, info};

/// Export `model` as C header source using the process clock.
///
/// Either a complete, well-formed header text is returned or an error is
/// raised; partial output is never produced. Output is idempotent for a
/// fixed model and options, except for the embedded generation timestamp.
pub fn export_c_header<M, C>(model: &M, converter: &C, options: &ExportOptions) -> Result<String>
where
    M: ModelInfo,
    C: Converter<M>,
{
    export_c_header_with_clock(model, converter, options, &SystemClock)
}

/// Export `model` as C header source, reading the banner timestamp from
/// `clock`.
pub fn export_c_header_with_clock<M, C>(
    model: &M,
    converter: &C,
    options: &ExportOptions,
    clock: &impl Clock,
) -> Result<String>
where
    M: ModelInfo,
    C: Converter<M>,
{
    // Shape extraction runs first so malformed models fail before any
    // conversion work starts.
    let shape = ModelShape::from_model(model)?;
    debug!(
        num_inputs = shape.num_inputs,
        num_outputs = shape.num_outputs,
        "normalized model shape"
    );

    let directives = options.optimize.directives();
    debug!(?directives, "resolved optimization policy");

    let blob = converter.convert(model, &directives)?;
    info!(
        model_name = %options.model_name,
        blob_len = blob.len(),
        "converted model to flat binary"
    );

    Ok(emit::emit_header(
        shape,
        &blob,
        &options.model_name,
        options.pretty_print,
        clock,
    ))
}

/// Export `model` and write the header text to `writer`.
pub fn write_c_header<M, C, W>(
    model: &M,
    converter: &C,
    options: &ExportOptions,
    mut writer: W,
) -> Result<()>
where
    M: ModelInfo,
    C: Converter<M>,
    W: Write,
{
    let text = export_c_header(model, converter, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

//! Conversion policy and the external converter boundary.
//!
//! Graph lowering, quantization, and flattening all live behind the
//! [`Converter`] trait. This crate only decides which optimization
//! directives to hand over before calling it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single optimization directive understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optimization {
    /// Size-oriented pass (the default when optimization is enabled).
    Size,
    /// Latency-oriented pass.
    Latency,
    /// Integer quantization pass.
    Quantize,
}

impl Optimization {
    /// Get directive name as string.
    pub fn name(self) -> &'static str {
        match self {
            Optimization::Size => "size",
            Optimization::Latency => "latency",
            Optimization::Quantize => "quantize",
        }
    }
}

/// Optimization policy applied before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Optimize {
    /// Apply the default size-oriented pass.
    #[default]
    Enabled,
    /// Convert without any optimization pass.
    Disabled,
    /// Apply exactly this directive list.
    Directives(Vec<Optimization>),
}

impl Optimize {
    /// Resolve the policy into the directive list handed to the converter.
    pub fn directives(&self) -> Vec<Optimization> {
        match self {
            Optimize::Enabled => vec![Optimization::Size],
            Optimize::Disabled => Vec::new(),
            Optimize::Directives(list) => list.clone(),
        }
    }
}

/// External model-conversion capability.
///
/// Implementations serialize the model into a flat binary blob, applying the
/// given directives. Rejections (unsupported ops, unbuilt graph, shape
/// mismatch) surface as [`crate::ExportError::Conversion`]; they are
/// structural, not transient, so callers get them unchanged with no retry.
pub trait Converter<M> {
    /// Convert `model` into its flat binary serialization.
    fn convert(&self, model: &M, directives: &[Optimization]) -> Result<Vec<u8>>;
}

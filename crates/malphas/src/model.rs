//! Model shape introspection.
//!
//! The exporter never looks at weights or graph structure. It reads exactly
//! two integers from the model: the per-sample feature counts of the declared
//! input and output interfaces. Everything else is the converter's business.

use crate::error::{ExportError, Result};

/// Tensor shape descriptor: one entry per dimension, `None` for a dynamic
/// dimension (typically the batch axis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorShape {
    /// Dimension sizes in declaration order.
    pub dims: Vec<Option<usize>>,
}

impl TensorShape {
    /// Create a shape from a dimension list.
    pub fn new(dims: impl Into<Vec<Option<usize>>>) -> Self {
        Self { dims: dims.into() }
    }

    /// Per-sample feature count: the second dimension, ignoring the batch
    /// axis. `None` when the dimension is absent, dynamic, or zero.
    pub fn feature_count(&self) -> Option<usize> {
        self.dims.get(1).copied().flatten().filter(|&n| n > 0)
    }
}

/// Read-only view over a trained model's declared interfaces.
///
/// Shapes are `None` when the model has not been built yet and therefore has
/// no declared interfaces.
pub trait ModelInfo {
    /// Declared input shape.
    fn input_shape(&self) -> Option<TensorShape>;

    /// Declared output shape.
    fn output_shape(&self) -> Option<TensorShape>;
}

/// Normalized shape metadata emitted into the generated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelShape {
    /// Input feature count (`TF_NUM_INPUTS`).
    pub num_inputs: usize,
    /// Output feature count (`TF_NUM_OUTPUTS`).
    pub num_outputs: usize,
}

impl ModelShape {
    /// Extract feature counts from a model's declared shapes.
    ///
    /// Fails with [`ExportError::Shape`] when either interface is missing or
    /// its feature dimension is dynamic or zero. Runs before any conversion
    /// work so malformed models are rejected without invoking the converter.
    pub fn from_model<M: ModelInfo>(model: &M) -> Result<Self> {
        let input = model
            .input_shape()
            .ok_or_else(|| ExportError::shape("model declares no input shape (unbuilt model?)"))?;
        let output = model
            .output_shape()
            .ok_or_else(|| ExportError::shape("model declares no output shape (unbuilt model?)"))?;

        let num_inputs = input.feature_count().ok_or_else(|| {
            ExportError::shape(format!(
                "input shape {:?} has no usable feature dimension",
                input.dims
            ))
        })?;
        let num_outputs = output.feature_count().ok_or_else(|| {
            ExportError::shape(format!(
                "output shape {:?} has no usable feature dimension",
                output.dims
            ))
        })?;

        Ok(Self {
            num_inputs,
            num_outputs,
        })
    }
}

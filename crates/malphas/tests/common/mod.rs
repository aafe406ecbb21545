//! Shared fixtures: stub model, substitutable converters, and an array
//! parser for round-trip checks.

#![allow(dead_code)]

use std::cell::RefCell;

use malphas::{Converter, ExportError, ModelInfo, Optimization, Result, TensorShape};

/// Model stub with configurable declared shapes.
pub struct TestModel {
    pub input: Option<TensorShape>,
    pub output: Option<TensorShape>,
}

impl TestModel {
    /// Built model with the given per-sample feature counts.
    pub fn with_features(inputs: usize, outputs: usize) -> Self {
        Self {
            input: Some(TensorShape::new(vec![None, Some(inputs)])),
            output: Some(TensorShape::new(vec![None, Some(outputs)])),
        }
    }

    /// Model that declares no interfaces at all.
    pub fn unbuilt() -> Self {
        Self {
            input: None,
            output: None,
        }
    }
}

impl ModelInfo for TestModel {
    fn input_shape(&self) -> Option<TensorShape> {
        self.input.clone()
    }

    fn output_shape(&self) -> Option<TensorShape> {
        self.output.clone()
    }
}

/// Converter stub returning a fixed blob and recording every call.
pub struct StaticConverter {
    pub blob: Vec<u8>,
    pub calls: RefCell<Vec<Vec<Optimization>>>,
}

impl StaticConverter {
    pub fn new(blob: Vec<u8>) -> Self {
        Self {
            blob,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Converter<TestModel> for StaticConverter {
    fn convert(&self, _model: &TestModel, directives: &[Optimization]) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(directives.to_vec());
        Ok(self.blob.clone())
    }
}

/// Converter stub that always rejects the model.
pub struct RejectingConverter;

impl Converter<TestModel> for RejectingConverter {
    fn convert(&self, _model: &TestModel, _directives: &[Optimization]) -> Result<Vec<u8>> {
        Err(ExportError::conversion("unsupported op: CUSTOM_LSTM"))
    }
}

/// Parse the emitted array body back into bytes.
pub fn parse_array_bytes(header: &str) -> Vec<u8> {
    let marker = "DATA_ALIGN_ATTRIBUTE = {";
    let start = header.find(marker).expect("array declaration present") + marker.len();
    let end = header[start..].find('}').expect("closing brace present") + start;
    header[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|lit| {
            let digits = lit.strip_prefix("0x").expect("0x prefix");
            assert_eq!(digits.len(), 2, "literal {lit:?} is not two digits");
            u8::from_str_radix(digits, 16).expect("valid hex digits")
        })
        .collect()
}

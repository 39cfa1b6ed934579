//! Shared helpers for the integration tests.

#![allow(dead_code)]

use pdf_content_writer::writer::{ContentStreamOp, ContentStreamWriter};
use pdf_content_writer::{Error, Result};

/// Every call a [`RecordingStream`] received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Op(ContentStreamOp),
    Close,
}

/// Stream that records calls and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingStream {
    pub calls: Vec<Call>,
    /// Fail every call once this many calls have succeeded
    pub fail_after: Option<usize>,
}

impl RecordingStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(calls),
        }
    }

    /// Recorded operators, without the close marker.
    pub fn ops(&self) -> Vec<ContentStreamOp> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Op(op) => Some(op.clone()),
                Call::Close => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&ContentStreamOp) -> bool) -> usize {
        self.ops().iter().filter(|op| pred(op)).count()
    }

    pub fn close_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Close).count()
    }

    fn record(&mut self, call: Call) -> Result<()> {
        if self.fail_after.is_some_and(|n| self.calls.len() >= n) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stream rejected write",
            )));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl ContentStreamWriter for RecordingStream {
    fn write_op(&mut self, op: ContentStreamOp) -> Result<()> {
        self.record(Call::Op(op))
    }

    fn close(&mut self) -> Result<()> {
        self.record(Call::Close)
    }
}

/// Check that no text operator appears outside BT/ET and no path operator inside.
pub fn assert_well_nested(ops: &[ContentStreamOp]) {
    let mut in_text = false;
    for op in ops {
        match op {
            ContentStreamOp::BeginText => {
                assert!(!in_text, "nested BT");
                in_text = true;
            },
            ContentStreamOp::EndText => {
                assert!(in_text, "ET without BT");
                in_text = false;
            },
            ContentStreamOp::SetFont(..)
            | ContentStreamOp::SetFillColorRGB(..)
            | ContentStreamOp::SetStrokeColorRGB(..) => {},
            op if op.is_text_operator() => assert!(in_text, "{:?} outside text object", op),
            op => assert!(!in_text, "{:?} inside text object", op),
        }
    }
}

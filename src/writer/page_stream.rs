//! Streaming content stream serializer.
//!
//! [`PageContentStream`] writes each operator to an [`std::io::Write`] sink
//! as soon as it is received, one operator per line. Nothing is buffered
//! beyond what the sink itself buffers, so an I/O failure surfaces on the
//! call that caused it.

use std::io::Write;

use super::content_stream::{ContentStreamOp, ContentStreamWriter, write_op};
use crate::error::{Error, Result};

/// Content stream writer backed by a byte sink.
#[derive(Debug)]
pub struct PageContentStream<W: Write> {
    inner: W,
    /// Operators written so far
    op_count: usize,
    closed: bool,
}

impl<W: Write> PageContentStream<W> {
    /// Wrap a sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            op_count: 0,
            closed: false,
        }
    }

    /// Number of operators written.
    pub fn op_count(&self) -> usize {
        self.op_count
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ContentStreamWriter for PageContentStream<W> {
    fn write_op(&mut self, op: ContentStreamOp) -> Result<()> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        write_op(&mut self.inner, &op)?;
        self.inner.write_all(b"\n")?;
        self.op_count += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        self.closed = true;
        self.inner.flush()?;
        log::trace!("Closed content stream after {} operators", self.op_count);
        Ok(())
    }
}

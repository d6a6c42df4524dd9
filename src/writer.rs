use std::convert::Infallible;

use crate::buffer::ScratchBuffer;
use crate::constants::WRITE_FAILED_MSG;
use crate::error::WriteError;
use crate::stream::{OutputStream, StreamId};

/// Writes the whole of `buf` to `stream`, retrying on short writes.
///
/// Returns the number of write calls it took. A short or zero-length write
/// is retried with the remaining tail; any error from the primitive is
/// returned as is, with the offset reached so far.
pub fn write_fully<S>(stream: &mut S, buf: &[u8]) -> Result<usize, WriteError>
where
    S: OutputStream + ?Sized,
{
    let mut cursor = 0;
    let mut calls = 0;

    while cursor < buf.len() {
        let remaining = buf.len() - cursor;
        let written = stream
            .write(&buf[cursor..])
            .map_err(|source| WriteError::Failed {
                stream: stream.id(),
                written: cursor,
                source,
            })?;
        calls += 1;

        if written < remaining {
            tracing::trace!(
                stream = %stream.id(),
                written,
                remaining,
                "short write"
            );
        }
        cursor += written.min(remaining);
    }

    Ok(calls)
}

/// Best-effort write of the fatal diagnostic. Errors are dropped since the
/// process is about to exit anyway.
pub fn report_failure<S>(diagnostic: &mut S)
where
    S: OutputStream + ?Sized,
{
    let _ = write_fully(diagnostic, WRITE_FAILED_MSG);
}

/// Owns the scratch buffer and both destinations, and alternates full
/// writes between them until one fails.
#[derive(Debug)]
pub struct StressWriter<P, D> {
    buffer: ScratchBuffer,
    primary: P,
    diagnostic: D,
}

impl<P, D> StressWriter<P, D>
where
    P: OutputStream,
    D: OutputStream,
{
    pub fn new(buffer: ScratchBuffer, primary: P, diagnostic: D) -> Self {
        Self {
            buffer,
            primary,
            diagnostic,
        }
    }

    /// One loop iteration: a full chunk to the primary stream, then one to
    /// the diagnostic stream.
    pub fn step(&mut self) -> Result<(), WriteError> {
        let bytes = self.buffer.as_bytes();

        let calls = write_fully(&mut self.primary, bytes)?;
        tracing::debug!(stream = %StreamId::Primary, calls, "chunk written");

        let calls = write_fully(&mut self.diagnostic, bytes)?;
        tracing::debug!(stream = %StreamId::Diagnostic, calls, "chunk written");

        Ok(())
    }

    /// Loops forever. The only way out is a failed write.
    pub fn run(&mut self) -> Result<Infallible, WriteError> {
        tracing::info!(chunk_size = self.buffer.len(), "starting stress writer");
        loop {
            self.step()?;
        }
    }

    pub fn diagnostic_mut(&mut self) -> &mut D {
        &mut self.diagnostic
    }
}

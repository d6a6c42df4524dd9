use std::io;

use crate::stream::StreamId;

/// Any error returned by the write primitive. There is no recoverable case.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("write to {stream} (fd {fd}) failed after {written} bytes: {source}", fd = .stream.fd())]
    Failed {
        stream: StreamId,
        written: usize,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub fn stream(&self) -> StreamId {
        match self {
            WriteError::Failed { stream, .. } => *stream,
        }
    }
}

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsFd, BorrowedFd};

/// The two process-provided output channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamId {
    Primary,
    Diagnostic,
}

impl StreamId {
    pub fn fd(&self) -> i32 {
        match self {
            StreamId::Primary => 1,
            StreamId::Diagnostic => 2,
        }
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamId::Primary => write!(f, "stdout"),
            StreamId::Diagnostic => write!(f, "stderr"),
        }
    }
}

/// The underlying write primitive.
///
/// A single call may accept fewer bytes than offered; callers that need the
/// whole slice delivered go through [`crate::writer::write_fully`].
#[mockall::automock]
pub trait OutputStream {
    fn id(&self) -> StreamId;

    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// Unbuffered handle on one of the standard descriptors.
///
/// `io::Stdout` sits behind a `LineWriter`, which would split and coalesce
/// the payload, so the descriptor is duplicated into a `File` instead and
/// every `write` maps to exactly one `write(2)`.
#[derive(Debug)]
pub struct Channel {
    id: StreamId,
    file: File,
}

impl Channel {
    pub fn stdout() -> io::Result<Self> {
        Self::open(StreamId::Primary, io::stdout().as_fd())
    }

    pub fn stderr() -> io::Result<Self> {
        Self::open(StreamId::Diagnostic, io::stderr().as_fd())
    }

    fn open(id: StreamId, fd: BorrowedFd<'_>) -> io::Result<Self> {
        let file = File::from(fd.try_clone_to_owned()?);
        Ok(Self { id, file })
    }
}

impl OutputStream for Channel {
    fn id(&self) -> StreamId {
        self.id
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }
}

/// Size of the scratch buffer written on every iteration (1 MiB).
pub const CHUNK_SIZE: usize = 1024 * 1024;

pub const FILL_BYTE: u8 = b'\n';

/// Written to the diagnostic stream right before a fatal exit.
pub const WRITE_FAILED_MSG: &[u8] = b"write failed\n";

pub const FAILURE_EXIT_CODE: i32 = 1;

use std::panic;
use std::process;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::buffer::ScratchBuffer;
use crate::constants::FAILURE_EXIT_CODE;
use crate::stream::Channel;
use crate::writer::{StressWriter, report_failure};

mod buffer;
mod constants;
mod error;
mod stream;
mod writer;

fn main() {
    init_tracing();
    set_panic_hook();

    let (stdout, stderr) = match (Channel::stdout(), Channel::stderr()) {
        (Ok(stdout), Ok(stderr)) => (stdout, stderr),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "failed to acquire output channels");
            process::exit(FAILURE_EXIT_CODE);
        }
    };

    let mut writer = StressWriter::new(ScratchBuffer::new(), stdout, stderr);
    let Err(err) = writer.run();

    tracing::error!(stream = %err.stream(), error = %err, "fatal write failure");
    report_failure(writer.diagnostic_mut());
    process::exit(FAILURE_EXIT_CODE);
}

/// Both standard streams carry the payload, so logging stays off unless
/// `RUST_LOG` asks for it, and never goes to stdout.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}

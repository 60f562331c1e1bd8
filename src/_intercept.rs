use crate::_lease::{Lease, LeaseStamp};
use crate::_parser::{Engine, Sink};
use crate::_util::ParseError;

// How the parser's entry points dispatch. Synthesized carries the lease stamp
// captured when the interception was installed; a mismatch on any later call
// means the parser has been recycled onto an unrelated connection.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum Mode {
    Normal,
    Synthesized(LeaseStamp),
}

impl Mode {
    // Last install wins: a second injection overwrites a still-active one.
    pub(crate) fn install(&mut self, lease: &Lease) {
        *self = Mode::Synthesized(lease.stamp());
    }
}

pub(crate) fn run_ingest(
    mode: &mut Mode,
    lease: &Lease,
    engine: &mut dyn Engine,
    sink: &mut dyn Sink,
    bytes: &[u8],
) -> Result<usize, ParseError> {
    if let Mode::Synthesized(stamp) = *mode {
        if stamp == lease.stamp() {
            if bytes.is_empty() {
                // The zero-length pump notification; no body event.
                return Ok(0);
            }
            sink.on_body(bytes);
            return Ok(bytes.len());
        }
        // Parser reuse: back to normal operation, this call belongs to the
        // new owner.
        *mode = Mode::Normal;
    }
    engine.ingest(sink, bytes)
}

pub(crate) fn run_end(
    mode: &mut Mode,
    lease: &Lease,
    engine: &mut dyn Engine,
    sink: &mut dyn Sink,
) -> Result<(), ParseError> {
    if let Mode::Synthesized(stamp) = *mode {
        // Restore first, so reentrant work triggered by completion sees a
        // parser already back in normal operation.
        *mode = Mode::Normal;
        if stamp == lease.stamp() {
            sink.on_message_complete();
            return Ok(());
        }
    }
    engine.finish(sink)
}

use crate::_events::{Flow, HeadersComplete};
use crate::_intercept::{run_end, run_ingest, Mode};
use crate::_lease::Lease;
use crate::_util::{DeceiveError, ParseError};

// The consumer's event sink: whatever reacts to parsed messages (a server
// loop, a client, a proxy) implements this.
pub trait Sink {
    fn on_headers_complete(&mut self, event: HeadersComplete) -> Flow;
    fn on_body(&mut self, data: &[u8]);
    fn on_message_complete(&mut self);
}

// The real byte-level parser. This crate never tokenizes wire bytes itself;
// it only borrows the engine's event contract and hands calls back to it when
// an interception turns out to be stale.
pub trait Engine {
    fn ingest(&mut self, sink: &mut dyn Sink, bytes: &[u8]) -> Result<usize, ParseError>;
    fn finish(&mut self, sink: &mut dyn Sink) -> Result<(), ParseError>;
}

pub struct Parser {
    lease: Lease,
    mode: Mode,
    engine: Box<dyn Engine>,
    sink: Box<dyn Sink>,
}

impl Parser {
    pub fn new(engine: Box<dyn Engine>, sink: Box<dyn Sink>) -> Self {
        Self {
            lease: Lease::default(),
            mode: Mode::Normal,
            engine,
            sink,
        }
    }

    pub fn lease(&self) -> &Lease {
        &self.lease
    }

    pub(crate) fn lease_mut(&mut self) -> &mut Lease {
        &mut self.lease
    }

    pub fn ingest(&mut self, bytes: &[u8]) -> Result<usize, DeceiveError> {
        run_ingest(
            &mut self.mode,
            &self.lease,
            self.engine.as_mut(),
            self.sink.as_mut(),
            bytes,
        )
        .map_err(Into::into)
    }

    pub fn end(&mut self) -> Result<(), DeceiveError> {
        run_end(
            &mut self.mode,
            &self.lease,
            self.engine.as_mut(),
            self.sink.as_mut(),
        )
        .map_err(Into::into)
    }

    pub(crate) fn install_interception(&mut self) {
        self.mode.install(&self.lease);
    }

    pub(crate) fn emit_headers_complete(&mut self, event: HeadersComplete) -> Flow {
        self.sink.on_headers_complete(event)
    }
}

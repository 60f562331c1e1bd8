use crate::_lease::ConnectionId;
use crate::_parser::Parser;
use crate::_queue::TaskQueue;
use crate::_util::{DeceiveError, SetupError};
use std::cell::RefCell;
use std::rc::Rc;

// A duplex byte channel as the deceiver sees it: an identity, an optionally
// attached (and pooled) parser, and a raw handler for bytes once a consumer
// has switched the connection into tunnel mode.
pub struct Connection {
    id: ConnectionId,
    parser: Option<Rc<RefCell<Parser>>>,
    tunnel: Option<Box<dyn FnMut(&[u8])>>,
    queue: Rc<TaskQueue>,
    eof: bool,
}

impl Connection {
    pub fn new(queue: Rc<TaskQueue>) -> Self {
        Self {
            id: ConnectionId::next(),
            parser: None,
            tunnel: None,
            queue,
            eof: false,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn queue(&self) -> Rc<TaskQueue> {
        self.queue.clone()
    }

    pub fn parser(&self) -> Option<Rc<RefCell<Parser>>> {
        self.parser.clone()
    }

    pub fn attach_parser(&mut self, parser: Rc<RefCell<Parser>>) {
        parser.borrow_mut().lease_mut().acquire(self.id);
        self.parser = Some(parser);
    }

    pub fn detach_parser(&mut self) -> Option<Rc<RefCell<Parser>>> {
        let parser = self.parser.take()?;
        parser.borrow_mut().lease_mut().release(self.id);
        Some(parser)
    }

    // Bytes flowing past the parser after a protocol switch land here.
    pub fn set_tunnel(&mut self, tunnel: impl FnMut(&[u8]) + 'static) {
        self.tunnel = Some(Box::new(tunnel));
    }

    // Bytes arriving "from the network". An empty slice is the zero-length
    // data notification used purely to pump pending event dispatch.
    pub fn deliver(&mut self, bytes: &[u8]) -> Result<usize, DeceiveError> {
        if self.eof && !bytes.is_empty() {
            return Err(SetupError::from("received close, then received more data?").into());
        }
        if let Some(parser) = self.parser.clone() {
            return parser.borrow_mut().ingest(bytes);
        }
        if !bytes.is_empty() {
            if let Some(tunnel) = self.tunnel.as_mut() {
                tunnel(bytes);
                return Ok(bytes.len());
            }
        }
        Ok(0)
    }

    pub fn shutdown(&mut self) -> Result<(), DeceiveError> {
        if self.eof {
            return Ok(());
        }
        self.eof = true;
        match self.parser.clone() {
            Some(parser) => parser.borrow_mut().end(),
            None => Ok(()),
        }
    }
}

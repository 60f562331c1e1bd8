use crate::_connection::Connection;
use crate::_events::{Flow, SyntheticRequest, SyntheticResponse};
use crate::_parser::Parser;
use crate::_synth::{synthesize_request, synthesize_response};
use crate::_util::{DeceiveError, SetupError};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Copy, Clone)]
pub struct DeceiverOptions {
    pub keep_alive: bool,
}

impl Default for DeceiverOptions {
    fn default() -> Self {
        Self { keep_alive: true }
    }
}

pub struct Deceiver {
    connection: Rc<RefCell<Connection>>,
    options: DeceiverOptions,
}

impl Deceiver {
    pub fn new(connection: Rc<RefCell<Connection>>, options: DeceiverOptions) -> Self {
        Self {
            connection,
            options,
        }
    }

    fn parser(&self) -> Result<Rc<RefCell<Parser>>, DeceiveError> {
        self.connection
            .borrow()
            .parser()
            .ok_or_else(|| SetupError::from("no parser attached to connection").into())
    }

    pub fn inject_request(&self, request: &SyntheticRequest) -> Result<Flow, DeceiveError> {
        let parser = self.parser()?;
        let flow = {
            let mut parser = parser.borrow_mut();
            parser.install_interception();
            synthesize_request(&mut parser, request, self.options.keep_alive)
        };
        self.flush_reactions()?;
        Ok(flow)
    }

    pub fn inject_response(&self, response: &SyntheticResponse) -> Result<Flow, DeceiveError> {
        let parser = self.parser()?;
        let flow = {
            let mut parser = parser.borrow_mut();
            parser.install_interception();
            synthesize_response(&mut parser, response, self.options.keep_alive)
        };
        self.flush_reactions()?;
        Ok(flow)
    }

    pub fn inject_body(&self, bytes: &[u8]) -> Result<(), DeceiveError> {
        self.parser()?;
        self.connection.borrow_mut().deliver(bytes)?;
        Ok(())
    }

    pub fn inject_completion(&self) -> Result<(), DeceiveError> {
        self.parser()?;
        self.connection.borrow_mut().shutdown()
    }

    // The consumer's reaction to the synthetic headers-complete must run
    // before control returns to the injector: pump the connection with a
    // zero-length notification, then drain deferred reactions. The queue is
    // flushed with no borrow held, so reactions may touch the connection and
    // the parser freely.
    fn flush_reactions(&self) -> Result<(), DeceiveError> {
        let queue = self.connection.borrow().queue();
        self.connection.borrow_mut().deliver(&[])?;
        queue.flush();
        Ok(())
    }
}

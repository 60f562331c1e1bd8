use http_deceiver::{
    encode_header_list, is_upgrade, Connection, Engine, Flow, Head, Headers, HeadersComplete,
    ParseError, Parser, RequestHead, Sink, TaskQueue,
};
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Head(HeadersComplete),
    Body(Vec<u8>),
    Complete,
}

pub struct RecordingSink {
    pub events: Rc<RefCell<Vec<SinkEvent>>>,
    pub flow: Flow,
}

impl Sink for RecordingSink {
    fn on_headers_complete(&mut self, event: HeadersComplete) -> Flow {
        self.events.borrow_mut().push(SinkEvent::Head(event));
        self.flow
    }

    fn on_body(&mut self, data: &[u8]) {
        self.events.borrow_mut().push(SinkEvent::Body(data.to_vec()));
    }

    fn on_message_complete(&mut self) {
        self.events.borrow_mut().push(SinkEvent::Complete);
    }
}

// A consumer that answers an upgrade the way a real server does: detach the
// parser and take the rest of the connection as a raw tunnel. The switch is
// deferred onto the task queue because the parser is mid-dispatch when the
// headers-complete event arrives.
pub struct TunnelSink {
    pub events: Rc<RefCell<Vec<SinkEvent>>>,
    pub connection: Rc<RefCell<Connection>>,
    pub tunnel_data: Rc<RefCell<Vec<u8>>>,
    pub queue: Rc<TaskQueue>,
}

impl Sink for TunnelSink {
    fn on_headers_complete(&mut self, event: HeadersComplete) -> Flow {
        let upgrade = event.upgrade;
        self.events.borrow_mut().push(SinkEvent::Head(event));
        if upgrade {
            let connection = self.connection.clone();
            let tunnel_data = self.tunnel_data.clone();
            self.queue.defer(move || {
                let mut connection = connection.borrow_mut();
                connection.detach_parser();
                connection
                    .set_tunnel(move |bytes| tunnel_data.borrow_mut().extend_from_slice(bytes));
            });
        }
        Flow::Continue
    }

    fn on_body(&mut self, data: &[u8]) {
        self.events.borrow_mut().push(SinkEvent::Body(data.to_vec()));
    }

    fn on_message_complete(&mut self) {
        self.events.borrow_mut().push(SinkEvent::Complete);
    }
}

// Proves the synthetic path never reaches the real parser.
pub struct RejectEngine;

impl Engine for RejectEngine {
    fn ingest(&mut self, _sink: &mut dyn Sink, _bytes: &[u8]) -> Result<usize, ParseError> {
        Err("real parser must not run during injection".into())
    }

    fn finish(&mut self, _sink: &mut dyn Sink) -> Result<(), ParseError> {
        Err("real parser must not run during injection".into())
    }
}

lazy_static! {
    static ref REQUEST_LINE_RE: Regex = Regex::new(
        r"^(?P<method>[-!#$%&'*+.^_`|~0-9a-zA-Z]+) (?P<target>[\x21-\x7e]+) HTTP/[0-9]\.[0-9]$"
    )
    .unwrap();
    static ref HEADER_FIELD_RE: Regex =
        Regex::new(r"^(?P<name>[-!#$%&'*+.^_`|~0-9a-zA-Z]+):[ \t]*(?P<value>.*?)[ \t]*$").unwrap();
}

#[derive(Copy, Clone)]
enum EngineState {
    Head,
    Body { remaining: usize },
    Done,
}

// A real (if minimal) request parser: request line, header block,
// content-length body framing. Enough to show that delegated calls after a
// stale interception parse an independent request correctly.
pub struct MiniEngine {
    buf: Vec<u8>,
    state: EngineState,
}

impl MiniEngine {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            state: EngineState::Head,
        }
    }
}

fn split_lines(mut head: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    while let Some(pos) = head.windows(2).position(|window| window == b"\r\n") {
        out.push(&head[..pos]);
        head = &head[pos + 2..];
    }
    if !head.is_empty() {
        out.push(head);
    }
    out
}

impl Engine for MiniEngine {
    fn ingest(&mut self, sink: &mut dyn Sink, bytes: &[u8]) -> Result<usize, ParseError> {
        self.buf.extend_from_slice(bytes);
        loop {
            match self.state {
                EngineState::Head => {
                    let pos = match self.buf.windows(4).position(|window| window == b"\r\n\r\n") {
                        Some(pos) => pos,
                        None => return Ok(bytes.len()),
                    };
                    let head: Vec<u8> = self.buf.drain(..pos + 4).collect();
                    let mut lines = split_lines(&head[..pos]).into_iter();
                    let request_line = lines.next().ok_or(ParseError::from("empty head"))?;
                    let captures = REQUEST_LINE_RE
                        .captures(request_line)
                        .ok_or_else(|| ParseError::from("bad request line"))?;
                    let method = captures["method"].to_vec();
                    let target = captures["target"].to_vec();

                    let mut pairs = Vec::new();
                    for line in lines {
                        let captures = HEADER_FIELD_RE
                            .captures(line)
                            .ok_or_else(|| ParseError::from("bad header line"))?;
                        pairs.push((captures["name"].to_vec(), captures["value"].to_vec()));
                    }
                    let headers = Headers::from(pairs);
                    let remaining = match headers.get(b"content-length") {
                        Some(value) => std::str::from_utf8(value)
                            .ok()
                            .and_then(|value| value.trim().parse().ok())
                            .ok_or_else(|| ParseError::from("bad content-length"))?,
                        None => 0,
                    };

                    let event = HeadersComplete {
                        version: (1, 1),
                        header_list: encode_header_list(&headers),
                        upgrade: is_upgrade(Some(&method), &headers),
                        head: Head::Request(RequestHead { method, target }),
                        keep_alive: true,
                    };
                    sink.on_headers_complete(event);
                    self.state = EngineState::Body { remaining };
                }
                EngineState::Body { remaining } => {
                    if remaining == 0 {
                        sink.on_message_complete();
                        self.state = EngineState::Done;
                        continue;
                    }
                    if self.buf.is_empty() {
                        return Ok(bytes.len());
                    }
                    let take = remaining.min(self.buf.len());
                    let chunk: Vec<u8> = self.buf.drain(..take).collect();
                    sink.on_body(&chunk);
                    self.state = EngineState::Body {
                        remaining: remaining - take,
                    };
                }
                EngineState::Done => return Ok(bytes.len()),
            }
        }
    }

    fn finish(&mut self, _sink: &mut dyn Sink) -> Result<(), ParseError> {
        match self.state {
            EngineState::Body { remaining } if remaining > 0 => {
                Err("eof in the middle of a message body".into())
            }
            _ => Ok(()),
        }
    }
}

pub struct Fixture {
    pub connection: Rc<RefCell<Connection>>,
    pub parser: Rc<RefCell<Parser>>,
    pub events: Rc<RefCell<Vec<SinkEvent>>>,
    pub queue: Rc<TaskQueue>,
}

pub fn fixture_with(engine: Box<dyn Engine>, flow: Flow) -> Fixture {
    let queue = Rc::new(TaskQueue::new());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        events: events.clone(),
        flow,
    };
    let parser = Rc::new(RefCell::new(Parser::new(engine, Box::new(sink))));
    let connection = Rc::new(RefCell::new(Connection::new(queue.clone())));
    connection.borrow_mut().attach_parser(parser.clone());
    Fixture {
        connection,
        parser,
        events,
        queue,
    }
}

pub fn fixture() -> Fixture {
    fixture_with(Box::new(RejectEngine), Flow::Continue)
}

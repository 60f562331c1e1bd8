mod _connection;
mod _deceiver;
mod _events;
mod _headers;
mod _intercept;
mod _lease;
mod _parser;
mod _queue;
mod _synth;
mod _util;

pub use _connection::Connection;
pub use _deceiver::{Deceiver, DeceiverOptions};
pub use _events::{
    Flow, Head, HeadersComplete, RequestHead, ResponseHead, SyntheticRequest, SyntheticResponse,
};
pub use _headers::{encode_header_list, is_upgrade, Headers};
pub use _lease::{ConnectionId, Lease, LeaseStamp};
pub use _parser::{Engine, Parser, Sink};
pub use _queue::TaskQueue;
pub use _util::{DeceiveError, ParseError, SetupError};

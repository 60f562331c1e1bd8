use crate::_headers::Headers;
use std::fmt::{self, Formatter};

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SyntheticRequest {
    pub method: Vec<u8>,
    pub target: Vec<u8>,
    pub headers: Headers,
}

impl std::fmt::Debug for SyntheticRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticRequest")
            .field("method", &String::from_utf8_lossy(&self.method))
            .field("target", &String::from_utf8_lossy(&self.target))
            .field("headers", &self.headers)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntheticResponse {
    pub status_code: u16,
    pub reason: Vec<u8>,
    pub headers: Headers,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub method: Vec<u8>,
    pub target: Vec<u8>,
}

impl std::fmt::Debug for RequestHead {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHead")
            .field("method", &String::from_utf8_lossy(&self.method))
            .field("target", &String::from_utf8_lossy(&self.target))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status_code: u16,
    pub reason: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Request(RequestHead),
    Response(ResponseHead),
}

impl Head {
    pub fn method(&self) -> Option<&[u8]> {
        match self {
            Self::Request(request) => Some(&request.method),
            Self::Response(_) => None,
        }
    }
}

impl From<&SyntheticRequest> for Head {
    fn from(request: &SyntheticRequest) -> Self {
        Self::Request(RequestHead {
            method: request.method.clone(),
            target: request.target.clone(),
        })
    }
}

impl From<&SyntheticResponse> for Head {
    fn from(response: &SyntheticResponse) -> Self {
        Self::Response(ResponseHead {
            status_code: response.status_code,
            reason: response.reason.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersComplete {
    // Always 1/1: synthesized messages use HTTP/1.1 framing regardless of
    // whatever version the real connection negotiated.
    pub version: (u8, u8),
    pub header_list: Vec<Vec<u8>>,
    pub head: Head,
    pub upgrade: bool,
    pub keep_alive: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Pause,
}

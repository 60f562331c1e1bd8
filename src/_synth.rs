use crate::_events::{Flow, Head, HeadersComplete, SyntheticRequest, SyntheticResponse};
use crate::_headers::{encode_header_list, is_upgrade, Headers};
use crate::_parser::Parser;

fn fire(parser: &mut Parser, head: Head, headers: &Headers, keep_alive: bool) -> Flow {
    let event = HeadersComplete {
        version: (1, 1),
        header_list: encode_header_list(headers),
        upgrade: is_upgrade(head.method(), headers),
        head,
        keep_alive,
    };
    // The sink sees this exactly once, synchronously; its continuation value
    // is handed back unchanged so the caller can honor a pause.
    parser.emit_headers_complete(event)
}

pub(crate) fn synthesize_request(
    parser: &mut Parser,
    request: &SyntheticRequest,
    keep_alive: bool,
) -> Flow {
    fire(parser, Head::from(request), &request.headers, keep_alive)
}

pub(crate) fn synthesize_response(
    parser: &mut Parser,
    response: &SyntheticResponse,
    keep_alive: bool,
) -> Flow {
    fire(parser, Head::from(response), &response.headers, keep_alive)
}

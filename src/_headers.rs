use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    // Whole-token match with word-character boundaries (underscore counts
    // as a word character): "keep-alive, Upgrade" matches, "upgraded" and
    // "x_upgrade" do not.
    static ref CONNECTION_UPGRADE_RE: Regex =
        Regex::new(r"(?i)(^|[^0-9A-Za-z_])upgrade($|[^0-9A-Za-z_])").unwrap();
}

// Entries are (raw_name, lowered_name, value). Repeated names are legal and
// kept in insertion order; lookup returns the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Headers(Vec<(Vec<u8>, Vec<u8>, Vec<u8>)>);

impl Headers {
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.0
            .iter()
            .map(|(raw_name, _, value)| (raw_name.as_slice(), value.as_slice()))
    }

    pub fn get(&self, name: &[u8]) -> Option<&[u8]> {
        let name = name.to_ascii_lowercase();
        self.0
            .iter()
            .find(|(_, lowered, _)| lowered == &name)
            .map(|(_, _, value)| value.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(Vec<u8>, Vec<u8>)>> for Headers {
    fn from(pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        Headers(
            pairs
                .into_iter()
                .map(|(name, value)| {
                    let lowered = name.to_ascii_lowercase();
                    (name, lowered, value)
                })
                .collect(),
        )
    }
}

pub fn encode_header_list(headers: &Headers) -> Vec<Vec<u8>> {
    let mut out = Vec::with_capacity(2 * headers.len());
    for (name, value) in headers.iter() {
        out.push(name.to_vec());
        out.push(value.to_vec());
    }
    out
}

pub fn is_upgrade(method: Option<&[u8]>, headers: &Headers) -> bool {
    if method == Some(b"CONNECT") {
        return true;
    }
    if let Some(value) = headers.get(b"upgrade") {
        if !value.is_empty() {
            return true;
        }
    }
    match headers.get(b"connection") {
        Some(value) => CONNECTION_UPGRADE_RE.is_match(value),
        None => false,
    }
}

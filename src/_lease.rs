use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ConnectionId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// Who currently drives the parser. Every ownership change bumps the
// generation, so a stamp taken before the change can never compare equal
// again, even if the same connection re-acquires the parser later.
#[derive(Debug, Clone, Default)]
pub struct Lease {
    owner: Option<ConnectionId>,
    generation: u64,
}

impl Lease {
    pub fn owner(&self) -> Option<ConnectionId> {
        self.owner
    }

    pub fn acquire(&mut self, owner: ConnectionId) {
        self.owner = Some(owner);
        self.generation += 1;
    }

    pub fn release(&mut self, owner: ConnectionId) {
        if self.owner == Some(owner) {
            self.owner = None;
            self.generation += 1;
        }
    }

    pub fn stamp(&self) -> LeaseStamp {
        LeaseStamp {
            owner: self.owner,
            generation: self.generation,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct LeaseStamp {
    owner: Option<ConnectionId>,
    generation: u64,
}

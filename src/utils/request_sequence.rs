//! Guards a page against responses from requests it no longer cares about.
//!
//! When the route identifier changes while a fetch is in flight, the old
//! fetch is not cancelled. Each fetch takes a ticket before it starts and
//! only writes its result back if that ticket is still the latest one.

/// Issued per request; compared against the sequence when the response lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter owned by one component instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before
    pub fn begin(&mut self) -> RequestTicket {
        self.latest = self.latest.wrapping_add(1);
        RequestTicket(self.latest)
    }

    /// True if no newer request has started since `ticket` was issued
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut seq = RequestSequence::new();
        let ticket = seq.begin();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_out_of_order_completion() {
        // id "a" then id "b"; "b" resolves first, "a" resolves late
        let mut seq = RequestSequence::new();
        let slow = seq.begin();
        let fast = seq.begin();

        let mut applied = Vec::new();
        for (ticket, name) in [(fast, "b"), (slow, "a")] {
            if seq.is_current(ticket) {
                applied.push(name);
            }
        }

        assert_eq!(applied, vec!["b"]);
    }
}

//! Latest-request-wins bookkeeping for comparison fetches

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out tickets; only the most recent one is current.
///
/// A fetch started before the latest one may resolve after it. Checking the
/// ticket before applying a response keeps older results from overwriting
/// newer ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, making every earlier ticket stale
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_fresh_sequencer_has_no_current_ticket() {
        let mut other = RequestSequencer::new();
        let ticket = other.issue();
        assert!(!RequestSequencer::new().is_current(ticket));
    }
}

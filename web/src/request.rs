/// Hands out increasing tickets so that only the newest request of a flow
/// may apply its result. Older responses are dropped on arrival.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn out_of_order_resolution_keeps_newest() {
        let mut tracker = RequestTracker::default();
        let stale = tracker.begin();
        let fresh = tracker.begin();

        // fresh resolves first, stale arrives afterwards
        let mut applied = Vec::new();
        for ticket in [fresh, stale] {
            if tracker.is_current(ticket) {
                applied.push(ticket);
            }
        }

        assert_eq!(applied, vec![fresh]);
    }
}

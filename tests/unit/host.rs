use super::*;

#[derive(Default)]
struct FakeHost {
    next: u64,
    live: Vec<(HostEvent, SubscriptionId)>,
    unsupported: Vec<HostEvent>,
}

impl HostEnvironment for FakeHost {
    fn subscribe(&mut self, event: HostEvent) -> Option<SubscriptionId> {
        if self.unsupported.contains(&event) {
            return None;
        }
        self.next += 1;
        let id = SubscriptionId(self.next);
        self.live.push((event, id));
        Some(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.live.retain(|(_, live)| *live != id);
    }
}

#[test]
fn acquire_is_idempotent_per_event() {
    let mut host = FakeHost::default();
    let mut subs = Subscriptions::new();
    assert!(subs.acquire(&mut host, HostEvent::Scroll));
    assert!(subs.acquire(&mut host, HostEvent::Scroll));
    assert_eq!(subs.len(), 1);
    assert_eq!(host.live.len(), 1);
}

#[test]
fn unsupported_events_are_reported_not_fatal() {
    let mut host = FakeHost {
        unsupported: vec![HostEvent::PointerMove],
        ..FakeHost::default()
    };
    let mut subs = Subscriptions::new();
    assert!(!subs.acquire(&mut host, HostEvent::PointerMove));
    assert!(subs.acquire(&mut host, HostEvent::Resize));
    assert!(!subs.is_active(HostEvent::PointerMove));
    assert!(subs.is_active(HostEvent::Resize));
}

#[test]
fn release_all_removes_every_listener() {
    let mut host = FakeHost::default();
    let mut subs = Subscriptions::new();
    for e in [HostEvent::Scroll, HostEvent::PointerMove, HostEvent::Resize] {
        subs.acquire(&mut host, e);
    }
    assert_eq!(host.live.len(), 3);
    subs.release_all(&mut host);
    assert!(subs.is_empty());
    assert!(host.live.is_empty());
}

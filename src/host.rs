/// Host event streams the intro view listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HostEvent {
    /// Document scroll position changes.
    Scroll,
    /// Pointer moves anywhere over the window.
    PointerMove,
    /// Viewport resizes.
    Resize,
}

/// Opaque handle returned by the host for one listener registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The slice of the host environment the engine needs: listener registration.
///
/// `subscribe` returns `None` when the host cannot deliver that event kind at all (e.g. no
/// pointer device); the engine then falls back to neutral values for that input.
pub trait HostEnvironment {
    /// Register a listener for `event`.
    fn subscribe(&mut self, event: HostEvent) -> Option<SubscriptionId>;
    /// Remove a listener previously returned by [`HostEnvironment::subscribe`].
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Listener registrations owned by one mounted view.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<(HostEvent, SubscriptionId)>,
}

impl Subscriptions {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `event`; returns whether the host supports it.
    pub fn acquire(&mut self, host: &mut dyn HostEnvironment, event: HostEvent) -> bool {
        if self.is_active(event) {
            return true;
        }
        match host.subscribe(event) {
            Some(id) => {
                self.active.push((event, id));
                true
            }
            None => {
                tracing::debug!(?event, "host does not support event; using neutral input");
                false
            }
        }
    }

    /// Whether a listener for `event` is registered.
    pub fn is_active(&self, event: HostEvent) -> bool {
        self.active.iter().any(|(e, _)| *e == event)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no registrations are live.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Unsubscribe everything, in reverse acquisition order.
    pub fn release_all(&mut self, host: &mut dyn HostEnvironment) {
        while let Some((event, id)) = self.active.pop() {
            tracing::debug!(?event, id = id.0, "releasing host listener");
            host.unsubscribe(id);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;

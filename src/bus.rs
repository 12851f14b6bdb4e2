use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use dashmap::DashMap;

use crate::section::SectionId;

type Handler = Arc<dyn Fn(SectionId) + Send + Sync>;

/// In-page pub/sub channel for navigation requests.
///
/// Producers (nav bar, hero buttons, footer links) emit a [`SectionId`]; the mounted shell
/// is the only subscriber. Delivery happens inside `emit`, nothing is queued.
#[derive(Clone, Default)]
pub struct NavBus {
    inner: Arc<BusInner>,
}

#[derive(Default)]
struct BusInner {
    next_id: AtomicU64,
    handlers: DashMap<u64, Handler>,
}

/// Handle returned by [`NavBus::subscribe`]. Dropping it does not unsubscribe; call `cancel`.
#[derive(Clone)]
pub struct Subscription {
    id: u64,
    bus: NavBus,
}

impl Subscription {
    pub fn cancel(&self) {
        if self.bus.inner.handlers.remove(&self.id).is_some() {
            log::debug!("nav bus: subscription {} cancelled", self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.bus.inner.handlers.contains_key(&self.id)
    }
}

impl NavBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(SectionId) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.handlers.insert(id, Arc::new(handler));
        log::debug!("nav bus: subscription {id} registered");
        Subscription {
            id,
            bus: self.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.len()
    }

    /// Delivers `target` to every current subscriber and returns how many were reached.
    ///
    /// A subscription cancelled by an earlier handler during the same emit is skipped.
    pub fn emit(&self, target: SectionId) -> usize {
        // snapshot first so handlers can (un)subscribe without holding a shard lock
        let handlers = self
            .inner
            .handlers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect::<Vec<_>>();
        if handlers.is_empty() {
            log::debug!("nav bus: no subscriber for {target}, dropped");
        }
        let mut reached = 0;
        for (id, handler) in handlers.iter() {
            if !self.inner.handlers.contains_key(id) {
                continue;
            }
            handler(target);
            reached += 1;
        }
        reached
    }

    /// Emits a section given by name; unknown names are dropped.
    pub fn emit_named(&self, name: &str) -> usize {
        match name.parse::<SectionId>() {
            Ok(target) => self.emit(target),
            Err(e) => {
                log::warn!("nav bus: {e}");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorder(bus: &NavBus) -> (Subscription, Arc<Mutex<Vec<SectionId>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let sub = bus.subscribe(move |id| sink.lock().unwrap().push(id));
        (sub, seen)
    }

    #[test]
    fn test_emit_without_subscriber_is_dropped() {
        let bus = NavBus::new();
        assert_eq!(bus.emit(SectionId::Contact), 0);
        // a later subscriber does not see the earlier message
        let (_sub, seen) = recorder(&bus);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_delivery_is_synchronous_and_once() {
        let bus = NavBus::new();
        let (_sub, seen) = recorder(&bus);
        assert_eq!(bus.emit(SectionId::Projects), 1);
        assert_eq!(*seen.lock().unwrap(), vec![SectionId::Projects]);
        bus.emit(SectionId::About);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![SectionId::Projects, SectionId::About]
        );
    }

    #[test]
    fn test_cancel_stops_delivery() {
        let bus = NavBus::new();
        let (sub, seen) = recorder(&bus);
        assert!(sub.is_active());
        sub.cancel();
        assert!(!sub.is_active());
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.emit(SectionId::Skills), 0);
        assert!(seen.lock().unwrap().is_empty());
        // cancelling twice is harmless
        sub.cancel();
    }

    #[test]
    fn test_remount_does_not_leak_handlers() {
        let bus = NavBus::new();
        for _ in 0..5 {
            let (sub, _) = recorder(&bus);
            sub.cancel();
        }
        let (_sub, seen) = recorder(&bus);
        assert_eq!(bus.emit(SectionId::Home), 1);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_handler_may_cancel_itself() {
        let bus = NavBus::new();
        let slot = Arc::new(Mutex::new(None::<Subscription>));
        let inner = slot.clone();
        let sub = bus.subscribe(move |_| {
            if let Some(sub) = inner.lock().unwrap().take() {
                sub.cancel();
            }
        });
        *slot.lock().unwrap() = Some(sub);
        assert_eq!(bus.emit(SectionId::About), 1);
        assert_eq!(bus.emit(SectionId::About), 0);
    }

    #[test]
    fn test_handler_cancelled_mid_emit_is_skipped() {
        let bus = NavBus::new();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let slots = Arc::new(Mutex::new(Vec::<Subscription>::new()));
        // whichever handler runs first cancels the other
        for name in ["first", "second"] {
            let hits = hits.clone();
            let slots = slots.clone();
            let inner = slots.clone();
            let sub = bus.subscribe(move |_| {
                hits.lock().unwrap().push(name);
                for other in inner.lock().unwrap().iter() {
                    other.cancel();
                }
            });
            slots.lock().unwrap().push(sub);
        }
        assert_eq!(bus.emit(SectionId::Projects), 1);
        assert_eq!(hits.lock().unwrap().len(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_emit_named_drops_unknown() {
        let bus = NavBus::new();
        let (_sub, seen) = recorder(&bus);
        assert_eq!(bus.emit_named("resume"), 0);
        assert_eq!(bus.emit_named("contact"), 1);
        assert_eq!(*seen.lock().unwrap(), vec![SectionId::Contact]);
    }
}

//! Typed registration point for marker consumers
//!
//! Visualization code registers one handler per [`SinkSlot`]. The loader
//! dispatches every batch through the sink; a payload whose slot has no
//! handler yet is logged and held until one registers.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};

use crate::app::models::{
    CrewRoster, FireballMarker, MeteoriteMarker, OrbitalPositionMarker, TrackedObject,
};

/// Destination of one kind of marker data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkSlot {
    FireballMarkers,
    MeteoriteMarkers,
    OrbitalPosition(TrackedObject),
    CrewRoster,
}

impl SinkSlot {
    /// Every slot, in dispatch order
    pub const ALL: [SinkSlot; 5] = [
        SinkSlot::FireballMarkers,
        SinkSlot::MeteoriteMarkers,
        SinkSlot::OrbitalPosition(TrackedObject::Iss),
        SinkSlot::OrbitalPosition(TrackedObject::Tiangong),
        SinkSlot::CrewRoster,
    ];
}

impl fmt::Display for SinkSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkSlot::FireballMarkers => f.write_str("fireballs"),
            SinkSlot::MeteoriteMarkers => f.write_str("meteorites"),
            SinkSlot::OrbitalPosition(object) => write!(f, "{} position", object),
            SinkSlot::CrewRoster => f.write_str("crew"),
        }
    }
}

/// Data delivered to a slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "slot", content = "data", rename_all = "snake_case")]
pub enum MarkerPayload {
    Fireballs(Vec<FireballMarker>),
    Meteorites(Vec<MeteoriteMarker>),
    OrbitalPosition(OrbitalPositionMarker),
    CrewRoster(CrewRoster),
}

impl MarkerPayload {
    /// Slot this payload is routed to
    pub fn slot(&self) -> SinkSlot {
        match self {
            MarkerPayload::Fireballs(_) => SinkSlot::FireballMarkers,
            MarkerPayload::Meteorites(_) => SinkSlot::MeteoriteMarkers,
            MarkerPayload::OrbitalPosition(marker) => SinkSlot::OrbitalPosition(marker.object),
            MarkerPayload::CrewRoster(_) => SinkSlot::CrewRoster,
        }
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        match self {
            MarkerPayload::Fireballs(markers) => format!("{} fireball markers", markers.len()),
            MarkerPayload::Meteorites(markers) => format!("{} meteorite markers", markers.len()),
            MarkerPayload::OrbitalPosition(marker) => format!(
                "{} at ({:.2}, {:.2}) {:.0} km{}",
                marker.object,
                marker.lat,
                marker.lng,
                marker.altitude_km,
                if marker.simulated { " (simulated)" } else { "" }
            ),
            MarkerPayload::CrewRoster(roster) => format!(
                "{} people aboard {} crafts",
                roster.count,
                roster.crafts.len()
            ),
        }
    }
}

/// Consumer callback for one slot
pub type MarkerHandler = Box<dyn FnMut(MarkerPayload) + Send>;

/// Slot-keyed handler registry
#[derive(Default)]
pub struct MarkerSink {
    handlers: HashMap<SinkSlot, MarkerHandler>,
    pending: HashMap<SinkSlot, Vec<MarkerPayload>>,
}

impl MarkerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler` for `slot`, replacing any previous handler
    ///
    /// Payloads held for the slot are delivered to the new handler first, in
    /// arrival order.
    pub fn register<F>(&mut self, slot: SinkSlot, handler: F)
    where
        F: FnMut(MarkerPayload) + Send + 'static,
    {
        let mut handler: MarkerHandler = Box::new(handler);

        if let Some(held) = self.pending.remove(&slot) {
            debug!("Flushing {} held payloads to {} handler", held.len(), slot);
            for payload in held {
                handler(payload);
            }
        }

        self.handlers.insert(slot, handler);
    }

    /// Remove the handler for `slot`, returning whether one was installed
    pub fn unregister(&mut self, slot: SinkSlot) -> bool {
        self.handlers.remove(&slot).is_some()
    }

    pub fn is_registered(&self, slot: SinkSlot) -> bool {
        self.handlers.contains_key(&slot)
    }

    /// Route a payload to its slot's handler, or hold it when none is registered
    ///
    /// Held payloads are never dropped: they accumulate for as long as the
    /// slot stays unregistered, across any number of loads. Consumers that
    /// reuse a sink without registering a slot should drain it with
    /// [`MarkerSink::take_pending`].
    pub fn dispatch(&mut self, payload: MarkerPayload) {
        let slot = payload.slot();
        match self.handlers.get_mut(&slot) {
            Some(handler) => {
                debug!("Dispatching {} to {}", payload.summary(), slot);
                handler(payload);
            }
            None => {
                info!(
                    "No handler for {}, holding {}",
                    slot,
                    payload.summary()
                );
                self.pending.entry(slot).or_default().push(payload);
            }
        }
    }

    /// Payloads held for `slot`
    pub fn pending(&self, slot: SinkSlot) -> &[MarkerPayload] {
        self.pending.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Take the payloads held for `slot`, leaving none behind
    pub fn take_pending(&mut self, slot: SinkSlot) -> Vec<MarkerPayload> {
        self.pending.remove(&slot).unwrap_or_default()
    }
}

impl fmt::Debug for MarkerSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerSink")
            .field("registered", &self.handlers.keys().collect::<Vec<_>>())
            .field(
                "pending",
                &self
                    .pending
                    .iter()
                    .map(|(slot, held)| (slot, held.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn position(object: TrackedObject, lat: f64) -> MarkerPayload {
        MarkerPayload::OrbitalPosition(OrbitalPositionMarker {
            object,
            lat,
            lng: 0.0,
            altitude_km: 400.0,
            timestamp: 0,
            simulated: true,
        })
    }

    fn recorder() -> (Arc<Mutex<Vec<MarkerPayload>>>, impl FnMut(MarkerPayload) + Send + 'static) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        (received, move |payload| sink.lock().unwrap().push(payload))
    }

    #[test]
    fn test_payload_slots() {
        assert_eq!(
            MarkerPayload::Fireballs(Vec::new()).slot(),
            SinkSlot::FireballMarkers
        );
        assert_eq!(
            MarkerPayload::Meteorites(Vec::new()).slot(),
            SinkSlot::MeteoriteMarkers
        );
        assert_eq!(
            position(TrackedObject::Tiangong, 0.0).slot(),
            SinkSlot::OrbitalPosition(TrackedObject::Tiangong)
        );
        assert_eq!(
            MarkerPayload::CrewRoster(CrewRoster::default()).slot(),
            SinkSlot::CrewRoster
        );
    }

    #[test]
    fn test_dispatch_to_registered_handler() {
        let (received, handler) = recorder();
        let mut sink = MarkerSink::new();
        sink.register(SinkSlot::OrbitalPosition(TrackedObject::Iss), handler);

        sink.dispatch(position(TrackedObject::Iss, 1.0));
        sink.dispatch(position(TrackedObject::Tiangong, 2.0));

        assert_eq!(*received.lock().unwrap(), vec![position(TrackedObject::Iss, 1.0)]);
        assert_eq!(
            sink.pending(SinkSlot::OrbitalPosition(TrackedObject::Tiangong)).len(),
            1
        );
    }

    #[test]
    fn test_unregistered_payloads_flush_on_register_in_order() {
        let mut sink = MarkerSink::new();
        let slot = SinkSlot::OrbitalPosition(TrackedObject::Iss);

        sink.dispatch(position(TrackedObject::Iss, 1.0));
        sink.dispatch(position(TrackedObject::Iss, 2.0));
        assert_eq!(sink.pending(slot).len(), 2);

        let (received, handler) = recorder();
        sink.register(slot, handler);

        assert!(sink.pending(slot).is_empty());
        assert_eq!(
            *received.lock().unwrap(),
            vec![
                position(TrackedObject::Iss, 1.0),
                position(TrackedObject::Iss, 2.0)
            ]
        );
    }

    #[test]
    fn test_register_replaces_handler() {
        let (first, first_handler) = recorder();
        let (second, second_handler) = recorder();
        let mut sink = MarkerSink::new();

        sink.register(SinkSlot::CrewRoster, first_handler);
        sink.register(SinkSlot::CrewRoster, second_handler);
        sink.dispatch(MarkerPayload::CrewRoster(CrewRoster::default()));

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unregister_and_take_pending() {
        let (_, handler) = recorder();
        let mut sink = MarkerSink::new();

        sink.register(SinkSlot::FireballMarkers, handler);
        assert!(sink.is_registered(SinkSlot::FireballMarkers));
        assert!(sink.unregister(SinkSlot::FireballMarkers));
        assert!(!sink.unregister(SinkSlot::FireballMarkers));

        sink.dispatch(MarkerPayload::Fireballs(Vec::new()));
        let held = sink.take_pending(SinkSlot::FireballMarkers);

        assert_eq!(held, vec![MarkerPayload::Fireballs(Vec::new())]);
        assert!(sink.take_pending(SinkSlot::FireballMarkers).is_empty());
    }

    #[test]
    fn test_held_payloads_accumulate_until_taken() {
        let mut sink = MarkerSink::new();
        let slot = SinkSlot::OrbitalPosition(TrackedObject::Tiangong);

        for lat in [1.0, 2.0, 3.0] {
            sink.dispatch(position(TrackedObject::Tiangong, lat));
        }
        assert_eq!(sink.pending(slot).len(), 3);

        let held = sink.take_pending(slot);
        assert_eq!(held.last(), Some(&position(TrackedObject::Tiangong, 3.0)));
        assert!(sink.pending(slot).is_empty());

        sink.dispatch(position(TrackedObject::Tiangong, 4.0));
        assert_eq!(sink.pending(slot), [position(TrackedObject::Tiangong, 4.0)]);
    }

    #[test]
    fn test_slot_display() {
        let names: Vec<String> = SinkSlot::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec![
                "fireballs",
                "meteorites",
                "ISS position",
                "Tiangong position",
                "crew"
            ]
        );
    }

    #[test]
    fn test_payload_serializes_with_slot_tag() {
        let json = serde_json::to_value(position(TrackedObject::Iss, 5.0)).unwrap();

        assert_eq!(json["slot"], "orbital_position");
        assert_eq!(json["data"]["object"], "ISS");
        assert_eq!(json["data"]["simulated"], true);
    }
}

//! Engine trait for MVI architecture.

use super::event::Event;
use super::intent::Intent;

/// An engine consumes intents and emits events.
///
/// Unlike a pure reducer, an engine may perform asynchronous side effects
/// between an intent arriving and the corresponding events being emitted.
/// Events of one intent may interleave with events of another.
pub trait Engine {
    /// The intent type this engine handles.
    type Intent: Intent;

    /// The event type this engine emits.
    type Event: Event;

    /// Feed one intent into the engine.
    ///
    /// Never blocks. Dispatching into a torn-down engine is a silent
    /// no-op, matching a channel send whose receiver is gone.
    fn dispatch(&self, intent: Self::Intent);
}

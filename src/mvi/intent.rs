//! Base trait for intents (user/lifecycle actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, pull-to-refresh)
/// - Lifecycle events (a screen becoming visible)
///
/// Intents are consumed exactly once by the engine they are dispatched to.
pub trait Intent: Send + 'static {}

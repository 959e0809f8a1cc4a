//! Base trait for events emitted toward the presentation surface.

/// Marker trait for event objects.
///
/// Events represent state changes the surface reacts to: data that became
/// available, a failure to report, a control to enable or disable. Events
/// carry everything the surface needs; the surface never queries the
/// engine back.
pub trait Event: Send + 'static {}

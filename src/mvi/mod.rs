//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between a presentation surface and an engine.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Engine ──→ Event ──→ Surface
//!    ↑                             │
//!    └─────────────────────────────┘
//! ```
//!
//! - **Intent**: user actions or lifecycle events fed into an engine
//! - **Engine**: the stateful stage that turns intents into events,
//!   performing asynchronous work along the way
//! - **Event**: state changes emitted for the surface to render

mod engine;
mod event;
mod intent;

pub use engine::Engine;
pub use event::Event;
pub use intent::Intent;

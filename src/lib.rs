//! Unidirectional reactive quote feed.
//!
//! A presentation surface feeds user intents into a [`quote::QuoteEngine`],
//! which drives a single asynchronous quote fetch per intent and emits the
//! resulting state changes back as events:
//!
//! ```text
//! Surface ──Intent──→ Engine ──(fetch)──→ quote service
//!    ↑                  │
//!    └─────Event────────┘
//! ```
//!
//! The surface itself (rendering, button wiring, view lifecycle) is an
//! external collaborator; this crate only provides the transform in the
//! middle and the fetcher behind it.

pub mod mvi;
pub mod quote;

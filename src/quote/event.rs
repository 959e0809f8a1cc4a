//! Events the quote engine emits toward the presentation surface.

use crate::mvi::Event;
use crate::quote::error::FetchError;
use crate::quote::model::Quote;

/// State changes produced by the quote engine.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteEvent {
    /// Enable or disable the refresh control.
    ///
    /// Emitted with `enabled: false` immediately before every fetch
    /// attempt and with `enabled: true` once that attempt resolves,
    /// regardless of outcome.
    RefreshEnabled { enabled: bool },

    /// A fetch attempt completed with a fresh quote.
    FetchSucceeded { quote: Quote },

    /// A fetch attempt failed. The surface displays a description of
    /// the error in place of the quote text.
    FetchFailed { error: FetchError },
}

impl Event for QuoteEvent {}

//! The intent-to-event transform at the heart of the crate.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::mvi::Engine;
use crate::quote::event::QuoteEvent;
use crate::quote::fetcher::RandomQuoteFetcher;
use crate::quote::intent::QuoteIntent;

/// Converts a stream of [`QuoteIntent`]s into a stream of [`QuoteEvent`]s.
///
/// Construction spawns the intent pump on the ambient Tokio runtime. The
/// engine lives as long as the owning presentation surface; dropping it,
/// together with every sender handed out by [`intent_sender`], stops the
/// pump. In-flight fetches are not cancelled on teardown; their events are
/// discarded once the receiver is gone.
///
/// Overlapping fetches are deliberately not serialized: each intent opens
/// its own disable/enable bracket, and brackets of concurrent attempts
/// interleave in whatever order the fetches resolve.
///
/// [`intent_sender`]: QuoteEngine::intent_sender
pub struct QuoteEngine {
    intents: mpsc::UnboundedSender<QuoteIntent>,
    events: mpsc::UnboundedReceiver<QuoteEvent>,
}

impl QuoteEngine {
    /// Spawn an engine driving `fetcher`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(fetcher: Arc<dyn RandomQuoteFetcher>) -> Self {
        let (intent_tx, mut intent_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(intent) = intent_rx.recv().await {
                tracing::debug!(?intent, "handling intent");
                match intent {
                    QuoteIntent::ViewAppeared | QuoteIntent::RefreshRequested => {
                        handle_fetch(Arc::clone(&fetcher), event_tx.clone());
                    }
                }
            }
            tracing::debug!("intent senders dropped, engine pump exiting");
        });

        Self {
            intents: intent_tx,
            events: event_rx,
        }
    }

    /// Clone of the intent-side sender, for surfaces that feed intents
    /// from their own tasks.
    pub fn intent_sender(&self) -> mpsc::UnboundedSender<QuoteIntent> {
        self.intents.clone()
    }

    /// Receive the next event.
    ///
    /// The event sequence has no natural end while the engine is alive;
    /// `None` is returned only after teardown, once pending events have
    /// been drained.
    pub async fn next_event(&mut self) -> Option<QuoteEvent> {
        self.events.recv().await
    }
}

impl Engine for QuoteEngine {
    type Intent = QuoteIntent;
    type Event = QuoteEvent;

    fn dispatch(&self, intent: QuoteIntent) {
        let _ = self.intents.send(intent);
    }
}

/// One fetch attempt: disable the refresh control, fetch, report, re-enable.
///
/// The disable event is sent before the fetch task is spawned, so it is
/// ordered ahead of any completion event of this attempt and ahead of the
/// pump examining the next intent. The completion side emits the terminal
/// event first and the re-enable second; exactly one of each per attempt.
fn handle_fetch(fetcher: Arc<dyn RandomQuoteFetcher>, events: mpsc::UnboundedSender<QuoteEvent>) {
    let _ = events.send(QuoteEvent::RefreshEnabled { enabled: false });

    tokio::spawn(async move {
        match fetcher.fetch_random_quote().await {
            Ok(quote) => {
                let _ = events.send(QuoteEvent::FetchSucceeded { quote });
            }
            Err(error) => {
                tracing::warn!(error = %error, "quote fetch failed");
                let _ = events.send(QuoteEvent::FetchFailed { error });
            }
        }
        let _ = events.send(QuoteEvent::RefreshEnabled { enabled: true });
    });
}

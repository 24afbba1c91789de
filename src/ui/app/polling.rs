use tokio::io::{AsyncBufRead, Lines};

use super::MarketApp;
use super::store::Action;

/// What woke the terminal loop.
#[derive(Debug)]
pub enum Event {
    /// A line of input, or `None` at end of input.
    Input(Option<String>),
    /// One or more request completions were reduced.
    Completed,
}

impl MarketApp {
    /// Reduce completions that have already arrived.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.complete(action);
            any = true;
        }
        any
    }

    /// Wait for whichever comes first: a line of input or a request completion.
    /// Completions are reduced here; input is handed back to the caller.
    pub async fn next_event<R>(&mut self, lines: &mut Lines<R>) -> std::io::Result<Event>
    where
        R: AsyncBufRead + Unpin,
    {
        tokio::select! {
            line = lines.next_line() => line.map(Event::Input),
            Some(action) = self.action_rx.recv() => {
                self.complete(action);
                self.poll_action_messages();
                Ok(Event::Completed)
            }
        }
    }

    /// Wait for every outstanding request, including those started by completions
    /// reduced along the way. Scripted runs only: a request that never resolves
    /// blocks this forever.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.action_rx.recv().await {
                Some(action) => self.complete(action),
                None => break,
            }
        }
    }

    fn complete(&mut self, action: Action) {
        if matches!(action, Action::Async(_)) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.dispatch(action);
    }
}

// The polling loop: list the supported pairs once, then report each new bar.
use crate::bar::Bar;
use crate::provider::MarketDataProvider;
use crate::symbol;

use log::{debug, error, info};
use std::io::{self, Write};
use std::{thread, time::Duration};

/// What a single poll did.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PollOutcome {
    /// A bar with an unseen timestamp was printed.
    Emitted,
    /// The latest bar is the one already printed.
    Unchanged,
    /// Nothing usable came back: no bar, or a bar without `date`.
    NoBar,
    /// The fetch failed and an error line was printed.
    Failed,
}

#[derive(Debug)]
pub struct Poller {
    symbol: String,
    // `date` of the last printed bar.
    last_seen: Option<String>,
}

impl Poller {
    pub fn new(symbol: &str) -> Self {
        Poller {
            symbol: symbol.to_string(),
            last_seen: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Remember `bar` and return the record to print, if its timestamp differs
    /// from the previous one. Only the immediately preceding timestamp is
    /// compared against.
    pub fn observe(&mut self, bar: &Bar) -> Option<Bar> {
        let dt = bar.date()?;
        if self.last_seen.as_deref() == Some(dt) {
            return None;
        }

        self.last_seen = Some(dt.to_string());
        Some(bar.with_ist())
    }

    /// Fetch the latest bar once and print it if new.
    pub fn poll_once<P, W>(&mut self, provider: &P, out: &mut W) -> io::Result<PollOutcome>
    where
        P: MarketDataProvider + ?Sized,
        W: Write,
    {
        let bar = match provider.get_latest_bar(&self.symbol) {
            Ok(Some(bar)) => bar,
            Ok(None) => {
                debug!("no bar available for {}", self.symbol);
                return Ok(PollOutcome::NoBar);
            }
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                out.flush()?;
                return Ok(PollOutcome::Failed);
            }
        };

        if bar.date().is_none() {
            debug!("bar for {} has no date, skipped", self.symbol);
            return Ok(PollOutcome::NoBar);
        }

        match self.observe(&bar) {
            Some(bar_with_ist) => {
                writeln!(out, "{}", bar_with_ist)?;
                out.flush()?;
                Ok(PollOutcome::Emitted)
            }
            None => Ok(PollOutcome::Unchanged),
        }
    }

    /// Poll every `interval` for as long as `keep_running` says so.
    ///
    /// `keep_running` is checked before each poll. Nothing that happens during
    /// a poll ends the loop, failures are reported and the next poll proceeds
    /// on schedule.
    pub fn run<P, W, F>(&mut self, provider: &P, out: &mut W, interval: Duration, mut keep_running: F)
    where
        P: MarketDataProvider + ?Sized,
        W: Write,
        F: FnMut() -> bool,
    {
        info!("polling {} every {:?}", self.symbol, interval);

        while keep_running() {
            match self.poll_once(provider, out) {
                Ok(outcome) => debug!("poll {}: {:?}", self.symbol, outcome),
                Err(e) => error!("failed to write poll output: {}", e),
            }

            thread::sleep(interval);
        }

        info!("stopped polling {}, last bar at {:?}", self.symbol, self.last_seen());
    }
}

/// Print the provider's forex pairs, deduplicated and sorted, on one line.
///
/// Failures are printed as an `error:` line and reported as `None`, they do
/// not stop the caller.
pub fn print_symbols<P, W>(provider: &P, out: &mut W) -> io::Result<Option<Vec<String>>>
where
    P: MarketDataProvider + ?Sized,
    W: Write,
{
    match provider.get_forex_list() {
        Ok(rows) => {
            let symbols = symbol::distinct_symbols(&rows);
            info!("provider lists {} forex pairs", symbols.len());
            writeln!(out, "{}", serde_json::to_string(&symbols)?)?;
            out.flush()?;
            Ok(Some(symbols))
        }
        Err(e) => {
            error!("forex list unavailable: {}", e);
            writeln!(out, "error: {}", e)?;
            out.flush()?;
            Ok(None)
        }
    }
}

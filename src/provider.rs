use crate::bar::Bar;
use crate::error::FetchError;

use serde_json::Value;

/// Source of forex market data polled by the [`Poller`](crate::poller::Poller).
pub trait MarketDataProvider {
    /// Raw rows of the provider's supported forex pairs.
    fn get_forex_list(&self) -> Result<Vec<Value>, FetchError>;

    /// Most recent 1 minute bar for `symbol`, `None` if the provider has nothing.
    fn get_latest_bar(&self, symbol: &str) -> Result<Option<Bar>, FetchError>;
}

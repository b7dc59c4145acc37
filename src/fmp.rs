// Financial Modeling Prep REST client.
use crate::bar::{self, Bar};
use crate::config::Config;
use crate::error::FetchError;
use crate::provider::MarketDataProvider;

use log::{debug, error};
use serde_json::Value;

const FOREX_LIST_EP: &str = "/stable/forex-list";
const CHART_1MIN_EP: &str = "/stable/historical-chart/1min";

#[derive(Debug)]
pub struct Fmp {
    pub config: Config,
    client: reqwest::blocking::Client,
}

impl Fmp {
    pub fn new(config: Config) -> Result<Fmp, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Fmp { config, client })
    }

    // GET an endpoint with the api key appended to `params`, decode the body as json.
    fn get_json(&self, ep: &'static str, params: &[(&str, &str)]) -> Result<Value, FetchError> {
        let uri = format!("{}{}", self.config.uri, ep);
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("apikey", self.config.apikey.as_str()));

        debug!("GET {} {:?}", ep, params);
        let resp = self.client.get(&uri).query(&query).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: ep,
                status,
            });
        }

        Ok(resp.json::<Value>()?)
    }
}

impl MarketDataProvider for Fmp {
    fn get_forex_list(&self) -> Result<Vec<Value>, FetchError> {
        // Failures are logged by the caller.
        match self.get_json(FOREX_LIST_EP, &[])? {
            Value::Array(rows) => {
                debug!("forex list returned {} rows", rows.len());
                Ok(rows)
            }
            other => Err(FetchError::Payload {
                endpoint: FOREX_LIST_EP,
                detail: format!("expected an array, got {}", json_kind(&other)),
            }),
        }
    }

    fn get_latest_bar(&self, symbol: &str) -> Result<Option<Bar>, FetchError> {
        match self.get_json(CHART_1MIN_EP, &[("symbol", symbol)]) {
            Ok(Value::Array(rows)) => Ok(bar::latest_bar(&rows)),
            Ok(other) => {
                debug!("no bars for {}, chart body is {}", symbol, json_kind(&other));
                Ok(None)
            }
            Err(e) => {
                error!("failed to get 1min chart for {}: {}", symbol, e);
                Err(e)
            }
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

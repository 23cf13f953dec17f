use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The chains whose TVL series are summed into the merged response, in the
/// order their contributions are accumulated.
pub const MERGED_CHAINS: [&str; 2] = ["Unichain", "Unichain-borrowed"];

/// A single TVL observation.
///
/// # Fields
/// * `date`: Unix timestamp (seconds) of the observation
/// * `total_liquidity_usd`: Total value locked at that date, in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvlPoint {
    pub date: i64,
    #[serde(rename = "totalLiquidityUSD")]
    pub total_liquidity_usd: f64,
}

impl TvlPoint {
    /// Reads a point from one upstream `tvl` record.
    ///
    /// Returns `None` when the record is not an object, lacks either field,
    /// or carries a non-numeric value. An integral float date such as
    /// `1000.0` is accepted.
    pub fn from_record(record: &Value) -> Option<Self> {
        let date = record.get("date")?;
        let date = date.as_i64().or_else(|| {
            date.as_f64()
                .filter(|d| d.fract() == 0.0 && *d >= i64::MIN as f64 && *d <= i64::MAX as f64)
                .map(|d| d as i64)
        })?;
        let total_liquidity_usd = record.get("totalLiquidityUSD")?.as_f64()?;

        Some(Self {
            date,
            total_liquidity_usd,
        })
    }

    /// The observation date as a UTC timestamp, if it is in chrono's range.
    pub fn day(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}

/// Merged TVL for one protocol, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTvl {
    pub protocol: String,
    pub tvl: Vec<TvlPoint>,
}

/// Extracts the `tvl` records of a named chain from an upstream protocol body.
///
/// A missing `chainTvls` map, a missing chain, or a missing `tvl` array all
/// yield an empty slice, as does any of them having the wrong JSON type.
pub fn chain_records<'a>(body: &'a Value, chain: &str) -> &'a [Value] {
    body.get("chainTvls")
        .and_then(|chains| chains.get(chain))
        .and_then(|entry| entry.get("tvl"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Sums the TVL series of `chains` by date.
///
/// Every distinct date found in any of the chains appears exactly once in
/// the result, carrying the sum of all its contributions. The result is
/// sorted ascending by date. Malformed records are skipped.
pub fn merge_chain_tvls(body: &Value, chains: &[&str]) -> Vec<TvlPoint> {
    let mut combined: HashMap<i64, f64> = HashMap::new();
    let mut skipped = 0usize;

    for chain in chains {
        for record in chain_records(body, chain) {
            match TvlPoint::from_record(record) {
                Some(point) => {
                    *combined.entry(point.date).or_insert(0.0) += point.total_liquidity_usd;
                }
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped malformed tvl records");
    }

    let mut merged: Vec<TvlPoint> = combined
        .into_iter()
        .map(|(date, total_liquidity_usd)| TvlPoint {
            date,
            total_liquidity_usd,
        })
        .collect();
    merged.sort_by_key(|point| point.date);

    merged
}

use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::thingspeak::FeedEntry;

/// Running totals for one calendar day (UTC)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayBucket {
    pub temperature_sum: f64,
    pub humidity_sum: f64,
    /// Readings with a valid temperature. Humidity shares this denominator.
    pub sample_count: u64,
}

impl DayBucket {
    pub fn add(&mut self, temperature: f64, humidity: Option<f64>) {
        self.temperature_sum += temperature;
        if let Some(humidity) = humidity {
            self.humidity_sum += humidity;
        }
        self.sample_count += 1;
    }

    pub fn average(&self, date: NaiveDate) -> Result<DailyAverage> {
        let count = self.sample_count as f64;

        Ok(DailyAverage {
            date: date.format("%Y-%m-%d").to_string(),
            avg_temp: round_half_up_2(self.temperature_sum / count)?,
            avg_humidity: round_half_up_2(self.humidity_sum / count)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyAverage {
    pub date: String,
    #[serde(rename = "avgTemp")]
    pub avg_temp: f64,
    #[serde(rename = "avgHumidity")]
    pub avg_humidity: f64,
}

/// UTC calendar day of an RFC 3339 timestamp
pub fn day_key(created_at: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(created_at.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc).date_naive())
}

/// Round to 2 decimal places, ties away from zero.
///
/// Works on the shortest decimal form of `value`, so `3.335` becomes `3.34`
/// even though its binary value sits just below the tie.
pub fn round_half_up_2(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(anyhow!("Cannot round non-finite average {}", value));
    }

    let decimal = BigDecimal::from_str(&value.to_string())?;
    decimal
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_f64()
        .ok_or_else(|| anyhow!("Failed to convert rounded average {}", decimal))
}

/// Fold readings into day buckets.
///
/// Readings without a valid temperature or timestamp never open a bucket.
pub fn bucket_by_day(feeds: &[FeedEntry]) -> BTreeMap<NaiveDate, DayBucket> {
    let mut days: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for entry in feeds {
        let Some(temperature) = entry.temperature() else {
            continue;
        };

        let Some(day) = entry.timestamp().and_then(day_key) else {
            tracing::warn!(
                entry_id = ?entry.entry_id,
                created_at = ?entry.created_at,
                "Skipping reading with unparseable timestamp"
            );
            continue;
        };

        days.entry(day).or_default().add(temperature, entry.humidity());
    }

    days
}

/// Per-day averages of the given readings, ordered by date
pub fn aggregate_daily(feeds: &[FeedEntry]) -> Result<Vec<DailyAverage>> {
    bucket_by_day(feeds)
        .into_iter()
        .map(|(day, bucket)| bucket.average(day))
        .collect()
}

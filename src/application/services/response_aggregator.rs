//! # Response Aggregator
//!
//! Reconciles independent per-package responses into shipment-wide rates.
//!
//! The API is asked about each package separately, so a service is only
//! quotable for the whole shipment when every package was offered it.
//! Aggregation runs in stages and stops at the first failure:
//!
//! 1. International shipments must originate in New Zealand
//! 2. Every body must parse as JSON
//! 3. Every response must report `success: true`; only then are the
//!    `services` lists decoded
//! 4. Offers are grouped by service name in first-seen order
//! 5. Groups missing a package are dropped
//! 6. Each remaining group becomes one [`AggregatedRate`] with a summed price
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::application::services::response_aggregator::ResponseAggregator;
//! use nzpost_rates::domain::entities::Location;
//! use nzpost_rates::domain::value_objects::ApiVariant;
//!
//! let body = r#"{"success":true,"services":[
//!     {"name":"CP Online Parcel","code":"CPOLP","price_inc_gst":"9.58"}
//! ]}"#;
//!
//! let aggregation = ResponseAggregator::new("New Zealand Post").aggregate(
//!     &[body.to_string()],
//!     &Location::default(),
//!     ApiVariant::Domestic,
//! );
//!
//! let rates = aggregation.outcome.unwrap();
//! assert_eq!(rates[0].price(), 958);
//! ```

use crate::application::error::{PipelineResult, QuoteError};
use crate::domain::entities::{AggregatedRate, Location, ProductOffer};
use crate::domain::services::ensure_rateable;
use crate::domain::value_objects::{ApiVariant, CheckedArithmetic, CurrencyCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Output of one aggregation.
///
/// `responses` holds the parsed documents whenever every body parsed, even
/// if a later stage failed.
#[derive(Debug)]
pub struct Aggregation {
    /// Parsed response documents, empty if any body failed to parse.
    pub responses: Vec<Value>,
    /// Consolidated rates or the failure that stopped aggregation.
    pub outcome: PipelineResult<Vec<AggregatedRate>>,
}

impl Aggregation {
    fn failed(responses: Vec<Value>, error: QuoteError) -> Self {
        Self {
            responses,
            outcome: Err(error),
        }
    }
}

/// Service list carried by a successful response.
#[derive(Debug, Deserialize)]
struct ServiceList {
    #[serde(default)]
    services: Option<Vec<ServiceEntry>>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    name: String,
    code: String,
    #[serde(deserialize_with = "deserialize_price")]
    price_inc_gst: Decimal,
}

/// Accepts `price_inc_gst` as either a JSON string or number.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "invalid price_inc_gst: {}",
                other
            )));
        }
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| serde::de::Error::custom(format!("invalid price_inc_gst '{}': {}", text, e)))
}

/// Aggregates per-package responses for one carrier.
#[derive(Debug, Clone)]
pub struct ResponseAggregator {
    carrier: String,
}

impl ResponseAggregator {
    /// Creates an aggregator that labels rates with `carrier`.
    #[must_use]
    pub fn new(carrier: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
        }
    }

    /// Aggregates the raw bodies, one per package in package order.
    #[must_use]
    pub fn aggregate(
        &self,
        raw_responses: &[String],
        origin: &Location,
        variant: ApiVariant,
    ) -> Aggregation {
        if ensure_rateable(variant, origin).is_err() {
            return Aggregation::failed(Vec::new(), QuoteError::ClassificationViolation);
        }

        let responses = match parse_all(raw_responses) {
            Ok(responses) => responses,
            Err(error) => return Aggregation::failed(Vec::new(), error),
        };

        let outcome = ensure_all_succeeded(&responses)
            .and_then(|()| extract_offers(&responses))
            .and_then(|offers| self.consolidate(offers, raw_responses.len()));

        Aggregation { responses, outcome }
    }

    /// Groups offers by service name and sums the fully covered groups.
    fn consolidate(
        &self,
        offers: Vec<ProductOffer>,
        package_count: usize,
    ) -> PipelineResult<Vec<AggregatedRate>> {
        group_by_name(offers)
            .into_iter()
            .filter(|group| covers_every_package(group, package_count))
            .map(|group| self.to_rate(&group))
            .collect()
    }

    fn to_rate(&self, group: &[ProductOffer]) -> PipelineResult<AggregatedRate> {
        let total = group
            .iter()
            .try_fold(Decimal::ZERO, |sum, offer| sum.safe_add(offer.price()))?;
        let (name, code) = group
            .first()
            .map(|offer| (offer.name(), offer.code()))
            .unwrap_or_default();

        Ok(AggregatedRate::new(
            self.carrier.as_str(),
            name,
            code,
            Money::from_major(total, CurrencyCode::nzd())?,
        ))
    }
}

fn parse_all(raw_responses: &[String]) -> PipelineResult<Vec<Value>> {
    raw_responses
        .iter()
        .map(|body| serde_json::from_str::<Value>(body).map_err(QuoteError::from))
        .collect()
}

/// Fails with the first unsuccessful response's message, in package order.
///
/// Only `success` and `message` are read, so a failure is reported verbatim
/// even when another response, or its own `services`, would not decode.
fn ensure_all_succeeded(responses: &[Value]) -> PipelineResult<()> {
    match responses
        .iter()
        .find(|document| document.get("success").and_then(Value::as_bool) != Some(true))
    {
        Some(failed) => Err(QuoteError::upstream_failure(failure_message(failed))),
        None => Ok(()),
    }
}

fn failure_message(document: &Value) -> String {
    match document.get("message") {
        Some(Value::String(message)) => message.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Decodes and flattens the services of every response.
fn extract_offers(responses: &[Value]) -> PipelineResult<Vec<ProductOffer>> {
    let mut offers = Vec::new();

    for (index, document) in responses.iter().enumerate() {
        let list = ServiceList::deserialize(document)?;
        offers.extend(list.services.unwrap_or_default().into_iter().map(|service| {
            ProductOffer::new(index, service.code, service.name, service.price_inc_gst)
        }));
    }

    Ok(offers)
}

/// Groups offers by service name, keeping first-seen order.
fn group_by_name(offers: Vec<ProductOffer>) -> Vec<Vec<ProductOffer>> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<ProductOffer>> = Vec::new();

    for offer in offers {
        match positions.get(offer.name()) {
            Some(&position) => {
                if let Some(group) = groups.get_mut(position) {
                    group.push(offer);
                }
            }
            None => {
                positions.insert(offer.name().to_string(), groups.len());
                groups.push(vec![offer]);
            }
        }
    }

    groups
}

/// Returns true if the group holds exactly one offer for each package.
fn covers_every_package(group: &[ProductOffer], package_count: usize) -> bool {
    if group.len() != package_count {
        return false;
    }
    let mut seen = vec![false; package_count];
    group.iter().all(|offer| {
        seen.get_mut(offer.package_index())
            .map(|slot| !std::mem::replace(slot, true))
            .unwrap_or(false)
    })
}

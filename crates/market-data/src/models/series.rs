use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sample of a price history series.
///
/// Series are ordered ascending by timestamp and only held long enough
/// to render a chart; nothing persists them. Timestamps serialize as
/// millisecond epochs, the unit both feeds use on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
}

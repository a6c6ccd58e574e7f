//! Database utility functions for column parsing and the exercise order
//! list codec.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::types::Type;
use rusqlite::Row;

use crate::error::Result;

impl super::Database {
    /// Parse an ISO-8601 timestamp from a TEXT column.
    pub(crate) fn parse_timestamp_col(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
        row.get::<_, String>(idx)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    /// Parse an optional ISO-8601 timestamp from a nullable TEXT column.
    pub(crate) fn parse_optional_timestamp_col(
        row: &Row,
        idx: usize,
    ) -> rusqlite::Result<Option<Timestamp>> {
        row.get::<_, Option<String>>(idx)?
            .map(|s| {
                s.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
                })
            })
            .transpose()
    }

    /// Parse a `YYYY-MM-DD` civil date from a TEXT column.
    pub(crate) fn parse_date_col(row: &Row, idx: usize) -> rusqlite::Result<Date> {
        row.get::<_, String>(idx)?
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    /// Decode the exercise order list from its JSON TEXT column.
    ///
    /// A missing or empty column decodes to an empty list. Corrupt JSON is
    /// treated the same way rather than failing the whole workout load: the
    /// order list is purely cosmetic and the fallback ordering by first-seen
    /// set is always available.
    pub(crate) fn decode_order_list(raw: Option<String>) -> Vec<u64> {
        raw.as_deref()
            .and_then(|s| serde_json::from_str::<Vec<u64>>(s).ok())
            .unwrap_or_default()
    }

    /// Encode an exercise order list to its JSON TEXT representation.
    pub(crate) fn encode_order_list(order: &[u64]) -> Result<Option<String>> {
        if order.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(order)?))
    }
}

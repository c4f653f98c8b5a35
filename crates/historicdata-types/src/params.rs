//! Request parameters for the collection endpoints.

use chrono::Datelike;
use serde::Serialize;

use crate::{DateRange, Plan};

/// Parameters shared by the collection endpoints (collection options, data
/// size, file list).
///
/// Optional filters left as `None` are omitted from the serialized payload
/// entirely; a filter explicitly set to an empty list is sent as `[]`. The
/// service treats the two differently, so the distinction must survive
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionParams {
    /// Sport to filter data for.
    pub sport: String,
    /// Purchased plan tier to filter for.
    pub plan: Plan,
    /// Day of month to start data from.
    pub from_day: u32,
    /// Month to start data from.
    pub from_month: u32,
    /// Year to start data from.
    pub from_year: i32,
    /// Day of month to end data at.
    pub to_day: u32,
    /// Month to end data at.
    pub to_month: u32,
    /// Year to end data at.
    pub to_year: i32,
    /// Id of a specific event to get data for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<u64>,
    /// Name of a specific event to get data for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Market types to filter for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_types_collection: Option<Vec<String>>,
    /// Countries to filter for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries_collection: Option<Vec<String>>,
    /// File types to filter for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type_collection: Option<Vec<String>>,
}

impl CollectionParams {
    /// Creates parameters for the given sport, plan and date range with no
    /// optional filters set.
    pub fn new(sport: impl Into<String>, plan: Plan, range: DateRange) -> Self {
        Self {
            sport: sport.into(),
            plan,
            from_day: range.start.day(),
            from_month: range.start.month(),
            from_year: range.start.year(),
            to_day: range.end.day(),
            to_month: range.end.month(),
            to_year: range.end.year(),
            event_id: None,
            event_name: None,
            market_types_collection: None,
            countries_collection: None,
            file_type_collection: None,
        }
    }

    /// Restricts the request to a single event id.
    #[must_use]
    pub const fn with_event_id(mut self, event_id: u64) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Restricts the request to a single event name.
    #[must_use]
    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    /// Sets the market type filter.
    #[must_use]
    pub fn with_market_types(mut self, market_types: Vec<String>) -> Self {
        self.market_types_collection = Some(market_types);
        self
    }

    /// Sets the country filter.
    #[must_use]
    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.countries_collection = Some(countries);
        self
    }

    /// Sets the file type filter.
    #[must_use]
    pub fn with_file_types(mut self, file_types: Vec<String>) -> Self {
        self.file_type_collection = Some(file_types);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march_2021() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_date_range_split_into_components() {
        let params = CollectionParams::new("Soccer", Plan::Basic, march_2021());

        assert_eq!(params.from_day, 1);
        assert_eq!(params.from_month, 3);
        assert_eq!(params.from_year, 2021);
        assert_eq!(params.to_day, 31);
        assert_eq!(params.to_month, 3);
        assert_eq!(params.to_year, 2021);
    }

    #[test]
    fn test_unset_filters_omitted_from_payload() {
        let params = CollectionParams::new("Soccer", Plan::Basic, march_2021());
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["sport"], "Soccer");
        assert_eq!(object["plan"], "Basic Plan");
        assert_eq!(object["fromDay"], 1);
        assert_eq!(object["toYear"], 2021);
        assert!(!object.contains_key("eventId"));
        assert!(!object.contains_key("eventName"));
        assert!(!object.contains_key("marketTypesCollection"));
        assert!(!object.contains_key("countriesCollection"));
        assert!(!object.contains_key("fileTypeCollection"));
    }

    #[test]
    fn test_empty_filter_sent_as_empty_array() {
        let params =
            CollectionParams::new("Soccer", Plan::Basic, march_2021()).with_market_types(vec![]);
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["marketTypesCollection"], serde_json::json!([]));
    }

    #[test]
    fn test_set_filters_present_in_payload() {
        let params = CollectionParams::new("Soccer", Plan::Pro, march_2021())
            .with_event_id(30_456_789)
            .with_event_name("Premier League")
            .with_countries(vec!["GB".to_string(), "IE".to_string()])
            .with_file_types(vec!["M".to_string()]);
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["eventId"], 30_456_789);
        assert_eq!(value["eventName"], "Premier League");
        assert_eq!(value["countriesCollection"], serde_json::json!(["GB", "IE"]));
        assert_eq!(value["fileTypeCollection"], serde_json::json!(["M"]));
    }
}

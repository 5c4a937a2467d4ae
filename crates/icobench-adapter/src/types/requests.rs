/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Filters for `icos/all`.
///
/// Unset fields are left out of the encoded body, so
/// `SearchRequest::new().page(1)` encodes to `{"page":1}` and the default
/// value encodes to `{}` (the plain listing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_asc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// `upcoming`, `active` or `ended`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_restricted_country: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn category(mut self, category: u32) -> Self {
        self.category = Some(category);
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn accepting(mut self, currency: impl Into<String>) -> Self {
        self.accepting = Some(currency.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn bonus(mut self, bonus: impl Into<String>) -> Self {
        self.bonus = Some(bonus.into());
        self
    }

    pub fn bounty(mut self, bounty: impl Into<String>) -> Self {
        self.bounty = Some(bounty.into());
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn expert(mut self, expert: impl Into<String>) -> Self {
        self.expert = Some(expert.into());
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Only ICOs starting after `date` (`YYYY-MM-DD`)
    pub fn start_after(mut self, date: impl Into<String>) -> Self {
        self.start_after = Some(date.into());
        self
    }

    /// Only ICOs ending before `date` (`YYYY-MM-DD`)
    pub fn end_before(mut self, date: impl Into<String>) -> Self {
        self.end_before = Some(date.into());
        self
    }

    pub fn registration(mut self, registration: u32) -> Self {
        self.registration = Some(registration);
        self
    }

    pub fn exclude_restricted_country(mut self, country: impl Into<String>) -> Self {
        self.exclude_restricted_country = Some(country.into());
        self
    }

    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order_desc = Some(field.into());
        self.order_asc = None;
        self
    }

    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order_asc = Some(field.into());
        self.order_desc = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_filter_has_setter() {
        let request = SearchRequest::new()
            .bonus("yes")
            .bounty("yes")
            .team("yes")
            .expert("yes")
            .rating("4")
            .start_after("2018-01-01")
            .end_before("2018-12-31")
            .registration(1)
            .exclude_restricted_country("US");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "bonus": "yes",
                "bounty": "yes",
                "team": "yes",
                "expert": "yes",
                "rating": "4",
                "startAfter": "2018-01-01",
                "endBefore": "2018-12-31",
                "registration": 1,
                "excludeRestrictedCountry": "US"
            })
        );
    }

    #[test]
    fn test_page_only_encoding() {
        let encoded = serde_json::to_string(&SearchRequest::new().page(1)).unwrap();
        assert_eq!(encoded, r#"{"page":1}"#);
        assert_eq!(serde_json::to_string(&SearchRequest::default()).unwrap(), "{}");
    }

    #[test]
    fn test_camel_case_field_names() {
        let request = SearchRequest {
            start_after: Some("2018-01-01".to_string()),
            exclude_restricted_country: Some("US".to_string()),
            ..SearchRequest::new().order_desc("rating")
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "orderDesc": "rating",
                "startAfter": "2018-01-01",
                "excludeRestrictedCountry": "US",
            })
        );
    }

    #[test]
    fn test_order_direction_is_exclusive() {
        let request = SearchRequest::new().order_desc("rating").order_asc("name");
        assert_eq!(request.order_asc.as_deref(), Some("name"));
        assert!(request.order_desc.is_none());
    }

    #[test]
    fn test_round_trip() {
        let request = SearchRequest::new()
            .page(3)
            .search("chain")
            .category(12)
            .platform("Ethereum")
            .accepting("ETH")
            .country("Switzerland")
            .status("active");
        let encoded = serde_json::to_vec(&request).unwrap();
        let decoded: SearchRequest = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, request);
    }
}

/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::serde_helpers;
use super::models::{
    Category, Exchange, ExpertRating, Finance, Ico, IcoDates, Kyc, Links, Milestone, NamedEntry,
    RatedIco, Restriction, TeamMember,
};

/// `icos/all`: up to 12 ICOs per page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponse {
    /// Total number of matching ICOs
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub icos: u64,
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub pages: u64,
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub current_page: u64,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub results: Vec<Ico>,
}

impl SearchResponse {
    /// Whether a later page exists
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.pages
    }
}

/// `icos/trending`: up to 8 "Hot and Trending" ICOs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingResponse {
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub results: Vec<Ico>,
}

/// `ico/{id}`: full ICO profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub id: u64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub name: String,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating: f64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating_team: f64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating_vision: f64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating_product: f64,
    #[serde(deserialize_with = "serde_helpers::f64_lenient")]
    pub rating_profile: f64,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub url: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub tagline: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub intro: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub about: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub logo: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub country: String,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub milestones: Vec<Milestone>,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub team_intro: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub notification: String,
    #[serde(deserialize_with = "serde_helpers::string_lenient")]
    pub registration: String,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub restrictions: Vec<Restriction>,
    #[serde(deserialize_with = "serde_helpers::object_or_default")]
    pub links: Links,
    #[serde(deserialize_with = "serde_helpers::object_or_default")]
    pub finance: Finance,
    #[serde(deserialize_with = "serde_helpers::object_or_default")]
    pub dates: IcoDates,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub team: Vec<TeamMember>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub ratings: Vec<ExpertRating>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub exchanges: Vec<Exchange>,
    #[serde(deserialize_with = "serde_helpers::object_or_default")]
    pub kyc: Kyc,
}

/// `icos/filters`: vocabulary accepted by [`SearchRequest`](super::SearchRequest)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersResponse {
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub platforms: Vec<NamedEntry>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub accepting: Vec<NamedEntry>,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub countries: Vec<NamedEntry>,
}

/// `icos/ratings`: every ICO rated by profile or by experts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingsResponse {
    #[serde(deserialize_with = "serde_helpers::u64_lenient")]
    pub icos: u64,
    #[serde(deserialize_with = "serde_helpers::vec_or_empty")]
    pub results: Vec<RatedIco>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_response_pagination() {
        let response: SearchResponse = serde_json::from_value(json!({
            "icos": 25,
            "pages": 3,
            "currentPage": 1,
            "results": [{"id": 1, "name": "First"}]
        }))
        .expect("search response");

        assert_eq!(response.icos, 25);
        assert_eq!(response.results.len(), 1);
        assert!(response.has_next_page());
    }

    #[test]
    fn profile_tolerates_php_empty_arrays() {
        let response: ProfileResponse = serde_json::from_value(json!({
            "id": 42,
            "name": "Example",
            "ratingTeam": "3.5",
            "links": [],
            "finance": {"token": "EXM", "bonus": true},
            "kyc": null,
            "team": [{"name": "Ada", "socials": [{"site": "github", "url": "https://github.com/ada"}]}],
            "ratings": [{"name": "Expert", "team": 4, "profile": 3.9, "weight": "1"}]
        }))
        .expect("profile response");

        assert_eq!(response.id, 42);
        assert_eq!(response.rating_team, 3.5);
        assert_eq!(response.links, Links::default());
        assert_eq!(response.kyc, Kyc::default());
        assert_eq!(response.finance.token, "EXM");
        assert_eq!(response.team[0].socials[0].site, "github");
        assert_eq!(response.ratings[0].team, 4);
    }

    #[test]
    fn ratings_response_reads_rating_field() {
        let response: RatingsResponse = serde_json::from_value(json!({
            "icos": 1,
            "results": [{"id": 9, "name": "Rated", "rating": 4.6}]
        }))
        .expect("ratings response");

        assert_eq!(response.results[0].rating, 4.6);
    }

    #[test]
    fn error_body_decodes_to_empty_response() {
        let response: TrendingResponse =
            serde_json::from_value(json!({"error": "Invalid signature"})).expect("trending");
        assert!(response.results.is_empty());
    }
}

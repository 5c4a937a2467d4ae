/*
[INPUT]:  Search filters and ICO identifiers
[OUTPUT]: ICO listings, profiles, filter vocabulary and ratings
[POS]:    HTTP layer - ICObench v1 endpoints (all signed POST requests)
[UPDATE]: When adding new endpoints or changing response format
*/

use crate::http::{IcobenchClient, Payload, Result};
use crate::types::{
    FiltersResponse, ProfileResponse, RatingsResponse, SearchRequest, SearchResponse,
    TrendingResponse,
};

const ICOS_ALL: &str = "icos/all";
const ICOS_TRENDING: &str = "icos/trending";
const ICOS_FILTERS: &str = "icos/filters";
const ICOS_RATINGS: &str = "icos/ratings";

impl IcobenchClient {
    /// Search ICOs, up to 12 per page
    ///
    /// POST icos/all with the filters as JSON body
    pub async fn search(&self, filters: &SearchRequest) -> Result<SearchResponse> {
        let payload = Payload::json(filters)?;
        self.call_json(ICOS_ALL, payload).await
    }

    /// List all ICOs without filters
    ///
    /// POST icos/all with `{}`
    pub async fn all(&self) -> Result<SearchResponse> {
        self.search(&SearchRequest::default()).await
    }

    /// Up to 8 ICOs currently "Hot and Trending"
    ///
    /// POST icos/trending
    pub async fn trending(&self) -> Result<TrendingResponse> {
        self.call_json(ICOS_TRENDING, Payload::empty()).await
    }

    /// Detailed ICO profile
    ///
    /// POST ico/{id}
    pub async fn profile(&self, id: u64) -> Result<ProfileResponse> {
        let endpoint = format!("ico/{id}");
        self.call_json(&endpoint, Payload::empty()).await
    }

    /// Categories, platforms, currencies and countries usable as filters
    ///
    /// POST icos/filters
    pub async fn filters(&self) -> Result<FiltersResponse> {
        self.call_json(ICOS_FILTERS, Payload::empty()).await
    }

    /// ICOs rated by profile or by experts
    ///
    /// POST icos/ratings
    pub async fn ratings(&self) -> Result<RatingsResponse> {
        self.call_json(ICOS_RATINGS, Payload::empty()).await
    }
}

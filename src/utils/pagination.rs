use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Clone, Copy)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    6
}

impl Pagination {
    /// Offset of the first row of the requested page. `page` is 1-based;
    /// page 0 is treated as page 1.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1) as i64 * self.page_size as i64
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Pagination>>().await {
            Ok(Query(pagination)) => Ok(pagination),
            _ => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid pagination options"})),
            )
                .into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_parameters_are_missing() {
        let pagination = serde_json::from_str::<Pagination>("{}").unwrap();

        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 6);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_page_size() {
        let pagination = serde_json::from_str::<Pagination>(r#"{"page":3,"pageSize":6}"#).unwrap();

        assert_eq!(pagination.offset(), 12);
        assert_eq!(pagination.limit(), 6);
    }

    #[test]
    fn page_zero_saturates_to_the_first_page() {
        let pagination = serde_json::from_str::<Pagination>(r#"{"page":0,"pageSize":10}"#).unwrap();

        assert_eq!(pagination.offset(), 0);
    }
}

pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::property::repository::Property;

    pub enum Success {
        PropertyPage {
            total: i64,
            properties: Vec<Property>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PropertyPage { total, properties } => (
                    StatusCode::OK,
                    Json(json!({ "total": total, "properties": properties })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchProperties,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchProperties => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch properties" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn empty_page_still_reports_the_collection_total() {
        let response = response::Success::PropertyPage {
            total: 42,
            properties: vec![],
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn fetch_failure_maps_to_internal_server_error() {
        let response = response::Error::FailedToFetchProperties.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

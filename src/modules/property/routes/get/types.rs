pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::property::repository::Property;

    pub enum Success {
        Property(Property),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Property(property) => {
                    (StatusCode::OK, Json(json!(property))).into_response()
                }
            }
        }
    }

    pub enum Error {
        PropertyNotFound,
        FailedToFetchProperty,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PropertyNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Property not found" })),
                )
                    .into_response(),
                Self::FailedToFetchProperty => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch property" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

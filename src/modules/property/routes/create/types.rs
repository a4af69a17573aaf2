pub mod request {
    use crate::modules::auth::middleware::Auth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(field_name = "type")]
        pub kind: String,
        pub name: String,
        pub description: String,
        #[form_data(field_name = "location.street")]
        pub location_street: String,
        #[form_data(field_name = "location.city")]
        pub location_city: String,
        #[form_data(field_name = "location.state")]
        pub location_state: String,
        #[form_data(field_name = "location.zipcode")]
        pub location_zipcode: String,
        pub beds: String,
        pub baths: String,
        pub square_feet: String,
        pub amenities: Vec<String>,
        #[form_data(field_name = "rates.weekly")]
        pub rates_weekly: Option<String>,
        #[form_data(field_name = "rates.monthly")]
        pub rates_monthly: Option<String>,
        #[form_data(field_name = "rates.nightly")]
        pub rates_nightly: Option<String>,
        #[form_data(field_name = "seller_info.name")]
        pub seller_name: String,
        #[form_data(field_name = "seller_info.email")]
        pub seller_email: String,
        #[form_data(field_name = "seller_info.phone")]
        pub seller_phone: String,
        #[form_data(limit = "10MiB")]
        pub images: Vec<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::property::repository::Property;
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        PropertyCreated(String, Property),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PropertyCreated(app_url, property) => (
                    StatusCode::FOUND,
                    [(
                        header::LOCATION,
                        format!("{}/properties/{}", app_url, property.id),
                    )],
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToUploadImages,
        FailedToCreateProperty,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToUploadImages => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload property images" })),
                )
                    .into_response(),
                Self::FailedToCreateProperty => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create property" })),
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
    use crate::modules::property::repository::{Location, Property, Rates, SellerInfo};
    use axum::{
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use sqlx::types::Json;

    fn property(id: &str) -> Property {
        Property {
            id: id.to_string(),
            kind: "apartment".to_string(),
            name: "Sunset Flat".to_string(),
            description: "Two bedrooms facing the bay".to_string(),
            location: Json(Location {
                street: "12 Harbor Rd".to_string(),
                city: "Boston".to_string(),
                state: "MA".to_string(),
                zipcode: "02101".to_string(),
            }),
            beds: "2".to_string(),
            baths: "1".to_string(),
            square_feet: "900".to_string(),
            amenities: Json(vec!["Wifi".to_string()]),
            rates: Json(Rates {
                weekly: None,
                monthly: Some("2400".to_string()),
                nightly: None,
            }),
            seller_info: Json(SellerInfo {
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                phone: "555-0100".to_string(),
            }),
            images: Json(vec![]),
            owner_id: "01J0000000000000000000USER".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn created_property_redirects_to_its_detail_page() {
        let response = response::Success::PropertyCreated(
            "http://localhost:8000".to_string(),
            property("01J00000000000000000000PROP"),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "http://localhost:8000/properties/01J00000000000000000000PROP"
        );
    }

    #[test]
    fn failures_map_to_internal_server_error() {
        let upload = response::Error::FailedToUploadImages.into_response();
        let insert = response::Error::FailedToCreateProperty.into_response();

        assert_eq!(upload.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(insert.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use crate::utils::pagination::Pagination;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Rental rates as submitted; a listing may carry any subset of them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Rates {
    pub weekly: Option<String>,
    pub monthly: Option<String>,
    pub nightly: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SellerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

// beds, baths and square_feet are kept as the submitted strings; the form is
// the only producer and the frontend renders them verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub location: Json<Location>,
    pub beds: String,
    pub baths: String,
    pub square_feet: String,
    pub amenities: Json<Vec<String>>,
    pub rates: Json<Rates>,
    pub seller_info: Json<SellerInfo>,
    pub images: Json<Vec<String>>,
    #[serde(rename = "owner")]
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreatePropertyPayload {
    pub kind: String,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub beds: String,
    pub baths: String,
    pub square_feet: String,
    pub amenities: Vec<String>,
    pub rates: Rates,
    pub seller_info: SellerInfo,
    pub images: Vec<String>,
    pub owner_id: String,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreatePropertyPayload,
) -> Result<Property, Error> {
    sqlx::query_as::<_, Property>(
        "
        INSERT INTO properties (
            id,
            kind,
            name,
            description,
            location,
            beds,
            baths,
            square_feet,
            amenities,
            rates,
            seller_info,
            images,
            owner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.kind)
    .bind(payload.name)
    .bind(payload.description)
    .bind(Json(payload.location))
    .bind(payload.beds)
    .bind(payload.baths)
    .bind(payload.square_feet)
    .bind(Json(payload.amenities))
    .bind(Json(payload.rates))
    .bind(Json(payload.seller_info))
    .bind(Json(payload.images))
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a property: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Property>, Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a property by id: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM properties")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count properties: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Vec<Property>, Error> {
    sqlx::query_as::<_, Property>("SELECT * FROM properties LIMIT $1 OFFSET $2")
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch many properties: {}",
                err
            );
            Error::UnexpectedError
        })
}

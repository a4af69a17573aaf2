use super::types::{request, response};
use crate::{modules::property::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let total = repository::count(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchProperties)?;

    let properties = repository::find_many(&ctx.db_conn.pool, payload.pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchProperties)?;

    Ok(response::Success::PropertyPage { total, properties })
}

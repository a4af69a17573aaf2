use super::types::{request, response};
use crate::{
    modules::property::repository,
    types::Context,
    utils::storage::{self, UploadedMedia},
};
use futures::{stream, StreamExt};
use std::{io::Read, sync::Arc};

const UPLOAD_CONCURRENCY: usize = 4;

// Browsers submit a part with an empty filename when no file was chosen;
// those placeholders carry no image.
fn is_selected_upload(file_name: Option<&str>) -> bool {
    file_name.map(|name| !name.is_empty()).unwrap_or(false)
}

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    let mut image_buffers: Vec<Vec<u8>> = vec![];

    for image in payload.body.images.iter_mut() {
        if !is_selected_upload(image.metadata.file_name.as_deref()) {
            continue;
        }

        let mut buf: Vec<u8> = vec![];
        image.contents.read_to_end(&mut buf).map_err(|err| {
            tracing::error!("Failed to read an uploaded file: {:?}", err);
            response::Error::FailedToUploadImages
        })?;

        image_buffers.push(buf);
    }

    // Fan the uploads out with a bounded window; `buffered` yields results in
    // submission order, which fixes the order of the stored image urls.
    let results = stream::iter(image_buffers)
        .map(|contents| {
            let storage_ctx = ctx.storage.clone();
            async move { storage::upload_file(storage_ctx, contents).await }
        })
        .buffered(UPLOAD_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    let mut uploaded: Vec<UploadedMedia> = Vec::with_capacity(results.len());
    let mut upload_failed = false;

    for result in results {
        match result {
            Ok(media) => uploaded.push(media),
            Err(_) => upload_failed = true,
        }
    }

    if upload_failed {
        for media in uploaded {
            let url = media.url.clone();
            if storage::delete_file(ctx.storage.clone(), media).await.is_err() {
                tracing::error!("Failed to clean up uploaded image {}", url);
            }
        }

        return Err(response::Error::FailedToUploadImages);
    }

    let images = uploaded.into_iter().map(|media| media.url).collect();

    let property = repository::create(
        &ctx.db_conn.pool,
        repository::CreatePropertyPayload {
            kind: payload.body.kind,
            name: payload.body.name,
            description: payload.body.description,
            location: repository::Location {
                street: payload.body.location_street,
                city: payload.body.location_city,
                state: payload.body.location_state,
                zipcode: payload.body.location_zipcode,
            },
            beds: payload.body.beds,
            baths: payload.body.baths,
            square_feet: payload.body.square_feet,
            amenities: payload.body.amenities,
            rates: repository::Rates {
                weekly: payload.body.rates_weekly,
                monthly: payload.body.rates_monthly,
                nightly: payload.body.rates_nightly,
            },
            seller_info: repository::SellerInfo {
                name: payload.body.seller_name,
                email: payload.body.seller_email,
                phone: payload.body.seller_phone,
            },
            images,
            owner_id: payload.auth.user.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateProperty)?;

    Ok(response::Success::PropertyCreated(
        ctx.app.url.clone(),
        property,
    ))
}

#[cfg(test)]
mod tests {
    use super::is_selected_upload;

    #[test]
    fn parts_without_a_filename_are_placeholders() {
        assert!(!is_selected_upload(None));
        assert!(!is_selected_upload(Some("")));
    }

    #[test]
    fn named_parts_are_uploads() {
        assert!(is_selected_upload(Some("front.png")));
    }
}

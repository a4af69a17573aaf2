use crate::types::StorageContext;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode, Url,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UploadFailed,
    DeleteFailed,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
    pub timestamp: i64,
}

/// Hex-encoded SHA-256 over the sorted request parameters followed by the
/// API secret, as the hosted store expects.
fn sign(params: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}{}", params, api_secret));
    let hash = hasher.finalize();
    base16ct::lower::encode_string(&hash)
}

pub async fn upload_file(cfg: StorageContext, contents: Vec<u8>) -> Result<UploadedMedia, Error> {
    let file_name = Ulid::new().to_string();
    let encoded = BASE64_STANDARD.encode(contents.as_slice());
    let file = format!("data:image/png;base64,{}", encoded);

    let timestamp = chrono::Utc::now().timestamp();
    let signature = sign(
        format!(
            "folder={}&timestamp={}&upload_preset={}",
            cfg.upload_folder, timestamp, cfg.upload_preset
        )
        .as_str(),
        cfg.api_secret.as_str(),
    );

    let form = Form::new()
        .part("file", Part::text(file).file_name(file_name))
        .text("folder", cfg.upload_folder.clone())
        .text("upload_preset", cfg.upload_preset.clone())
        .text("api_key", cfg.api_key.clone())
        .text("timestamp", format!("{}", timestamp))
        .text("signature", signature)
        .text("signature_algorithm", "sha256");

    let res = Client::new()
        .post(cfg.upload_endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to upload a file: {:?}", err);
            Error::UploadFailed
        })?;

    if res.status() != StatusCode::OK {
        let data = res.text().await.map_err(|err| {
            tracing::error!("Error occurred while processing return data: {:?}", err);
            Error::UploadFailed
        })?;

        tracing::error!("Failed to upload file: {}", data);
        return Err(Error::UploadFailed);
    }

    let data = res.text().await.map_err(|err| {
        tracing::error!("Error occurred while processing return data: {:?}", err);
        Error::UploadFailed
    })?;

    match serde_json::de::from_str::<UploadResponse>(data.as_ref()) {
        Ok(res) => Ok(UploadedMedia {
            url: res.secure_url,
            public_id: res.public_id,
            timestamp,
        }),
        Err(err) => {
            tracing::error!("Failed to deserialize upload response: {:?}", err);
            Err(Error::UploadFailed)
        }
    }
}

pub async fn delete_file(cfg: StorageContext, media: UploadedMedia) -> Result<(), Error> {
    let url = Url::parse(media.url.as_ref()).map_err(|err| {
        tracing::error!("Failed to parse url {}: {:?}", media.url, err);
        Error::DeleteFailed
    })?;

    let signature = sign(
        format!(
            "public_id={}&timestamp={}",
            media.public_id, media.timestamp
        )
        .as_str(),
        cfg.api_secret.as_str(),
    );

    let body = json!({
        "public_id": media.public_id,
        "api_key": cfg.api_key,
        "signature": signature,
        "timestamp": media.timestamp,
    })
    .to_string();

    let res = Client::new()
        .post(cfg.delete_endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete file {}: {:?}", url, err);
            Error::DeleteFailed
        })?;

    if res.status() != StatusCode::OK {
        let data = res.text().await.map_err(|err| {
            tracing::error!("Failed to process delete file response {}: {:?}", url, err);
            Error::DeleteFailed
        })?;

        tracing::error!("Failed to delete uploaded file: {}", data);
        return Err(Error::DeleteFailed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_hex_encodes_the_sha256_of_params_and_secret() {
        let signature = sign(
            "folder=estatepro&timestamp=1700000000&upload_preset=listing-images",
            "shhh",
        );

        assert_eq!(
            signature,
            "054aae80c2bbdddc1ae3a3106010c2bfb8ea4cf088f3570dff030b7927c5fd68"
        );
    }
}

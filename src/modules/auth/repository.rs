use crate::utils::database::DatabaseConnection;
use chrono::{NaiveDateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: NaiveDateTime,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().naive_utc()
    }
}

pub async fn find_by_id(db: DatabaseConnection, id: String) -> Option<Session> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(&db.pool)
        .await
        .map_err(|err| {
            log::error!(
                "Error occurred while fetching session with id {}: {}",
                id,
                err
            );
        })
        .unwrap_or(None)
}

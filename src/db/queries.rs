use crate::db::Database;
use crate::error::{FarmGptError, Result};
use crate::i18n::Language;
use crate::models::{CommunityMessage, WeatherSnapshot};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tracing::warn;

const LANGUAGE_KEY: &str = "language";

// Settings Queries

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )?;
            Ok(())
        })
    }

    pub fn get_language(&self) -> Result<Option<Language>> {
        let stored = self.get_setting(LANGUAGE_KEY)?;
        Ok(stored.and_then(|code| {
            Language::from_code(&code).or_else(|| {
                warn!(language = %code, "Unknown language in database, ignoring");
                None
            })
        }))
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.set_setting(LANGUAGE_KEY, language.code())
    }
}

// Weather Cache Queries

impl Database {
    /// Replace the cached snapshot with the latest successful refresh
    pub fn save_snapshot(&self, snapshot: &WeatherSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT OR REPLACE INTO weather_cache
                    (id, latitude, longitude, snapshot, fetched_at)
                VALUES (1, ?1, ?2, ?3, ?4)
                "#,
                params![
                    snapshot.place.latitude,
                    snapshot.place.longitude,
                    json,
                    snapshot.fetched_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    pub fn load_snapshot(&self) -> Result<Option<WeatherSnapshot>> {
        let json: Option<String> = self.with_conn(|conn| {
            conn.query_row("SELECT snapshot FROM weather_cache WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
        })?;

        match json {
            Some(json) => match serde_json::from_str(&json) {
                Ok(snapshot) => Ok(Some(snapshot)),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable weather cache");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }
}

// Community Queries

impl Database {
    pub fn add_community_message(&self, message: &CommunityMessage) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO community_messages (author, text, created_at) VALUES (?1, ?2, ?3)",
                params![
                    message.author,
                    message.text,
                    message.created_at.to_rfc3339()
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Newest first
    pub fn list_community_messages(&self, limit: usize) -> Result<Vec<CommunityMessage>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT * FROM community_messages ORDER BY created_at DESC, id DESC LIMIT ?1",
            )?;
            let messages = stmt
                .query_map([limit as i64], row_to_community_message)?
                .filter_map(|r| r.ok())
                .collect();
            Ok(messages)
        })
    }

    pub fn delete_community_message(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM community_messages WHERE id = ?1", [id])?;
            if deleted == 0 {
                return Err(FarmGptError::NotFound(format!("community message {}", id)));
            }
            Ok(())
        })
    }
}

fn row_to_community_message(row: &Row) -> rusqlite::Result<CommunityMessage> {
    let created_at_str: String = row.get("created_at")?;

    Ok(CommunityMessage {
        id: Some(row.get("id")?),
        author: row.get("author")?,
        text: row.get("text")?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

trait OptionalExt<T> {
    fn optional(self) -> rusqlite::Result<Option<T>>;
}

impl<T> OptionalExt<T> for rusqlite::Result<T> {
    fn optional(self) -> rusqlite::Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

//! PostgreSQL backend: pool setup, table DDL, and parameterized CRUD.

use super::{MessageStore, StoreError, StoreResult};
use crate::config::DbConnection;
use crate::model::{Message, MessageId};
use crate::service::is_palindrome;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub const MESSAGES_TABLE: &str = "public.messages";

// Schema creation lives here until the service gets real migrations.
const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS public.messages (
        id serial4 NOT NULL,
        message varchar(100) NULL,
        ispalindrome bool NULL,
        CONSTRAINT messages_pk PRIMARY KEY (id)
    )
"#;

const INSERT_MESSAGE: &str = "INSERT INTO public.messages (message, ispalindrome) VALUES ($1, $2) RETURNING id";
const SELECT_MESSAGE: &str = "SELECT id, message, ispalindrome FROM public.messages WHERE id = $1";
const SELECT_MESSAGES: &str = "SELECT id, message, ispalindrome FROM public.messages ORDER BY id";
const UPDATE_MESSAGE: &str = "UPDATE public.messages SET message = $1, ispalindrome = $2 WHERE id = $3";
const DELETE_MESSAGE: &str = "DELETE FROM public.messages WHERE id = $1";

/// Both data columns are nullable in the table DDL.
type MessageRow = (MessageId, Option<String>, Option<bool>);

/// Open the pool and make sure the messages table exists.
pub async fn connect(db: &DbConnection) -> StoreResult<PgPool> {
    tracing::info!(host = %db.host, port = db.port, database = %db.database, "connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .connect_with(db.connect_options())
        .await?;
    ensure_messages_table(&pool).await?;
    Ok(pool)
}

/// Idempotent: CREATE TABLE IF NOT EXISTS.
pub async fn ensure_messages_table(pool: &PgPool) -> StoreResult<()> {
    tracing::debug!(table = MESSAGES_TABLE, "ensuring table");
    sqlx::query(CREATE_MESSAGES_TABLE).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        PgMessageStore { pool }
    }
}

fn row_to_message((id, text, flag): MessageRow) -> Message {
    let text = text.unwrap_or_default();
    // Rows written outside this service may lack the flag; derive it rather than report a stale value.
    let is_palindrome = flag.unwrap_or_else(|| is_palindrome(&text));
    Message {
        id,
        text,
        is_palindrome,
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn create(&self, text: &str, is_palindrome: bool) -> StoreResult<Message> {
        tracing::debug!(sql = %INSERT_MESSAGE, "query");
        let (id,): (MessageId,) = sqlx::query_as(INSERT_MESSAGE)
            .bind(text)
            .bind(is_palindrome)
            .fetch_one(&self.pool)
            .await?;
        Ok(Message {
            id,
            text: text.to_string(),
            is_palindrome,
        })
    }

    async fn get(&self, id: MessageId) -> StoreResult<Message> {
        tracing::debug!(sql = %SELECT_MESSAGE, id, "query");
        let row: Option<MessageRow> = sqlx::query_as(SELECT_MESSAGE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_message).ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> StoreResult<Vec<Message>> {
        tracing::debug!(sql = %SELECT_MESSAGES, "query");
        let rows: Vec<MessageRow> = sqlx::query_as(SELECT_MESSAGES).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(row_to_message).collect())
    }

    async fn update(&self, id: MessageId, text: &str, is_palindrome: bool) -> StoreResult<Message> {
        tracing::debug!(sql = %UPDATE_MESSAGE, id, "query");
        let result = sqlx::query(UPDATE_MESSAGE)
            .bind(text)
            .bind(is_palindrome)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(Message {
            id,
            text: text.to_string(),
            is_palindrome,
        })
    }

    async fn delete(&self, id: MessageId) -> StoreResult<()> {
        tracing::debug!(sql = %DELETE_MESSAGE, id, "query");
        let result = sqlx::query(DELETE_MESSAGE).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_map_to_empty_text_and_derived_flag() {
        let msg = row_to_message((3, None, None));
        assert_eq!(
            msg,
            Message {
                id: 3,
                text: String::new(),
                is_palindrome: true,
            }
        );
    }

    #[test]
    fn stored_flag_is_used_when_present() {
        let msg = row_to_message((4, Some("test".into()), Some(false)));
        assert_eq!(msg.text, "test");
        assert!(!msg.is_palindrome);
    }

    #[test]
    fn missing_flag_is_derived_from_text() {
        let msg = row_to_message((5, Some("level".into()), None));
        assert!(msg.is_palindrome);
    }
}

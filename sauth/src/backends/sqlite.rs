use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};
use scommon::{AccountId, BoxFuture};

use crate::backend::AccountBackend;
use crate::error::AuthError;
use crate::types::{Account, AccountRecord, PasswordHash};

#[derive(Debug)]
pub struct SqliteAccountBackend {
    connection: Mutex<Connection>,
}

impl SqliteAccountBackend {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|error| {
                AuthError::storage(format!("failed to create sqlite parent directory: {error}"))
            })?;
        }

        let connection = Connection::open(path).map_err(|error| {
            AuthError::storage(format!("failed to open sqlite database: {error}"))
        })?;
        Self::from_connection(connection)
    }

    pub fn new_in_memory() -> Result<Self, AuthError> {
        let connection = Connection::open_in_memory().map_err(|error| {
            AuthError::storage(format!("failed to open in-memory sqlite database: {error}"))
        })?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self, AuthError> {
        connection
            .busy_timeout(Duration::from_secs(5))
            .map_err(|error| {
                AuthError::storage(format!("failed to configure sqlite busy timeout: {error}"))
            })?;
        let backend = Self {
            connection: Mutex::new(connection),
        };
        backend.initialize_schema()?;
        Ok(backend)
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, AuthError> {
        self.connection
            .lock()
            .map_err(|_| AuthError::storage("sqlite backend lock poisoned"))
    }

    fn initialize_schema(&self) -> Result<(), AuthError> {
        let conn = self.connection()?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS accounts (
                account_id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at_secs INTEGER NOT NULL,
                created_at_nanos INTEGER NOT NULL
            );
            ",
        )
        .map_err(|error| {
            AuthError::storage(format!("failed to initialize sqlite schema: {error}"))
        })?;

        Ok(())
    }

    fn select_one(
        &self,
        filter_column: &str,
        value: &str,
    ) -> Result<Option<AccountRecord>, AuthError> {
        let conn = self.connection()?;
        let sql = format!(
            "
            SELECT account_id, username, password_hash, created_at_secs, created_at_nanos
            FROM accounts
            WHERE {filter_column} = ?1
            "
        );

        let row = conn
            .query_row(&sql, params![value], read_row)
            .optional()
            .map_err(|error| AuthError::storage(format!("failed to load account: {error}")))?;

        row.map(|(id, username, hash, secs, nanos)| {
            Ok(AccountRecord {
                account: Account {
                    id: AccountId::new(id),
                    username,
                    created_at: decode_system_time(secs, nanos)?,
                },
                password_hash: PasswordHash::from_phc(hash),
            })
        })
        .transpose()
    }
}

type AccountRow = (String, String, String, i64, i64);

fn read_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

impl AccountBackend for SqliteAccountBackend {
    fn insert_account<'a>(&'a self, record: AccountRecord) -> BoxFuture<'a, Result<(), AuthError>> {
        Box::pin(async move {
            let (secs, nanos) = encode_system_time(record.account.created_at)?;
            let conn = self.connection()?;
            conn.execute(
                "
                INSERT INTO accounts (
                    account_id,
                    username,
                    password_hash,
                    created_at_secs,
                    created_at_nanos
                )
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
                params![
                    record.account.id.as_str(),
                    &record.account.username,
                    record.password_hash.as_phc(),
                    secs,
                    nanos,
                ],
            )
            .map_err(|error| match error.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => {
                    AuthError::duplicate_account("User already exists")
                }
                _ => AuthError::storage(format!("failed to insert account: {error}")),
            })?;

            Ok(())
        })
    }

    fn find_by_username<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>> {
        Box::pin(async move { self.select_one("username", username) })
    }

    fn find_by_id<'a>(
        &'a self,
        account_id: &'a AccountId,
    ) -> BoxFuture<'a, Result<Option<AccountRecord>, AuthError>> {
        Box::pin(async move { self.select_one("account_id", account_id.as_str()) })
    }
}

pub(crate) fn default_sqlite_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os("DATABASE_PATH") {
        return PathBuf::from(explicit);
    }

    PathBuf::from("sahara.sqlite3")
}

fn encode_system_time(value: SystemTime) -> Result<(i64, i64), AuthError> {
    let duration = value.duration_since(UNIX_EPOCH).map_err(|error| {
        AuthError::invalid_request(format!("timestamp predates unix epoch: {error}"))
    })?;
    Ok((
        duration.as_secs() as i64,
        i64::from(duration.subsec_nanos()),
    ))
}

fn decode_system_time(seconds: i64, nanos: i64) -> Result<SystemTime, AuthError> {
    if seconds < 0 {
        return Err(AuthError::storage(format!(
            "timestamp seconds must be non-negative, got {seconds}"
        )));
    }
    if !(0..1_000_000_000).contains(&nanos) {
        return Err(AuthError::storage(format!(
            "timestamp nanos must be in [0, 1_000_000_000), got {nanos}"
        )));
    }
    Ok(UNIX_EPOCH + Duration::new(seconds as u64, nanos as u32))
}

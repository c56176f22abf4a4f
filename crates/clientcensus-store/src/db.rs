use clientcensus_types::{SessionRow, UserDirectory, UserRecord};
use sqlx::Connection as _;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{DbConfig, DbKind, Error, Result};

type SessionTuple = (String, String, i64);
type OwnedSessionTuple = (String, String, String, i64);
type UserTuple = (String, String, String, String);

enum Connection {
    Postgres(PgConnection),
    MySql(MySqlConnection),
}

/// Blocking handle on a single database connection.
///
/// Queries run on a private current-thread runtime, so callers stay
/// synchronous. The connection is released when the handle is dropped.
pub struct Database {
    // Dropped before the runtime that drives it
    conn: Connection,
    runtime: Runtime,
}

/// Current time in epoch milliseconds, the unit of `expiresat`
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl Database {
    pub fn connect(config: &DbConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        debug!(
            kind = %config.kind,
            host = %config.host,
            port = config.port(),
            database = %config.name,
            "connecting"
        );

        let conn = runtime.block_on(open(config)).map_err(Error::Connection)?;

        Ok(Self { conn, runtime })
    }

    pub fn kind(&self) -> DbKind {
        match self.conn {
            Connection::Postgres(_) => DbKind::Postgres,
            Connection::MySql(_) => DbKind::MySql,
        }
    }

    /// Sessions that are still active right now
    pub fn active_sessions(&mut self) -> Result<Vec<SessionRow>> {
        self.active_sessions_at(now_millis())
    }

    /// Sessions that are active at `now_ms`, without owner ids
    pub fn active_sessions_at(&mut self, now_ms: i64) -> Result<Vec<SessionRow>> {
        let kind = self.kind();
        let sql = kind.sessions_query(false);
        debug!(%kind, now_ms, "querying active sessions");

        let Self { conn, runtime } = self;
        let rows: Vec<SessionTuple> = runtime
            .block_on(async move {
                match conn {
                    Connection::Postgres(pg) => {
                        sqlx::query_as::<_, SessionTuple>(sql)
                            .bind(now_ms)
                            .fetch_all(&mut *pg)
                            .await
                    }
                    Connection::MySql(my) => {
                        sqlx::query_as::<_, SessionTuple>(sql)
                            .bind(now_ms)
                            .fetch_all(&mut *my)
                            .await
                    }
                }
            })
            .map_err(Error::Query)?;

        debug!(rows = rows.len(), "fetched sessions");

        Ok(rows
            .into_iter()
            .map(|(props, device_id, expires_at)| {
                SessionRow::new(props, device_id, expires_at)
            })
            .collect())
    }

    /// Active sessions including the owning user id
    pub fn active_sessions_with_owner(&mut self) -> Result<Vec<SessionRow>> {
        let now_ms = now_millis();
        let kind = self.kind();
        let sql = kind.sessions_query(true);
        debug!(%kind, now_ms, "querying active sessions with owners");

        let Self { conn, runtime } = self;
        let rows: Vec<OwnedSessionTuple> = runtime
            .block_on(async move {
                match conn {
                    Connection::Postgres(pg) => {
                        sqlx::query_as::<_, OwnedSessionTuple>(sql)
                            .bind(now_ms)
                            .fetch_all(&mut *pg)
                            .await
                    }
                    Connection::MySql(my) => {
                        sqlx::query_as::<_, OwnedSessionTuple>(sql)
                            .bind(now_ms)
                            .fetch_all(&mut *my)
                            .await
                    }
                }
            })
            .map_err(Error::Query)?;

        debug!(rows = rows.len(), "fetched sessions");

        Ok(rows
            .into_iter()
            .map(|(user_id, props, device_id, expires_at)| {
                SessionRow::new(props, device_id, expires_at).with_user(user_id)
            })
            .collect())
    }

    /// Close the connection cleanly
    pub fn close(self) -> Result<()> {
        let Self { conn, runtime } = self;
        runtime
            .block_on(async move {
                match conn {
                    Connection::Postgres(pg) => pg.close().await,
                    Connection::MySql(my) => my.close().await,
                }
            })
            .map_err(Error::Query)
    }
}

impl UserDirectory for Database {
    type Error = Error;

    fn find_users(&mut self, user_id: &str) -> Result<Vec<UserRecord>> {
        let sql = self.kind().user_query();

        let Self { conn, runtime } = self;
        let rows: Vec<UserTuple> = runtime
            .block_on(async move {
                match conn {
                    Connection::Postgres(pg) => {
                        sqlx::query_as::<_, UserTuple>(sql)
                            .bind(user_id)
                            .fetch_all(&mut *pg)
                            .await
                    }
                    Connection::MySql(my) => {
                        sqlx::query_as::<_, UserTuple>(sql)
                            .bind(user_id)
                            .fetch_all(&mut *my)
                            .await
                    }
                }
            })
            .map_err(Error::Query)?;

        Ok(rows
            .into_iter()
            .map(|(username, email, first_name, last_name)| UserRecord {
                username,
                email,
                first_name,
                last_name,
            })
            .collect())
    }
}

async fn open(config: &DbConfig) -> std::result::Result<Connection, sqlx::Error> {
    match config.kind {
        DbKind::Postgres => {
            let options = PgConnectOptions::new()
                .host(&config.host)
                .port(config.port())
                .username(&config.user)
                .password(&config.password)
                .database(&config.name)
                .ssl_mode(PgSslMode::Disable);
            Ok(Connection::Postgres(PgConnection::connect_with(&options).await?))
        }
        DbKind::MySql => {
            let options = MySqlConnectOptions::new()
                .host(&config.host)
                .port(config.port())
                .username(&config.user)
                .password(&config.password)
                .database(&config.name)
                .ssl_mode(MySqlSslMode::Disabled);
            Ok(Connection::MySql(MySqlConnection::connect_with(&options).await?))
        }
    }
}

use std::path::{Path, PathBuf};

use sqlx::{
    Connection, Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::debug;

use crate::core::error::Result;

/// Owns the single database connection used for the lifetime of the process.
pub(super) struct DbState {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState")
            .field("db_file", &self.db_file)
            .finish()
    }
}

impl DbState {
    pub(super) async fn open<P: AsRef<Path>>(db_file: P) -> Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();
        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        // One user, one connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        debug!(db_file = %db_file.display(), "opened recipe database");
        Ok(Self { db_file, pool })
    }

    pub(super) async fn conn(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Run a multi-statement script atomically: either all of it applies or none.
    pub(super) async fn run_script(&self, sql: &str) -> Result<()> {
        let mut conn = self.conn().await?;
        let mut tx = conn.begin().await?;
        sqlx::raw_sql(sql).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    pub(super) async fn close(&self) {
        self.pool.close().await;
    }
}

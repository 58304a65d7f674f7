//! Server lifecycle helpers for `PostgreSQL` integration tests.

use diesel::prelude::*;
use rstest::fixture;
use std::sync::{Mutex, OnceLock};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable holding the administrative connection URL.
pub const DATABASE_URL_ENV: &str = "TASKWISE_TEST_DATABASE_URL";

static SHARED_CLUSTER: OnceLock<Option<ManagedCluster>> = OnceLock::new();
static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Shared `PostgreSQL` server handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// `PostgreSQL` server reached through an administrative database URL.
#[derive(Debug)]
pub struct ManagedCluster {
    admin_url: String,
}

impl ManagedCluster {
    fn from_env() -> Option<Self> {
        std::env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|admin_url| Self { admin_url })
    }

    /// Returns the URL of `database` on the same server.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.admin_url.rsplit_once('/').map_or_else(
            || format!("{}/{database}", self.admin_url),
            |(server, _)| format!("{server}/{database}"),
        )
    }

    /// Creates the template database once, running `migrate` against its URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub async fn ensure_template_exists<F>(
        &'static self,
        template: &str,
        migrate: F,
    ) -> Result<(), BoxError>
    where
        F: FnOnce(&str) -> Result<(), BoxError> + Send + 'static,
    {
        let name = template.to_owned();
        tokio::task::spawn_blocking(move || self.ensure_template_blocking(&name, migrate))
            .await
            .map_err(|err| Box::new(err) as BoxError)?
    }

    /// Clones `template` into a fresh database dropped with the returned guard.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub async fn temporary_database_from_template(
        &'static self,
        db_name: &str,
        template: &str,
    ) -> Result<TemporaryDatabase, BoxError> {
        let name = db_name.to_owned();
        let source = template.to_owned();
        let target = name.clone();
        tokio::task::spawn_blocking(move || self.create_database_from_template(&target, &source))
            .await
            .map_err(|err| Box::new(err) as BoxError)??;
        Ok(TemporaryDatabase {
            cluster: self,
            url: self.database_url(&name),
            name,
        })
    }

    fn ensure_template_blocking<F>(&self, template: &str, migrate: F) -> Result<(), BoxError>
    where
        F: FnOnce(&str) -> Result<(), BoxError>,
    {
        let lock = TEMPLATE_LOCK.get_or_init(|| Mutex::new(()));
        let _guard = lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if self.database_exists(template)? {
            return Ok(());
        }

        self.create_database(template)?;
        if let Err(err) = migrate(&self.database_url(template)) {
            self.drop_database(template)?;
            return Err(err);
        }
        Ok(())
    }

    fn create_database_from_template(&self, db_name: &str, template: &str) -> Result<(), BoxError> {
        let sql = format!(
            "CREATE DATABASE {} TEMPLATE {}",
            quote_identifier(db_name),
            quote_identifier(template),
        );
        self.execute_admin_sql(&sql)
    }

    fn create_database(&self, db_name: &str) -> Result<(), BoxError> {
        let sql = format!("CREATE DATABASE {}", quote_identifier(db_name));
        self.execute_admin_sql(&sql)
    }

    fn drop_database(&self, db_name: &str) -> Result<(), BoxError> {
        let sql = format!(
            "DROP DATABASE IF EXISTS {} WITH (FORCE)",
            quote_identifier(db_name)
        );
        self.execute_admin_sql(&sql)
    }

    fn admin_connection(&self) -> Result<PgConnection, BoxError> {
        PgConnection::establish(&self.admin_url).map_err(|err| Box::new(err) as BoxError)
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = self.admin_connection()?;
        diesel::sql_query(sql)
            .execute(&mut conn)
            .map_err(|err| Box::new(err) as BoxError)?;
        Ok(())
    }

    fn database_exists(&self, db_name: &str) -> Result<bool, BoxError> {
        #[derive(diesel::QueryableByName)]
        struct ExistsRow {
            #[diesel(sql_type = diesel::sql_types::Bool)]
            exists: bool,
        }

        let mut conn = self.admin_connection()?;
        let row = diesel::sql_query(
            "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1) AS exists",
        )
        .bind::<diesel::sql_types::Text, _>(db_name)
        .get_result::<ExistsRow>(&mut conn)
        .map_err(|err| Box::new(err) as BoxError)?;
        Ok(row.exists)
    }
}

/// Database cloned from the template and dropped when the guard goes away.
#[derive(Debug)]
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
    url: String,
}

impl TemporaryDatabase {
    /// Connection URL for this database.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// Provides the configured server, or `None` when no URL is set.
#[fixture]
pub fn postgres_cluster() -> Option<PostgresCluster> {
    SHARED_CLUSTER.get_or_init(ManagedCluster::from_env).as_ref()
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

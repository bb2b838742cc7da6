//! Temporary databases on the server named by the test environment.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use uuid::Uuid;

/// Environment variable holding the administrative connection URL.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_TEST_DATABASE_URL";

/// A database created for one test and dropped with it.
pub struct TemporaryDatabase {
    admin_url: String,
    name: String,
    url: String,
}

impl TemporaryDatabase {
    /// Creates a uniquely named database next to the one `admin_url` points
    /// at.
    ///
    /// # Errors
    ///
    /// Returns an error when the server is unreachable or refuses to create
    /// the database.
    pub fn create(admin_url: &str) -> Result<Self, eyre::Report> {
        let name = format!("taskboard_test_{}", Uuid::new_v4().simple());
        let url = sibling_url(admin_url, &name)?;
        let mut admin = PgConnection::establish(admin_url)?;
        admin.batch_execute(&format!("CREATE DATABASE \"{name}\""))?;
        Ok(Self {
            admin_url: admin_url.to_owned(),
            name,
            url,
        })
    }

    /// Returns the connection URL of the temporary database.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        let statement = format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)", self.name);
        let dropped = PgConnection::establish(&self.admin_url)
            .map_err(eyre::Report::from)
            .and_then(|mut admin| admin.batch_execute(&statement).map_err(eyre::Report::from));
        if let Err(err) = dropped {
            tracing::warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}

/// Replaces the database name in a `postgres://` URL, keeping any query
/// string.
fn sibling_url(base: &str, database: &str) -> Result<String, eyre::Report> {
    let (location, query) = base.split_once('?').map_or((base, None), |(head, tail)| {
        (head, Some(tail))
    });
    let (server, _) = location
        .rsplit_once('/')
        .ok_or_else(|| eyre::eyre!("{DATABASE_URL_VAR} must include a database name"))?;
    Ok(match query {
        Some(params) => format!("{server}/{database}?{params}"),
        None => format!("{server}/{database}"),
    })
}

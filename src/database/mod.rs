use std::path::PathBuf;

use rusqlite::{OpenFlags, OptionalExtension};
use tokio_rusqlite::Connection;

use crate::{Error, Result};

pub mod dictionary;

#[cfg(test)]
mod dictionary_test;

/// Opens the pre-built entry store read-only and checks that it actually is
/// one. Any failure here is fatal to the session.
pub async fn open_store(path: PathBuf) -> Result<Connection> {
    let shown = path.display().to_string();

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .await
    .map_err(|error| Error::StoreUnavailable(format!("cannot open {shown}: {error}")))?;

    conn.call(|conn| {
        let table: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_schema WHERE type = 'table' AND name = 'entries'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if table.is_none() {
            return Err(Error::StoreUnavailable(String::from(
                "store has no entries table",
            ))
            .into());
        }

        Ok(())
    })
    .await
    .map_err(|error| match Error::from(error) {
        unavailable @ Error::StoreUnavailable(_) => unavailable,
        other => Error::StoreUnavailable(other.to_string()),
    })?;

    Ok(conn)
}

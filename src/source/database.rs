//! DuckDB-backed record source
//!
//! Reads one table page by page with `LIMIT`/`OFFSET`. Any database DuckDB
//! can attach (PostgreSQL, MySQL, SQLite, Parquet files) works the same way
//! once attached to the connection.

use super::{check_offset, RecordSource};
use crate::error::Result;
use crate::pagination::FetchSpec;
use duckdb::{Connection, Row};
use std::marker::PhantomData;

/// Table in a DuckDB connection, mapped to records by a row closure
pub struct DuckDbSource<T, F>
where
    F: Fn(&Row<'_>) -> duckdb::Result<T>,
{
    conn: Connection,
    table: String,
    order_by: String,
    map_row: F,
    _record: PhantomData<fn() -> T>,
}

impl<T, F> DuckDbSource<T, F>
where
    F: Fn(&Row<'_>) -> duckdb::Result<T>,
{
    /// Create a source over `table`, ordered by the `order_by` column.
    ///
    /// Offset pagination is only stable with a deterministic order, so the
    /// ordering column is required.
    pub fn new(
        conn: Connection,
        table: impl Into<String>,
        order_by: impl Into<String>,
        map_row: F,
    ) -> Self {
        Self {
            conn,
            table: table.into(),
            order_by: order_by.into(),
            map_row,
            _record: PhantomData,
        }
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Table name
    pub fn table(&self) -> &str {
        &self.table
    }

    fn select_query(&self, limit: u32, offset: usize) -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} LIMIT {limit} OFFSET {offset}",
            quote_ident(&self.table),
            quote_ident(&self.order_by),
        )
    }
}

impl<T, F> RecordSource for DuckDbSource<T, F>
where
    F: Fn(&Row<'_>) -> duckdb::Result<T>,
{
    type Record = T;

    fn count(&self) -> Result<u64> {
        let query = format!("SELECT COUNT(*) FROM {}", quote_ident(&self.table));
        let count: i64 = self.conn.query_row(&query, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    fn fetch_page(&self, spec: FetchSpec) -> Result<Vec<T>> {
        let offset = check_offset(spec)?;
        let query = self.select_query(spec.limit, offset);

        tracing::debug!("Executing query: {}", query);

        let mut stmt = self.conn.prepare(&query)?;
        let records = stmt
            .query_map([], |row| (self.map_row)(row))?
            .collect::<duckdb::Result<Vec<T>>>()?;
        Ok(records)
    }
}

/// Quote an identifier, splitting `schema.table` on dots
fn quote_ident(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("items"), "\"items\"");
        assert_eq!(quote_ident("main.items"), "\"main\".\"items\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}

//! SQLite-backed records store.
//!
//! Person filters are translated into one `SELECT DISTINCT` over `people`
//! joined to `positions`, so all position predicates of a query constrain the
//! same tenure row.

use crate::domain::filters::PersonFilter;
use crate::domain::model::{
    Citation, Cluster, Court, CourtDates, Docket, Opinion, PathSet, Person, Position,
};
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use chrono::NaiveDate;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OpenFlags, Params};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file for reading and writing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an existing database without write access.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        register_casefold(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Create the expected tables. Idempotent; meant for fresh and fixture databases.
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    pub fn insert_court(&self, court: &Court) -> Result<()> {
        self.conn.execute(
            "INSERT INTO courts (id, start_date) VALUES (?1, ?2)",
            params![court.id, court.start_date],
        )?;
        Ok(())
    }

    /// Insert a person together with their positions.
    pub fn insert_person(&self, person: &Person) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO people (id, name_first, name_last, date_dod) VALUES (?1, ?2, ?3, ?4)",
            params![
                person.id,
                person.name_first,
                person.name_last,
                person.date_dod
            ],
        )?;
        for position in &person.positions {
            tx.execute(
                "INSERT INTO positions (
                    id, person_id, court_id, date_start, date_termination, date_retirement
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    position.id,
                    person.id,
                    position.court_id,
                    position.date_start,
                    position.date_termination,
                    position.date_retirement
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_docket(&self, docket: &Docket) -> Result<()> {
        self.conn.execute(
            "INSERT INTO dockets (id, court_id) VALUES (?1, ?2)",
            params![docket.id, docket.court_id],
        )?;
        Ok(())
    }

    pub fn insert_cluster(&self, cluster: &Cluster) -> Result<()> {
        self.conn.execute(
            "INSERT INTO clusters (id, docket_id, date_filed, source) VALUES (?1, ?2, ?3, ?4)",
            params![
                cluster.id,
                cluster.docket_id,
                cluster.date_filed,
                cluster.source
            ],
        )?;
        Ok(())
    }

    pub fn insert_opinion(&self, opinion: &Opinion) -> Result<()> {
        self.conn.execute(
            "INSERT INTO opinions (id, cluster_id, local_path) VALUES (?1, ?2, ?3)",
            params![opinion.id, opinion.cluster_id, opinion.local_path],
        )?;
        Ok(())
    }

    pub fn insert_citation(&self, citation: &Citation) -> Result<()> {
        self.conn.execute(
            "INSERT INTO citations (id, cluster_id) VALUES (?1, ?2)",
            params![citation.id, citation.cluster_id],
        )?;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    fn positions_for(&self, person_id: i64) -> Result<Vec<Position>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, person_id, court_id, date_start, date_termination, date_retirement
             FROM positions
             WHERE person_id = ?1
             ORDER BY date_start, id",
        )?;

        let rows = stmt.query_map(params![person_id], |row| {
            Ok(Position {
                id: row.get(0)?,
                person_id: row.get(1)?,
                court_id: row.get(2)?,
                date_start: row.get(3)?,
                date_termination: row.get(4)?,
                date_retirement: row.get(5)?,
            })
        })?;

        let mut positions = Vec::new();
        for row in rows {
            positions.push(row?);
        }
        Ok(positions)
    }

    fn court_dates<P: Params>(&self, sql: &str, params: P) -> Result<CourtDates> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<NaiveDate>>(1)?,
            ))
        })?;

        let mut dates = CourtDates::new();
        for row in rows {
            let (court_id, date) = row?;
            dates.insert(court_id, date);
        }
        Ok(dates)
    }
}

/// `casefold(text)`: Unicode lower-casing. `COLLATE NOCASE` folds ASCII only.
fn register_casefold(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text = ctx.get::<Option<String>>(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;
    Ok(())
}

fn date_value(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}

/// `column op ?`, optionally also accepting NULL.
fn bounded(column: &str, op: &str, or_unknown: bool) -> String {
    if or_unknown {
        format!("({column} {op} ? OR {column} IS NULL)")
    } else {
        format!("{column} {op} ?")
    }
}

fn push_filter(filter: &PersonFilter, clauses: &mut Vec<String>, values: &mut Vec<Value>) {
    match filter {
        PersonFilter::LastName(name) => {
            clauses.push("casefold(p.name_last) = casefold(?)".to_string());
            values.push(Value::Text(name.clone()));
        }
        PersonFilter::FirstName(name) => {
            clauses.push("casefold(p.name_first) = casefold(?)".to_string());
            values.push(Value::Text(name.clone()));
        }
        PersonFilter::Court(court_id) => {
            clauses.push("pos.court_id = ?".to_string());
            values.push(Value::Text(court_id.clone()));
        }
        PersonFilter::StartedBefore { date, or_unknown } => {
            clauses.push(bounded("pos.date_start", "<", *or_unknown));
            values.push(date_value(*date));
        }
        PersonFilter::TerminatedAfter { date, or_unknown } => {
            clauses.push(bounded("pos.date_termination", ">", *or_unknown));
            values.push(date_value(*date));
        }
        PersonFilter::RetiredAfter { date, or_unknown } => {
            clauses.push(bounded("pos.date_retirement", ">", *or_unknown));
            values.push(date_value(*date));
        }
        PersonFilter::AliveOn(date) => {
            clauses.push(bounded("p.date_dod", ">", true));
            values.push(date_value(*date));
        }
    }
}

/// Builds the people query for `filters` along with its bound values.
fn people_query(filters: &[PersonFilter]) -> (String, Vec<Value>) {
    let mut sql =
        String::from("SELECT DISTINCT p.id, p.name_first, p.name_last, p.date_dod FROM people p");
    if filters.iter().any(PersonFilter::is_position_filter) {
        sql.push_str(" JOIN positions pos ON pos.person_id = p.id");
    }

    let mut clauses = Vec::with_capacity(filters.len());
    let mut values = Vec::with_capacity(filters.len());
    for filter in filters {
        push_filter(filter, &mut clauses, &mut values);
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY p.id");

    (sql, values)
}

impl RecordStore for SqliteStore {
    fn filter_people(&self, filters: &[PersonFilter]) -> Result<Vec<Person>> {
        let (sql, values) = people_query(filters);
        tracing::trace!("people query: {} ({} params)", sql, values.len());

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), |row| {
            Ok(Person {
                id: row.get(0)?,
                name_first: row.get(1)?,
                name_last: row.get(2)?,
                date_dod: row.get(3)?,
                positions: Vec::new(),
            })
        })?;

        let mut people = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        for person in &mut people {
            person.positions = self.positions_for(person.id)?;
        }
        Ok(people)
    }

    fn min_filed_dates(&self, excluded_source: &str) -> Result<CourtDates> {
        // instr() 區分大小寫，LIKE 不會；空標籤代表不排除
        self.court_dates(
            "SELECT c.id, MIN(cl.date_filed)
             FROM courts c
             LEFT JOIN dockets d ON d.court_id = c.id
             LEFT JOIN clusters cl ON cl.docket_id = d.id
             WHERE ?1 = '' OR c.id NOT IN (
                 SELECT d2.court_id
                 FROM dockets d2
                 JOIN clusters cl2 ON cl2.docket_id = d2.id
                 WHERE instr(cl2.source, ?1) > 0
             )
             GROUP BY c.id",
            params![excluded_source],
        )
    }

    fn min_uncited_dates(&self) -> Result<CourtDates> {
        // 沒有案件的法院也列出，日期為 NULL
        self.court_dates(
            "SELECT c.id, MIN(cl.date_filed)
             FROM courts c
             LEFT JOIN dockets d ON d.court_id = c.id
             LEFT JOIN clusters cl ON cl.docket_id = d.id
             LEFT JOIN citations ci ON ci.cluster_id = cl.id
             WHERE ci.id IS NULL
             GROUP BY c.id",
            [],
        )
    }

    fn court_start_dates(&self) -> Result<CourtDates> {
        self.court_dates("SELECT id, start_date FROM courts", [])
    }

    fn opinion_paths(&self) -> Result<PathSet> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT local_path
             FROM opinions
             WHERE local_path IS NOT NULL AND local_path != ''",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut paths = PathSet::new();
        for row in rows {
            paths.insert(row?);
        }
        Ok(paths)
    }
}

// src/db/appraisals.rs
//
// Every statement filters on user_id; a row owned by someone else behaves
// exactly like a missing row.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{Appraisal, AppraisalInput, Created};
use crate::errors::ServerError;

const COLUMNS: &str =
    "id, user_id, title, address, suburb, postcode, state, status, data, created_at, updated_at";

/// Fixed-width UTC text, so string order matches time order.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

struct RawAppraisal {
    id: i64,
    user_id: String,
    title: String,
    address: String,
    suburb: String,
    postcode: String,
    state: String,
    status: String,
    data: String,
    created_at: String,
    updated_at: String,
}

impl RawAppraisal {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            address: row.get(3)?,
            suburb: row.get(4)?,
            postcode: row.get(5)?,
            state: row.get(6)?,
            status: row.get(7)?,
            data: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    fn into_appraisal(self) -> Result<Appraisal, ServerError> {
        let id = self.id;
        let corrupt = |what: &str, e: String| {
            ServerError::DbError(format!("appraisal {id} has invalid {what}: {e}"))
        };

        Ok(Appraisal {
            id,
            status: self.status.parse().map_err(|e| corrupt("status", e))?,
            data: serde_json::from_str(&self.data).map_err(|e| corrupt("data", e.to_string()))?,
            created_at: parse_timestamp(&self.created_at).map_err(|e| corrupt("created_at", e))?,
            updated_at: parse_timestamp(&self.updated_at).map_err(|e| corrupt("updated_at", e))?,
            user_id: self.user_id,
            title: self.title,
            address: self.address,
            suburb: self.suburb,
            postcode: self.postcode,
            state: self.state,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| e.to_string())
}

/// All of a user's appraisals, most recently updated first.
pub fn list_for_user(conn: &Connection, user_id: &str) -> Result<Vec<Appraisal>, ServerError> {
    let sql = format!(
        "select {COLUMNS} from appraisals where user_id = ? order by updated_at desc, id desc"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare list failed: {e}")))?;

    let rows = stmt
        .query_map(params![user_id], RawAppraisal::from_row)
        .map_err(|e| ServerError::DbError(format!("list appraisals failed: {e}")))?;

    let mut out = Vec::new();
    for raw in rows {
        let raw = raw.map_err(|e| ServerError::DbError(format!("read appraisal row failed: {e}")))?;
        out.push(raw.into_appraisal()?);
    }
    Ok(out)
}

pub fn find_for_user(
    conn: &Connection,
    id: i64,
    user_id: &str,
) -> Result<Option<Appraisal>, ServerError> {
    let sql = format!("select {COLUMNS} from appraisals where id = ? and user_id = ?");
    conn.query_row(&sql, params![id, user_id], RawAppraisal::from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("select appraisal failed: {e}")))?
        .map(RawAppraisal::into_appraisal)
        .transpose()
}

/// Inserts a row, unless the input's form key was already used by this user,
/// in which case the earlier row is returned untouched.
pub fn insert(
    conn: &Connection,
    user_id: &str,
    input: &AppraisalInput,
    now: DateTime<Utc>,
) -> Result<Created, ServerError> {
    let stamp = timestamp(now);
    let data = serde_json::to_string(&input.data)?;

    let inserted = conn
        .execute(
            r#"
            insert into appraisals
                (user_id, title, address, suburb, postcode, state, status, data, form_key,
                 created_at, updated_at)
            values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            on conflict (user_id, form_key) do nothing
            "#,
            params![
                user_id,
                input.title,
                input.address,
                input.suburb,
                input.postcode,
                input.state,
                input.status.as_str(),
                data,
                input.form_key,
                stamp,
                stamp,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert appraisal failed: {e}")))?;

    if inserted == 0 {
        let key = input.form_key.as_deref().unwrap_or_default();
        return find_by_form_key(conn, user_id, key)?
            .map(Created::Replayed)
            .ok_or_else(|| ServerError::DbError(format!("form key {key:?} conflicted but no row found")));
    }

    let id = conn.last_insert_rowid();
    find_for_user(conn, id, user_id)?
        .map(Created::Fresh)
        .ok_or_else(|| ServerError::DbError(format!("appraisal {id} vanished after insert")))
}

fn find_by_form_key(
    conn: &Connection,
    user_id: &str,
    form_key: &str,
) -> Result<Option<Appraisal>, ServerError> {
    let sql = format!("select {COLUMNS} from appraisals where user_id = ? and form_key = ?");
    conn.query_row(&sql, params![user_id, form_key], RawAppraisal::from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("select appraisal by form key failed: {e}")))?
        .map(RawAppraisal::into_appraisal)
        .transpose()
}

/// Rewrites every mutable column. `None` when the id is missing or not the user's.
pub fn update_for_user(
    conn: &Connection,
    id: i64,
    user_id: &str,
    input: &AppraisalInput,
    now: DateTime<Utc>,
) -> Result<Option<Appraisal>, ServerError> {
    let data = serde_json::to_string(&input.data)?;

    let changed = conn
        .execute(
            r#"
            update appraisals
               set title = ?, address = ?, suburb = ?, postcode = ?, state = ?,
                   status = ?, data = ?, updated_at = ?
             where id = ? and user_id = ?
            "#,
            params![
                input.title,
                input.address,
                input.suburb,
                input.postcode,
                input.state,
                input.status.as_str(),
                data,
                timestamp(now),
                id,
                user_id,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update appraisal failed: {e}")))?;

    if changed == 0 {
        return Ok(None);
    }
    find_for_user(conn, id, user_id)
}

/// Number of rows removed (0 or 1).
pub fn delete_for_user(conn: &Connection, id: i64, user_id: &str) -> Result<usize, ServerError> {
    conn.execute(
        "delete from appraisals where id = ? and user_id = ?",
        params![id, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("delete appraisal failed: {e}")))
}

//! SQLite-backed repository

use super::{
    AreaProblemRecord, ComplaintRecord, ContactInfo, EventFilter, EventRecord, ImprovementRecord,
    LetterType, NewAreaProblem, NewComplaint, NewLetterRequest, NewPersonalRequest,
    NewSurveyResponse, ProblemStatus, RepoError, RepoResult, Repository, SavedRecord, SchemeQuery,
    SchemeRecord, SurveyQuestion, SurveyRecord, UserProfile, VoterRecord, VoterSearchKind,
    WorkRecord, WorkStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY,
    language TEXT NOT NULL,
    name TEXT,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS complaints (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    user_name TEXT NOT NULL,
    mobile TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    type TEXT NOT NULL,
    area TEXT NOT NULL,
    location TEXT NOT NULL,
    status TEXT NOT NULL,
    source TEXT NOT NULL,
    urgency TEXT NOT NULL,
    photos TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_complaints_mobile ON complaints(tenant_id, mobile);

CREATE TABLE IF NOT EXISTS schemes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    name TEXT NOT NULL,
    name_mr TEXT,
    description TEXT,
    description_mr TEXT,
    benefits TEXT,
    benefits_mr TEXT
);

CREATE TABLE IF NOT EXISTS voters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    name TEXT NOT NULL,
    name_mr TEXT,
    voter_id TEXT,
    mobile TEXT,
    age INTEGER,
    ward TEXT,
    booth TEXT
);

CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    location TEXT,
    starts_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS works (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    title TEXT NOT NULL,
    status TEXT NOT NULL,
    budget INTEGER
);

CREATE TABLE IF NOT EXISTS improvements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS area_problems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    description TEXT NOT NULL,
    location TEXT NOT NULL,
    status TEXT NOT NULL,
    source TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS contact_info (
    tenant_id TEXT PRIMARY KEY,
    address TEXT,
    office_hours TEXT,
    phone TEXT,
    mobile TEXT,
    email TEXT,
    social TEXT
);

CREATE TABLE IF NOT EXISTS letter_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    name TEXT NOT NULL,
    name_localized TEXT
);

CREATE TABLE IF NOT EXISTS letter_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    letter_type TEXT NOT NULL,
    name TEXT NOT NULL,
    mobile TEXT NOT NULL,
    address TEXT NOT NULL,
    purpose TEXT NOT NULL,
    status TEXT NOT NULL,
    source TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS personal_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    mobile TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    source TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS surveys (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    title TEXT NOT NULL,
    questions TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'active',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS survey_responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tenant_id TEXT NOT NULL,
    survey_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    voter_id TEXT,
    answers TEXT NOT NULL,
    source TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";

const SURVEY_ACTIVE: &str = "active";
const SURVEY_CLOSED: &str = "closed";

/// Events listed per filter
const EVENT_LIMIT: usize = 10;
/// Voter matches returned per search
const VOTER_LIMIT: usize = 5;

/// Thread-safe repository handle
#[derive(Clone)]
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Open or create the database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> RepoResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database (for testing)
    #[allow(dead_code)] // Used in tests
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> RepoResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Shared connection, so the session store can live in the same file
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::Poisoned)
    }

    // ==================== Seeding ====================
    //
    // Content tables are managed by the office staff outside the bot; these
    // inserts exist for tests and local setups.

    #[allow(dead_code)] // Used in tests
    pub fn insert_scheme(&self, tenant_id: &str, name: &str, description: Option<&str>) -> RepoResult<()> {
        self.lock()?.execute(
            "INSERT INTO schemes (tenant_id, name, description) VALUES (?1, ?2, ?3)",
            params![tenant_id, name, description],
        )?;
        Ok(())
    }

    #[allow(dead_code)] // Used in tests
    pub fn insert_letter_type(&self, tenant_id: &str, name: &str, name_localized: Option<&str>) -> RepoResult<()> {
        self.lock()?.execute(
            "INSERT INTO letter_types (tenant_id, name, name_localized) VALUES (?1, ?2, ?3)",
            params![tenant_id, name, name_localized],
        )?;
        Ok(())
    }

    #[allow(dead_code)] // Used in tests
    pub fn insert_event(&self, tenant_id: &str, title: &str, starts_at: DateTime<Utc>) -> RepoResult<()> {
        self.lock()?.execute(
            "INSERT INTO events (tenant_id, title, starts_at) VALUES (?1, ?2, ?3)",
            params![tenant_id, title, starts_at.to_rfc3339()],
        )?;
        Ok(())
    }

    #[allow(dead_code)] // Used in tests
    pub fn insert_voter(&self, tenant_id: &str, name: &str, voter_id: &str, mobile: &str) -> RepoResult<()> {
        self.lock()?.execute(
            "INSERT INTO voters (tenant_id, name, voter_id, mobile) VALUES (?1, ?2, ?3, ?4)",
            params![tenant_id, name, voter_id, mobile],
        )?;
        Ok(())
    }

    #[allow(dead_code)] // Used in tests
    pub fn insert_survey(
        &self,
        tenant_id: &str,
        title: &str,
        questions: &[SurveyQuestion],
        active: bool,
    ) -> RepoResult<String> {
        let questions = serde_json::to_string(questions).map_err(|e| RepoError::Decode(e.to_string()))?;
        let status = if active { SURVEY_ACTIVE } else { SURVEY_CLOSED };
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO surveys (tenant_id, title, questions, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![tenant_id, title, questions, status, Utc::now().to_rfc3339()],
        )?;
        Ok(conn.last_insert_rowid().to_string())
    }

    #[allow(dead_code)] // Used in tests
    pub fn upsert_contact_info(&self, tenant_id: &str, info: &ContactInfo) -> RepoResult<()> {
        self.lock()?.execute(
            "INSERT OR REPLACE INTO contact_info (tenant_id, address, office_hours, phone, mobile, email, social)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                tenant_id,
                info.address,
                info.office_hours,
                info.phone,
                info.mobile,
                info.email,
                info.social
            ],
        )?;
        Ok(())
    }
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))
}

fn limit_value(n: usize) -> SqlValue {
    SqlValue::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn row_to_complaint(row: &Row<'_>) -> rusqlite::Result<ComplaintRecord> {
    let id: i64 = row.get(0)?;
    let created: String = row.get(4)?;
    Ok(ComplaintRecord {
        id: id.to_string(),
        kind: row.get(1)?,
        status: row.get(2)?,
        description: row.get(3)?,
        created_at: parse_timestamp(&created)?,
    })
}

fn row_to_area_problem(row: &Row<'_>) -> rusqlite::Result<AreaProblemRecord> {
    let id: i64 = row.get(0)?;
    let created: String = row.get(4)?;
    Ok(AreaProblemRecord {
        id: id.to_string(),
        description: row.get(1)?,
        location: row.get(2)?,
        status: row.get(3)?,
        created_at: parse_timestamp(&created)?,
    })
}

fn like_pattern(text: &str) -> String {
    format!("%{}%", text.to_lowercase())
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn save_user(&self, user_id: &str, profile: &UserProfile) -> RepoResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO users (user_id, language, name, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id) DO UPDATE SET
                language = excluded.language,
                name = COALESCE(excluded.name, users.name),
                updated_at = excluded.updated_at",
            params![user_id, profile.language.code(), profile.name, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    async fn save_complaint(&self, c: &NewComplaint) -> RepoResult<SavedRecord> {
        let photos = serde_json::to_string(&c.photos).map_err(|e| RepoError::Decode(e.to_string()))?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO complaints (tenant_id, user_id, user_name, mobile, title, description, type, area, location, status, source, urgency, photos, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                c.tenant_id,
                c.user_id,
                c.user_name,
                c.mobile,
                c.title,
                c.description,
                c.kind.as_str(),
                c.area,
                c.location,
                c.status,
                c.source,
                c.urgency,
                photos,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(SavedRecord {
            id: conn.last_insert_rowid().to_string(),
        })
    }

    async fn complaints_by_mobile(&self, tenant_id: &str, mobile: &str) -> RepoResult<Vec<ComplaintRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, type, status, description, created_at FROM complaints
             WHERE tenant_id = ?1 AND mobile = ?2
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![tenant_id, mobile], row_to_complaint)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn schemes(&self, tenant_id: &str, query: &SchemeQuery) -> RepoResult<Vec<SchemeRecord>> {
        let mut sql = String::from(
            "SELECT id, name, name_mr, description, description_mr, benefits, benefits_mr
             FROM schemes WHERE tenant_id = ?",
        );
        let mut values = vec![SqlValue::Text(tenant_id.to_string())];

        if let Some(search) = &query.search {
            sql.push_str(
                " AND (lower(name) LIKE ? OR lower(COALESCE(description, '')) LIKE ? OR COALESCE(name_mr, '') LIKE ?)",
            );
            let pattern = like_pattern(search);
            values.extend(std::iter::repeat(SqlValue::Text(pattern)).take(3));
        }
        for keyword in &query.exclude_keywords {
            sql.push_str(" AND lower(name) NOT LIKE ? AND lower(COALESCE(description, '')) NOT LIKE ?");
            let pattern = like_pattern(keyword);
            values.extend(std::iter::repeat(SqlValue::Text(pattern)).take(2));
        }
        sql.push_str(" ORDER BY id ASC LIMIT ? OFFSET ?");
        values.push(limit_value(query.limit));
        values.push(limit_value(query.offset));

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), |row| {
            let id: i64 = row.get(0)?;
            Ok(SchemeRecord {
                id: id.to_string(),
                name: row.get(1)?,
                name_mr: row.get(2)?,
                description: row.get(3)?,
                description_mr: row.get(4)?,
                benefits: row.get(5)?,
                benefits_mr: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn search_voters(
        &self,
        tenant_id: &str,
        query: &str,
        kind: VoterSearchKind,
    ) -> RepoResult<Vec<VoterRecord>> {
        let (clause, needle) = match kind {
            VoterSearchKind::Name => (
                "(lower(name) LIKE ?2 OR COALESCE(name_mr, '') LIKE ?2)",
                like_pattern(query),
            ),
            VoterSearchKind::Mobile => (
                "mobile = ?2",
                query.chars().filter(char::is_ascii_digit).collect(),
            ),
            VoterSearchKind::VoterId => ("upper(voter_id) = ?2", query.trim().to_uppercase()),
        };
        let sql = format!(
            "SELECT name, name_mr, voter_id, age, ward, booth FROM voters
             WHERE tenant_id = ?1 AND {clause} ORDER BY name LIMIT {VOTER_LIMIT}"
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![tenant_id, needle], |row| {
            Ok(VoterRecord {
                name: row.get(0)?,
                name_mr: row.get(1)?,
                voter_id: row.get(2)?,
                age: row.get(3)?,
                ward: row.get(4)?,
                booth: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn events(&self, tenant_id: &str, filter: EventFilter) -> RepoResult<Vec<EventRecord>> {
        let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        let tomorrow = today + Duration::days(1);
        let mut values = vec![SqlValue::Text(tenant_id.to_string())];
        let (clause, order) = match filter {
            EventFilter::Upcoming => {
                values.push(SqlValue::Text(tomorrow.to_rfc3339()));
                ("starts_at >= ?2", "ASC")
            }
            EventFilter::Today => {
                values.push(SqlValue::Text(today.to_rfc3339()));
                values.push(SqlValue::Text(tomorrow.to_rfc3339()));
                ("starts_at >= ?2 AND starts_at < ?3", "ASC")
            }
            EventFilter::Past => {
                values.push(SqlValue::Text(today.to_rfc3339()));
                ("starts_at < ?2", "DESC")
            }
        };
        let sql = format!(
            "SELECT title, description, location, starts_at FROM events
             WHERE tenant_id = ?1 AND {clause} ORDER BY starts_at {order} LIMIT {EVENT_LIMIT}"
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params_from_iter(values),
            |row| {
                let starts: String = row.get(3)?;
                Ok(EventRecord {
                    title: row.get(0)?,
                    description: row.get(1)?,
                    location: row.get(2)?,
                    starts_at: parse_timestamp(&starts)?,
                })
            },
        )?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn works(&self, tenant_id: &str, status: WorkStatus) -> RepoResult<Vec<WorkRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT title, status, budget FROM works WHERE tenant_id = ?1 AND status = ?2 ORDER BY id DESC",
        )?;
        let rows = stmt.query_map(params![tenant_id, status.as_str()], |row| {
            Ok(WorkRecord {
                title: row.get(0)?,
                status: row.get(1)?,
                budget: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn improvements(&self, tenant_id: &str) -> RepoResult<Vec<ImprovementRecord>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT title, description FROM improvements WHERE tenant_id = ?1 ORDER BY id DESC")?;
        let rows = stmt.query_map(params![tenant_id], |row| {
            Ok(ImprovementRecord {
                title: row.get(0)?,
                description: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn area_problems_by_user(&self, user_id: &str, limit: usize) -> RepoResult<Vec<AreaProblemRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, description, location, status, created_at FROM area_problems
             WHERE user_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![user_id, limit_value(limit)], row_to_area_problem)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn area_problems(
        &self,
        tenant_id: &str,
        status: ProblemStatus,
        limit: usize,
    ) -> RepoResult<Vec<AreaProblemRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, description, location, status, created_at FROM area_problems
             WHERE tenant_id = ?1 AND status = ?2 ORDER BY created_at DESC, id DESC LIMIT ?3",
        )?;
        let rows = stmt.query_map(
            params![tenant_id, status.as_str(), limit_value(limit)],
            row_to_area_problem,
        )?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn report_area_problem(&self, p: &NewAreaProblem) -> RepoResult<Option<SavedRecord>> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT INTO area_problems (tenant_id, user_id, description, location, status, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                p.tenant_id,
                p.user_id,
                p.description,
                p.location,
                p.status,
                p.source,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok((inserted > 0).then(|| SavedRecord {
            id: conn.last_insert_rowid().to_string(),
        }))
    }

    async fn contact_info(&self, tenant_id: &str) -> RepoResult<Option<ContactInfo>> {
        let conn = self.lock()?;
        let info = conn
            .query_row(
                "SELECT address, office_hours, phone, mobile, email, social FROM contact_info WHERE tenant_id = ?1",
                params![tenant_id],
                |row| {
                    Ok(ContactInfo {
                        address: row.get(0)?,
                        office_hours: row.get(1)?,
                        phone: row.get(2)?,
                        mobile: row.get(3)?,
                        email: row.get(4)?,
                        social: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(info)
    }

    async fn letter_types(&self, tenant_id: &str) -> RepoResult<Vec<LetterType>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT name, name_localized FROM letter_types WHERE tenant_id = ?1 ORDER BY id ASC")?;
        let rows = stmt.query_map(params![tenant_id], |row| {
            Ok(LetterType {
                name: row.get(0)?,
                name_localized: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    async fn save_letter_request(&self, r: &NewLetterRequest) -> RepoResult<Option<SavedRecord>> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT INTO letter_requests (tenant_id, user_id, letter_type, name, mobile, address, purpose, status, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                r.tenant_id,
                r.user_id,
                r.letter_type,
                r.name,
                r.mobile,
                r.address,
                r.purpose,
                r.status,
                r.source,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok((inserted > 0).then(|| SavedRecord {
            id: conn.last_insert_rowid().to_string(),
        }))
    }

    async fn save_personal_request(&self, r: &NewPersonalRequest) -> RepoResult<SavedRecord> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO personal_requests (tenant_id, user_id, name, mobile, description, status, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                r.tenant_id,
                r.user_id,
                r.name,
                r.mobile,
                r.description,
                r.status,
                r.source,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(SavedRecord {
            id: conn.last_insert_rowid().to_string(),
        })
    }

    async fn active_survey(&self, tenant_id: &str) -> RepoResult<Option<SurveyRecord>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, title, questions FROM surveys
                 WHERE tenant_id = ?1 AND status = ?2
                 ORDER BY created_at DESC, id DESC LIMIT 1",
                params![tenant_id, SURVEY_ACTIVE],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)),
            )
            .optional()?;
        let Some((id, title, questions)) = row else {
            return Ok(None);
        };
        let questions: Vec<SurveyQuestion> =
            serde_json::from_str(&questions).map_err(|e| RepoError::Decode(format!("survey {id}: {e}")))?;
        Ok(Some(SurveyRecord {
            id: id.to_string(),
            title,
            questions,
        }))
    }

    async fn save_survey_response(&self, r: &NewSurveyResponse) -> RepoResult<SavedRecord> {
        // Keyed by question text; skipped questions are stored as null
        let mut answers = serde_json::Map::new();
        for (question, answer) in &r.answers {
            let value = serde_json::to_value(answer).map_err(|e| RepoError::Decode(e.to_string()))?;
            answers.insert(question.clone(), value);
        }
        let answers = serde_json::Value::Object(answers).to_string();

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO survey_responses (tenant_id, survey_id, user_id, voter_id, answers, source, created_at)
             VALUES (?1, ?2, ?3, NULL, ?4, ?5, ?6)",
            params![
                r.tenant_id,
                r.survey_id,
                r.user_id,
                answers,
                r.source,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(SavedRecord {
            id: conn.last_insert_rowid().to_string(),
        })
    }
}

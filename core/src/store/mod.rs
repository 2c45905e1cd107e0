//! SQLite-backed metadata store.
//!
//! Owns a scoped [`rusqlite::Connection`]; the connection is released when
//! the store is dropped, on every exit path. Insertion is idempotent:
//! `INSERT OR IGNORE` keyed on the primary key of each table, so re-running
//! a batch never duplicates rows.

mod schema;

use crate::error::Result;
use crate::types::SliceMetadata;
use log::info;
use rusqlite::{params, Connection};
use schema::SCHEMA;
use std::path::Path;

pub struct MetadataStore {
    conn: Connection,
}

impl MetadataStore {
    /// Opens (creating if absent) the database at `path` and ensures the
    /// patients/studies/series schema exists
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Inserts a batch of records as a single transaction
    ///
    /// Rows are inserted parent before child (patients, then studies, then
    /// series) so referential integrity holds throughout. Existing primary
    /// keys are left untouched. Any failure rolls the whole batch back.
    pub fn insert_batch(&mut self, records: &[SliceMetadata]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut insert_patient = tx.prepare(
                "INSERT OR IGNORE INTO patients (PatientID) VALUES (?1)",
            )?;
            let mut insert_study = tx.prepare(
                "INSERT OR IGNORE INTO studies (StudyInstanceUID, PatientID, StudyDate)
                 VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_series = tx.prepare(
                "INSERT OR IGNORE INTO series
                     (SeriesInstanceUID, StudyInstanceUID, SliceThickness, PixelSpacing, FilePath)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;

            for record in records {
                insert_patient.execute(params![record.patient_id])?;
                insert_study.execute(params![
                    record.study_instance_uid,
                    record.patient_id,
                    record.study_date,
                ])?;
                insert_series.execute(params![
                    record.series_instance_uid,
                    record.study_instance_uid,
                    record.slice_thickness,
                    record.pixel_spacing_storage(),
                    record.file_path.to_string_lossy(),
                ])?;
            }
        }
        tx.commit()?;
        info!("Inserted batch of {} records", records.len());
        Ok(())
    }

    /// Number of distinct studies referenced by series rows
    pub fn total_studies(&self) -> Result<i64> {
        let n = self.conn.query_row(
            "SELECT COUNT(DISTINCT StudyInstanceUID) FROM series",
            [],
            |row| row.get(0),
        )?;
        Ok(n)
    }

    /// Number of series rows (one per stored slice series)
    pub fn total_slices(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM series", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Mean number of series per study, `None` when there are no series
    pub fn avg_slices_per_study(&self) -> Result<Option<f64>> {
        let avg = self.conn.query_row(
            "SELECT AVG(slice_count)
             FROM (SELECT COUNT(*) AS slice_count FROM series GROUP BY StudyInstanceUID)",
            [],
            |row| row.get::<_, Option<f64>>(0),
        )?;
        Ok(avg)
    }

    /// Numerically parseable slice thickness values, excluding the sentinel
    pub fn slice_thickness_values(&self) -> Result<Vec<f64>> {
        let mut stmt = self.conn.prepare(
            "SELECT SliceThickness FROM series
             WHERE SliceThickness IS NOT NULL AND SliceThickness != 'Unknown'",
        )?;
        let values = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .filter_map(|r| r.ok())
            .filter_map(|s| s.trim().parse::<f64>().ok())
            .collect();
        Ok(values)
    }

    /// Row counts for (patients, studies, series)
    pub fn row_counts(&self) -> Result<(i64, i64, i64)> {
        let patients = self
            .conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
        let studies = self
            .conn
            .query_row("SELECT COUNT(*) FROM studies", [], |row| row.get(0))?;
        let series = self
            .conn
            .query_row("SELECT COUNT(*) FROM series", [], |row| row.get(0))?;
        Ok((patients, studies, series))
    }

    /// Stored file path for a series, if the series exists
    pub fn series_file_path(&self, series_uid: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT FilePath FROM series WHERE SeriesInstanceUID = ?1",
            [series_uid],
            |row| row.get(0),
        );
        match result {
            Ok(path) => Ok(Some(path)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

pub const SCHEMA: &str = r#"
-- Patients table: one row per distinct PatientID
CREATE TABLE IF NOT EXISTS patients (
    PatientID TEXT PRIMARY KEY NOT NULL,
    PatientName TEXT,
    PatientBirthDate TEXT
);

-- Studies table: one row per distinct study
CREATE TABLE IF NOT EXISTS studies (
    StudyInstanceUID TEXT PRIMARY KEY NOT NULL,
    PatientID TEXT NOT NULL,
    StudyDate TEXT,
    FOREIGN KEY (PatientID) REFERENCES patients(PatientID)
);

-- Series table: one row per distinct series; FilePath is the most
-- recently inserted slice location for that series
CREATE TABLE IF NOT EXISTS series (
    SeriesInstanceUID TEXT PRIMARY KEY NOT NULL,
    StudyInstanceUID TEXT NOT NULL,
    SliceThickness TEXT,
    PixelSpacing TEXT,
    FilePath TEXT NOT NULL,
    FOREIGN KEY (StudyInstanceUID) REFERENCES studies(StudyInstanceUID)
);

-- Indexes for common queries
CREATE INDEX IF NOT EXISTS idx_studies_patient_id ON studies(PatientID);
CREATE INDEX IF NOT EXISTS idx_series_study_uid ON series(StudyInstanceUID);
"#;

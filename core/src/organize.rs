use crate::error::{DicurateError, Result};
use crate::types::SliceMetadata;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Policy for a move whose destination filename already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Append a numeric suffix to the filename until it is free
    #[default]
    Rename,
    /// Replace the existing file
    Overwrite,
    /// Abort the reorganization
    Fail,
}

/// Moves each record's file into the `<base>/<patient>/<study>/<series>/`
/// hierarchy, creating missing directories
///
/// This is a destructive move, not a copy. On success the record's
/// `file_path` is rewritten to the new location, so downstream persistence
/// sees post-move paths. A per-record I/O failure is logged and that file
/// is left in place; only a collision under [`CollisionPolicy::Fail`]
/// aborts the whole stage.
///
/// Returns the number of files moved.
pub fn organize_files(
    records: &mut [SliceMetadata],
    base: &Path,
    policy: CollisionPolicy,
) -> Result<usize> {
    let mut moved = 0;
    for record in records.iter_mut() {
        let target_dir = base
            .join(&record.patient_id)
            .join(&record.study_instance_uid)
            .join(&record.series_instance_uid);

        match move_into(&record.file_path, &target_dir, policy) {
            Ok(new_path) => {
                record.file_path = new_path;
                moved += 1;
            }
            Err(e @ DicurateError::OrganizeError(_)) => return Err(e),
            Err(e) => {
                error!("Failed to move {}: {}", record.file_path.display(), e);
            }
        }
    }
    info!("Organized {} of {} files under {}", moved, records.len(), base.display());
    Ok(moved)
}

/// Moves one file into `target_dir`, preserving its filename
fn move_into(source: &Path, target_dir: &Path, policy: CollisionPolicy) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)?;

    let filename = source
        .file_name()
        .ok_or_else(|| DicurateError::OrganizeError(format!("{} has no filename", source.display())))?;
    let mut dest = target_dir.join(filename);

    if dest.exists() && dest != *source {
        match policy {
            CollisionPolicy::Overwrite => {}
            CollisionPolicy::Rename => dest = next_free_path(&dest),
            CollisionPolicy::Fail => {
                return Err(DicurateError::OrganizeError(format!(
                    "destination already exists: {}",
                    dest.display()
                )));
            }
        }
    }

    // rename fails across filesystems; fall back to copy + remove
    if fs::rename(source, &dest).is_err() {
        fs::copy(source, &dest)?;
        fs::remove_file(source)?;
    }

    Ok(dest)
}

/// First `name_N.ext` variant that does not exist yet
fn next_free_path(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = dest.extension().map(|s| s.to_string_lossy().into_owned());
    let parent = dest.parent().unwrap_or_else(|| Path::new(""));

    for n in 1.. {
        let candidate = match &ext {
            Some(ext) => parent.join(format!("{}_{}.{}", stem, n, ext)),
            None => parent.join(format!("{}_{}", stem, n)),
        };
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn record(patient: &str, study: &str, series: &str, path: PathBuf) -> SliceMetadata {
        SliceMetadata {
            patient_id: patient.to_string(),
            study_instance_uid: study.to_string(),
            series_instance_uid: series.to_string(),
            slice_thickness: "1.0".to_string(),
            pixel_spacing: None,
            study_date: "20240101".to_string(),
            file_path: path,
        }
    }

    fn touch(path: &Path, contents: &[u8]) {
        File::create(path).unwrap().write_all(contents).unwrap();
    }

    #[test]
    fn test_moves_file_into_hierarchy_and_updates_record() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("slice.dcm");
        touch(&source, b"data");
        let base = dir.path().join("organized");

        let mut records = vec![record("P1", "S1", "SE1", source.clone())];
        let moved = organize_files(&mut records, &base, CollisionPolicy::Rename).unwrap();

        assert_eq!(moved, 1);
        let expected = base.join("P1").join("S1").join("SE1").join("slice.dcm");
        assert!(expected.is_file());
        assert!(!source.exists());
        assert_eq!(records[0].file_path, expected);
    }

    #[test]
    fn test_rename_policy_keeps_both_files() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("organized");
        let first = dir.path().join("a/slice.dcm");
        let second = dir.path().join("b/slice.dcm");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        touch(&first, b"one");
        touch(&second, b"two");

        let mut records = vec![
            record("P1", "S1", "SE1", first),
            record("P1", "S1", "SE1", second),
        ];
        let moved = organize_files(&mut records, &base, CollisionPolicy::Rename).unwrap();

        assert_eq!(moved, 2);
        let series_dir = base.join("P1").join("S1").join("SE1");
        assert!(series_dir.join("slice.dcm").is_file());
        assert!(series_dir.join("slice_1.dcm").is_file());
        assert_eq!(records[1].file_path, series_dir.join("slice_1.dcm"));
    }

    #[test]
    fn test_overwrite_policy_replaces() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("organized");
        let first = dir.path().join("a/slice.dcm");
        let second = dir.path().join("b/slice.dcm");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        touch(&first, b"one");
        touch(&second, b"two");

        let mut records = vec![
            record("P1", "S1", "SE1", first),
            record("P1", "S1", "SE1", second),
        ];
        organize_files(&mut records, &base, CollisionPolicy::Overwrite).unwrap();

        let dest = base.join("P1").join("S1").join("SE1").join("slice.dcm");
        assert_eq!(fs::read(&dest).unwrap(), b"two");
        assert_eq!(records[0].file_path, dest);
        assert_eq!(records[1].file_path, dest);
    }

    #[test]
    fn test_fail_policy_aborts_on_collision() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("organized");
        let first = dir.path().join("a/slice.dcm");
        let second = dir.path().join("b/slice.dcm");
        fs::create_dir_all(first.parent().unwrap()).unwrap();
        fs::create_dir_all(second.parent().unwrap()).unwrap();
        touch(&first, b"one");
        touch(&second, b"two");

        let mut records = vec![
            record("P1", "S1", "SE1", first),
            record("P1", "S1", "SE1", second),
        ];
        assert!(organize_files(&mut records, &base, CollisionPolicy::Fail).is_err());
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("organized");
        let missing = dir.path().join("gone.dcm");

        let original = missing.clone();
        let mut records = vec![record("P1", "S1", "SE1", missing)];
        let moved = organize_files(&mut records, &base, CollisionPolicy::Rename).unwrap();

        assert_eq!(moved, 0);
        // Record keeps its original path when the move fails
        assert_eq!(records[0].file_path, original);
    }
}

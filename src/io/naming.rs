use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Default filename prefix for generated documents.
pub const DEFAULT_PREFIX: &str = "badge";

/// Build `<prefix>_<date>_<time>_<seq>.pdf`.
///
/// Time separators are dots so the name is valid on every filesystem.
/// `seq` is the 1-based row number and keeps names unique within a run even
/// when two rows share the same clock reading.
pub fn output_file_name(prefix: &str, now: NaiveDateTime, seq: usize) -> String {
    format!(
        "{}_{}_{}_{:04}.pdf",
        prefix,
        now.format("%Y-%m-%d"),
        now.format("%H.%M.%S%.6f"),
        seq
    )
}

/// Place `file_name` under `output_dir`, or leave it relative to the working directory.
pub fn output_path(output_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

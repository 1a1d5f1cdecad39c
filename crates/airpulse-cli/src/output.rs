//! CSV persistence for analyzed rows, with a console fallback.

use std::io::Write;
use std::path::{Path, PathBuf};

use airpulse_core::AnalyzedRow;
use thiserror::Error;

/// Number of rows echoed to the console after a successful save.
pub(crate) const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Error)]
pub(crate) enum PersistError {
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the rows of a run ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Persisted {
    /// Written to this CSV file.
    File(PathBuf),
    /// The file could not be written; rows went to the console instead.
    Console,
    /// There were no rows, so nothing was written anywhere.
    Nothing,
}

/// Write `rows` as CSV (header first) to any writer.
pub(crate) fn write_rows<W: Write>(sink: W, rows: &[AnalyzedRow]) -> Result<(), PersistError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(AnalyzedRow::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `rows` to `path`, creating the parent directory when needed.
pub(crate) fn write_csv_file(path: &Path, rows: &[AnalyzedRow]) -> Result<(), PersistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %parent.display(), "created output directory");
        }
    }

    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

/// Save `rows` to `path`, falling back to `console` if the file cannot be
/// written.
///
/// On success the first [`PREVIEW_ROWS`] rows are echoed to `console`. With
/// no rows nothing is written and no file is created.
pub(crate) fn persist_rows<W: Write>(
    rows: &[AnalyzedRow],
    path: &Path,
    mut console: W,
) -> Persisted {
    if rows.is_empty() {
        tracing::info!("no comments were analyzed; nothing to save");
        return Persisted::Nothing;
    }

    match write_csv_file(path, rows) {
        Ok(()) => {
            tracing::info!(path = %path.display(), rows = rows.len(), "results saved");
            let preview = &rows[..rows.len().min(PREVIEW_ROWS)];
            let shown = writeln!(console, "First {} rows of the saved data:", preview.len())
                .map_err(PersistError::from)
                .and_then(|()| write_rows(&mut console, preview));
            if let Err(e) = shown {
                tracing::warn!(error = %e, "could not print preview");
            }
            Persisted::File(path.to_path_buf())
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "failed to save results; printing them to the console instead"
            );
            let shown = writeln!(console, "Results ({} rows):", rows.len())
                .map_err(PersistError::from)
                .and_then(|()| write_rows(&mut console, rows));
            if let Err(e) = shown {
                tracing::error!(error = %e, "could not print results to the console either");
            }
            Persisted::Console
        }
    }
}

#[cfg(test)]
mod tests {
    use airpulse_core::SentimentLabel;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn row(id: &str, text: &str, sentiment: SentimentLabel) -> AnalyzedRow {
        AnalyzedRow {
            mention_tweet_id: "T1".to_string(),
            mention_tweet_text: "@GulfAir hello".to_string(),
            comment_id: id.to_string(),
            comment_text: text.to_string(),
            comment_author_id: Some("B1".to_string()),
            comment_created_at: Some(Utc.with_ymd_and_hms(2024, 5, 13, 8, 15, 30).unwrap()),
            sentiment,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("airpulse-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn write_rows_emits_header_and_rfc3339_dates() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[row("R1", "great", SentimentLabel::Positive)]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "mention_tweet_id,mention_tweet_text,comment_id,comment_text,comment_author_id,comment_created_at,sentiment"
        );
        assert_eq!(
            lines.next().unwrap(),
            "T1,@GulfAir hello,R1,great,B1,2024-05-13T08:15:30Z,positive"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn write_rows_quotes_commas_quotes_and_newlines() {
        let mut buf = Vec::new();
        write_rows(
            &mut buf,
            &[row("R1", "late, again\n\"never\" again", SentimentLabel::Negative)],
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(
            out.contains("\"late, again\n\"\"never\"\" again\""),
            "unexpected quoting: {out}"
        );
    }

    #[test]
    fn missing_optional_fields_are_empty_cells() {
        let mut r = row("R1", "ok", SentimentLabel::Neutral);
        r.comment_author_id = None;
        r.comment_created_at = None;
        let mut buf = Vec::new();
        write_rows(&mut buf, &[r]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().nth(1).unwrap(), "T1,@GulfAir hello,R1,ok,,,neutral");
    }

    #[test]
    fn persist_creates_parent_directory_and_previews() {
        let path = temp_path("nested/out.csv");
        let rows: Vec<AnalyzedRow> = (0..7)
            .map(|i| row(&format!("R{i}"), "fine", SentimentLabel::Neutral))
            .collect();
        let mut console = Vec::new();

        let persisted = persist_rows(&rows, &path, &mut console);

        assert_eq!(persisted, Persisted::File(path.clone()));
        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved.lines().count(), 8);
        let shown = String::from_utf8(console).unwrap();
        assert!(shown.starts_with("First 5 rows of the saved data:"));
        assert!(shown.contains("R4"));
        assert!(!shown.contains("R5"));

        std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap()).ok();
    }

    #[test]
    fn persist_with_no_rows_creates_nothing() {
        let path = temp_path("empty.csv");
        let mut console = Vec::new();

        let persisted = persist_rows(&[], &path, &mut console);

        assert_eq!(persisted, Persisted::Nothing);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
        assert!(console.is_empty());
    }

    #[test]
    fn persist_falls_back_to_console_when_path_is_unwritable() {
        // A regular file where the output directory should be makes the write fail.
        let blocker = temp_path("blocker");
        std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        std::fs::write(&blocker, b"not a directory").unwrap();
        let path = blocker.join("out.csv");
        let mut console = Vec::new();

        let persisted = persist_rows(
            &[row("R1", "lost luggage", SentimentLabel::Negative)],
            &path,
            &mut console,
        );

        assert_eq!(persisted, Persisted::Console);
        let shown = String::from_utf8(console).unwrap();
        assert!(shown.starts_with("Results (1 rows):"));
        assert!(shown.contains("R1,lost luggage,B1"));

        std::fs::remove_dir_all(blocker.parent().unwrap()).ok();
    }
}

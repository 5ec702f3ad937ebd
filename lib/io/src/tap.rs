//! Source and sink taps.
//!
//! Sources are tab-separated files with a header row; a row that fails
//! structural delimiting is fatal for that input, with no partial-row
//! recovery. Sinks are written through an atomic rename so a run either
//! fully replaces the previous output or leaves it untouched.

use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior::AllowOverwrite};
use serde::{Deserialize, Serialize};

use simrec_core::{Post, SimilarityResult, StopWords, TokenCount};

use crate::error::{Error, Result};

/// Read the posts source: columns `author_id`, `text`.
pub fn read_posts<P: AsRef<Path>>(path: P) -> Result<Vec<Post>> {
    read_tsv(path)
}

/// Read the stop-word source: single column `stop`.
pub fn read_stop_words<P: AsRef<Path>>(path: P) -> Result<StopWords> {
    #[derive(Debug, Deserialize)]
    struct StopRow {
        stop: String,
    }

    let rows: Vec<StopRow> = read_tsv(path)?;
    Ok(rows.into_iter().map(|row| row.stop).collect())
}

/// Write the token-frequency report: columns `token`, `count`.
pub fn write_token_counts<P: AsRef<Path>>(path: P, rows: &[TokenCount]) -> Result<()> {
    write_tsv(path, &["token", "count"], rows)
}

/// Write the similarity results: columns `author_id`,
/// `recommended_author_id`, `similarity`.
pub fn write_similarities<P: AsRef<Path>>(path: P, rows: &[SimilarityResult]) -> Result<()> {
    write_tsv(
        path,
        &["author_id", "recommended_author_id", "similarity"],
        rows,
    )
}

fn read_tsv<P: AsRef<Path>, T: for<'de> Deserialize<'de>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .map_err(|source| Error::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|source| Error::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

// The header is written explicitly so an empty result set still produces
// a well-formed sink file.
fn write_tsv<P: AsRef<Path>, T: Serialize>(path: P, headers: &[&str], rows: &[T]) -> Result<()> {
    let file = AtomicFile::new(path.as_ref(), AllowOverwrite);
    file.write(|out| {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(out);
        writer.write_record(headers)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })
    .map_err(|err| match err {
        atomicwrites::Error::Internal(io) => Error::Io(io),
        atomicwrites::Error::User(user) => user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_posts_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.tsv");
        fs::write(&path, "author_id\ttext\nu1\tthe cat sat on the mat\n").unwrap();

        let posts = read_posts(&path).unwrap();
        assert_eq!(posts, vec![Post::new("u1", "the cat sat on the mat")]);
    }

    #[test]
    fn reads_stop_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stop.tsv");
        fs::write(&path, "stop\nthe\na\non\n").unwrap();

        let stop = read_stop_words(&path).unwrap();
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("the"));
        assert!(!stop.contains("cat"));
    }

    #[test]
    fn malformed_row_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.tsv");
        // Second data row is missing the text column.
        fs::write(&path, "author_id\ttext\nu1\thello there\nu2\n").unwrap();

        let err = read_posts(&path).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn sink_replaces_previous_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.tsv");

        let first = vec![
            TokenCount {
                token: "cat".to_string(),
                count: 2,
            },
            TokenCount {
                token: "mat".to_string(),
                count: 1,
            },
        ];
        write_token_counts(&path, &first).unwrap();

        let second = vec![TokenCount {
            token: "rug".to_string(),
            count: 1,
        }];
        write_token_counts(&path, &second).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "token\tcount\nrug\t1\n");
    }

    #[test]
    fn empty_result_set_still_writes_the_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("similarity.tsv");

        write_similarities(&path, &[]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "author_id\trecommended_author_id\tsimilarity\n");
    }

    #[test]
    fn similarity_rows_round_trip_through_the_sink() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("similarity.tsv");

        let rows = vec![SimilarityResult {
            author_id: "u1".to_string(),
            recommended_author_id: "u2".to_string(),
            similarity: 0.5,
        }];
        write_similarities(&path, &rows).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "author_id\trecommended_author_id\tsimilarity\nu1\tu2\t0.5\n"
        );
    }
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads one score per line. A line that does not parse to a finite number
/// is kept as a missing entry, not dropped; the caller decides which
/// counts it participates in.
pub fn read_scores(path: &Path) -> Result<Vec<Option<f64>>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut scores = Vec::new();
    let mut missing = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        let score = parse_score(&buf);
        if score.is_none() {
            missing += 1;
        }
        scores.push(score);
    }

    if missing > 0 {
        debug!(
            missing,
            total = scores.len(),
            "lines without a finite value kept as missing"
        );
    }
    Ok(scores)
}

pub fn parse_score(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

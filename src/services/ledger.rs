use crate::domain::constants::{LEDGER_HEADER, TIMESTAMP_FORMAT};
use crate::domain::models::{Category, Entity, Vote};
use crate::error::LedgerError;
use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Append-only CSV vote ledger bound to a single file.
///
/// Operations on one `Ledger` are serialized by an internal mutex.
/// Separate processes sharing the same file are not coordinated.
pub struct Ledger {
    path: PathBuf,
    guard: Mutex<()>,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a header-only ledger if the file does not exist yet.
    ///
    /// The header is written to a temp file and linked into place, so the
    /// ledger path never holds a partial header.
    pub fn ensure_initialized(&self) -> Result<(), LedgerError> {
        let _lock = self.lock();
        if self.path.exists() {
            return Ok(());
        }
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(LedgerError::storage(&self.path))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(LedgerError::storage(&self.path))?;
        tmp.write_all(&header_bytes(&self.path)?)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(LedgerError::storage(&self.path))?;
        match tmp.persist_noclobber(&self.path) {
            Ok(_) => {}
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(LedgerError::storage(&self.path)(e.error)),
        }

        info!(path = %self.path.display(), "initialized empty vote ledger");
        Ok(())
    }

    /// Records a vote stamped with the current local time.
    ///
    /// Either the whole record lands in the file or the file is left at
    /// its previous length.
    pub fn append(&self, entity: Entity, category: Category) -> Result<Vote, LedgerError> {
        self.ensure_initialized()?;
        let _lock = self.lock();

        let vote = Vote {
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            entity,
            category,
        };
        let record = encode_record(&self.path, &vote)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(LedgerError::storage(&self.path))?;
        let before = file
            .metadata()
            .map_err(LedgerError::storage(&self.path))?
            .len();

        let mut bytes = Vec::with_capacity(record.len() + 1);
        let needs_break = before > 0
            && !ends_with_newline(&mut file, before).map_err(LedgerError::storage(&self.path))?;
        if needs_break {
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(&record);

        write_or_rollback(&mut file, before, &bytes).map_err(LedgerError::storage(&self.path))?;

        debug!(entity = %vote.entity, category = %vote.category, "vote appended");
        Ok(vote)
    }

    /// Parses raw selections and appends them. Empty or unknown values are
    /// rejected before the file is touched.
    pub fn append_raw(&self, entity: &str, category: &str) -> Result<Vote, LedgerError> {
        let entity: Entity = entity.parse()?;
        let category: Category = category.parse()?;
        self.append(entity, category)
    }

    /// Returns every recorded vote in ledger order.
    pub fn load(&self) -> Result<Vec<Vote>, LedgerError> {
        self.ensure_initialized()?;
        let _lock = self.lock();

        let file = File::open(&self.path).map_err(LedgerError::storage(&self.path))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| csv_failure(&self.path, 1, e))?
            .clone();
        if headers.iter().ne(LEDGER_HEADER.iter().copied()) {
            return Err(LedgerError::corrupt(
                &self.path,
                1,
                format!(
                    "expected header `{}`, found `{}`",
                    LEDGER_HEADER.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let mut votes = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            // header is line 1
            let fallback_line = idx as u64 + 2;
            let row = row.map_err(|e| csv_failure(&self.path, fallback_line, e))?;
            let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);
            votes.push(decode_record(&self.path, line, &row)?);
        }
        debug!(path = %self.path.display(), count = votes.len(), "ledger loaded");
        Ok(votes)
    }

    /// Destroys all records and leaves a header-only ledger.
    ///
    /// The fresh file is written beside the old one and renamed over it,
    /// so a failure leaves the previous ledger untouched.
    pub fn reset(&self) -> Result<(), LedgerError> {
        let _lock = self.lock();
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(LedgerError::storage(&self.path))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(LedgerError::storage(&self.path))?;
        tmp.write_all(&header_bytes(&self.path)?)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(LedgerError::storage(&self.path))?;
        tmp.persist(&self.path)
            .map_err(|e| LedgerError::storage(&self.path)(e.error))?;

        info!(path = %self.path.display(), "vote ledger reset");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.guard.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Writes `bytes` at the end of `file`, truncating back to `before` if
/// the write or the sync fails.
fn write_or_rollback(file: &mut File, before: u64, bytes: &[u8]) -> io::Result<()> {
    let Err(err) = file.write_all(bytes).and_then(|_| file.sync_data()) else {
        return Ok(());
    };
    warn!(error = %err, "vote append failed, rolling back");
    if let Err(rollback) = file.set_len(before) {
        warn!(error = %rollback, "rollback truncate failed");
    }
    Err(err)
}

fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(
    path: &Path,
    mut wtr: csv::Writer<Vec<u8>>,
    fields: &[&str],
) -> Result<Vec<u8>, LedgerError> {
    wtr.write_record(fields).map_err(|e| csv_failure(path, 0, e))?;
    wtr.into_inner()
        .map_err(|e| LedgerError::storage(path)(e.into_error()))
}

fn header_bytes(path: &Path) -> Result<Vec<u8>, LedgerError> {
    finish(path, writer(), &LEDGER_HEADER)
}

fn encode_record(path: &Path, vote: &Vote) -> Result<Vec<u8>, LedgerError> {
    let ts = vote.timestamp.format(TIMESTAMP_FORMAT).to_string();
    finish(
        path,
        writer(),
        &[ts.as_str(), vote.entity.label(), vote.category.ledger_label()],
    )
}

fn decode_record(path: &Path, line: u64, row: &csv::StringRecord) -> Result<Vote, LedgerError> {
    if row.len() != LEDGER_HEADER.len() {
        return Err(LedgerError::corrupt(
            path,
            line,
            format!("expected {} fields, found {}", LEDGER_HEADER.len(), row.len()),
        ));
    }
    let timestamp = NaiveDateTime::parse_from_str(&row[0], TIMESTAMP_FORMAT)
        .map_err(|e| LedgerError::corrupt(path, line, format!("bad timestamp `{}`: {e}", &row[0])))?;
    let entity: Entity = row[1]
        .parse()
        .map_err(|e: LedgerError| LedgerError::corrupt(path, line, e.to_string()))?;
    let category: Category = row[2]
        .parse()
        .map_err(|e: LedgerError| LedgerError::corrupt(path, line, e.to_string()))?;
    Ok(Vote {
        timestamp,
        entity,
        category,
    })
}

fn csv_failure(path: &Path, line: u64, err: csv::Error) -> LedgerError {
    let line = err.position().map(|p| p.line()).unwrap_or(line);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LedgerError::storage(path)(source),
        _ => LedgerError::corrupt(path, line, reason),
    }
}

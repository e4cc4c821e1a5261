//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to stdout and to
//! `<dir>/<app>.log`. When the live file grows past the size limit it is
//! shifted into a fixed ring of backups (`<app>.1.log` is the newest) and
//! the oldest backup is dropped.
//!
//! `log` records are forwarded into the subscriber, so callers can keep
//! using the `log` macros.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static INITIALIZED: OnceLock<PathBuf> = OnceLock::new();

/// Size limit and ring length for the log files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingConfig {
    /// Rotate once the live file would exceed this many bytes
    pub max_file_bytes: u64,
    /// Number of rotated backups kept next to the live file
    pub max_backups: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    Init(String),
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::Init(msg) => write!(f, "Logger init failed: {}", msg),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

struct RollingState {
    dir: PathBuf,
    app_name: String,
    config: RollingConfig,
    file: File,
    written: u64,
}

impl RollingState {
    fn live_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.app_name))
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.app_name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.config.max_backups == 0 {
            self.file = File::create(self.live_path())?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.config.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.config.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        // The live file may have been removed behind our back; start a new one
        match fs::rename(self.live_path(), self.backup_path(1)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
            _ => {}
        }

        self.file = File::create(self.live_path())?;
        self.written = 0;
        Ok(())
    }
}

/// Size-rotated log file writer, cheap to clone
#[derive(Clone)]
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingWriter {
    /// Open (or continue) `<dir>/<app_name>.log`
    pub fn new(dir: impl AsRef<Path>, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let live_path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&live_path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir,
                app_name: app_name.to_string(),
                config,
                file,
                written,
            })),
        })
    }

    pub fn live_path(&self) -> PathBuf {
        self.lock().live_path()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RollingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();
        if state.written > 0 && state.written + buf.len() as u64 > state.config.max_file_bytes {
            state.rotate()?;
        }
        state.file.write_all(buf)?;
        state.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

/// Install the global subscriber with the default rolling config.
///
/// The level filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), LoggerError> {
    let writer = RollingWriter::new(&log_dir, app_name, config)?;
    let live_path = writer.live_path();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(io::stdout);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_ansi(false)
        .with_writer(move || writer.clone());

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    let _ = INITIALIZED.set(live_path);
    Ok(())
}

/// Path of the live log file, once the logger is installed
pub fn log_file() -> Option<&'static Path> {
    INITIALIZED.get().map(PathBuf::as_path)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    log_file().ok_or(LoggerError::NotInitialized)?;
    tracing::info!(target: "rolling_logger", "{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    log_file().ok_or(LoggerError::NotInitialized)?;
    tracing::error!(target: "rolling_logger", "{}", message);
    Ok(())
}

//! Local persistence for vacancies and staff records.
//!
//! Each collection is saved whole, as a single JSON snapshot, and every
//! save overwrites the previous one:
//!
//! ```text
//! <root>/
//!   vacancies.json   # Every vacancy, open and closed
//!   staff.json       # Every staff record, full-time and part-time
//! ```
//!
//! A missing file is a valid empty collection.

mod snapshot;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::model::{StaffRecord, Vacancy};

const STAFF_FILE: &str = "staff.json";
const VACANCY_FILE: &str = "vacancies.json";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Whole-collection load and save.
///
/// Loading a collection that was never saved yields an empty collection,
/// not an error.
pub trait Gateway {
    fn load_staff(&self) -> Result<Vec<StaffRecord>>;
    fn save_staff(&self, staff: &[StaffRecord]) -> Result<()>;
    fn load_vacancies(&self) -> Result<Vec<Vacancy>>;
    fn save_vacancies(&self, vacancies: &[Vacancy]) -> Result<()>;
}

/// Local file-based storage for both collections.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.recruit/data/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".recruit").join("data"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Gateway for Storage {
    fn load_staff(&self) -> Result<Vec<StaffRecord>> {
        snapshot::read(&self.root.join(STAFF_FILE))
    }

    fn save_staff(&self, staff: &[StaffRecord]) -> Result<()> {
        snapshot::write(&self.root.join(STAFF_FILE), staff)
    }

    fn load_vacancies(&self) -> Result<Vec<Vacancy>> {
        snapshot::read(&self.root.join(VACANCY_FILE))
    }

    fn save_vacancies(&self, vacancies: &[Vacancy]) -> Result<()> {
        snapshot::write(&self.root.join(VACANCY_FILE), vacancies)
    }
}

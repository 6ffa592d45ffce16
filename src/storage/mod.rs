// Flat-file storage module: one line-delimited text file per entity type.
// Every mutating operation reloads the full collection, applies the change,
// and rewrites the full file (load-all, mutate, save-all). The rewrite
// truncates in place without an atomic rename, so a crash mid-write can
// leave a partial file; acceptable at this scale for a single instance.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::models::{AdminAccount, GymClass, Record, Trainee, Trainer};

/// Storage manager for the flat-file record store
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Resolve the data directory (default: current working directory).
    pub fn data_path() -> Result<PathBuf> {
        // Check for test environment variable first
        if let Ok(test_path) = std::env::var("GYM_DATA_DIR") {
            return Ok(PathBuf::from(test_path));
        }

        Ok(crate::config::Config::load()?.storage.data_dir)
    }

    /// Initialize storage, seeding the admin credentials file if absent.
    pub fn init() -> Result<Self> {
        Self::init_with_path(Self::data_path()?)
    }

    /// Initialize storage against an explicit directory.
    pub fn init_with_path(data_dir: PathBuf) -> Result<Self> {
        tracing::info!("Initializing record store at {:?}", data_dir);

        if !data_dir.as_os_str().is_empty() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
        }

        let storage = Self { data_dir };
        storage.seed_default_admin()?;
        Ok(storage)
    }

    /// Write the default admin record on first run so login is possible.
    fn seed_default_admin(&self) -> Result<()> {
        let path = self.file_path(AdminAccount::FILE_NAME);
        if !path.exists() {
            tracing::info!("Seeding default admin credentials at {:?}", path);
            self.save(&[AdminAccount::default_admin()])?;
        }
        Ok(())
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Load every record of one entity type, skipping blank lines and
    /// logging (but not failing on) corrupt records.
    pub fn load<T: Record>(&self) -> Result<Vec<T>> {
        let path = self.file_path(T::FILE_NAME);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;

        let mut records = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match T::decode(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping corrupt record in {}: {} ({})", T::FILE_NAME, line, e);
                }
            }
        }

        tracing::debug!("Loaded {} records from {}", records.len(), T::FILE_NAME);
        Ok(records)
    }

    /// Rewrite one entity type's backing file from the full collection.
    pub fn save<T: Record>(&self, records: &[T]) -> Result<()> {
        let path = self.file_path(T::FILE_NAME);

        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to open {:?} for writing", path))?;
        for record in records {
            writeln!(file, "{}", record.encode())
                .with_context(|| format!("Failed to write to {:?}", path))?;
        }

        tracing::debug!("Saved {} records to {}", records.len(), T::FILE_NAME);
        Ok(())
    }

    pub fn load_trainees(&self) -> Result<Vec<Trainee>> {
        self.load()
    }

    pub fn save_trainees(&self, trainees: &[Trainee]) -> Result<()> {
        self.save(trainees)
    }

    pub fn load_trainers(&self) -> Result<Vec<Trainer>> {
        self.load()
    }

    pub fn save_trainers(&self, trainers: &[Trainer]) -> Result<()> {
        self.save(trainers)
    }

    pub fn load_classes(&self) -> Result<Vec<GymClass>> {
        self.load()
    }

    pub fn save_classes(&self, classes: &[GymClass]) -> Result<()> {
        self.save(classes)
    }

    pub fn load_admins(&self) -> Result<Vec<AdminAccount>> {
        self.load()
    }
}

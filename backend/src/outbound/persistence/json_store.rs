//! Flat-file JSON adapter for the collection store port.
//!
//! Each collection lives in one JSON array file inside a data directory
//! held as a capability-scoped handle. A missing file reads as the empty
//! collection; saves rewrite the whole file atomically via a temporary
//! file and rename so a crashed write never leaves a torn collection.
//! Nothing is cached: every load re-reads the file and every save rewrites
//! it, so each operation observes durable state as of its own load.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs::{Dir, OpenOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ports::{CollectionStore, StoreError};
use crate::domain::{Evaluation, Lecturer, User};

const USERS_FILE: &str = "users.json";
const LECTURERS_FILE: &str = "lecturers.json";
const EVALUATIONS_FILE: &str = "evaluations.json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Collection store backed by JSON files in a single directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: Dir,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the directory cannot be created
    /// and [`StoreError::Read`] when it cannot be opened.
    pub fn open(data_dir: &Utf8Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir.as_std_path()).map_err(|err| StoreError::Write {
            path: data_dir.to_path_buf(),
            message: err.to_string(),
        })?;
        let dir = Dir::open_ambient_dir(data_dir.as_std_path(), cap_std::ambient_authority())
            .map_err(|err| StoreError::Read {
                path: data_dir.to_path_buf(),
                message: err.to_string(),
            })?;
        Ok(Self { dir })
    }

    fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let contents = match self.dir.read_to_string(name) {
            Ok(contents) => contents,
            // First use: the collection simply does not exist yet.
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Read {
                    path: Utf8PathBuf::from(name),
                    message: err.to_string(),
                });
            }
        };
        serde_json::from_str(&contents).map_err(|err| StoreError::Corrupt {
            path: Utf8PathBuf::from(name),
            message: err.to_string(),
        })
    }

    fn write_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records).map_err(|err| StoreError::Write {
            path: Utf8PathBuf::from(name),
            message: err.to_string(),
        })?;
        self.write_atomic(name, &contents)
    }

    /// Write via a hidden temp file in the same directory, then rename over
    /// the target so readers never observe a partial file.
    fn write_atomic(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{}.tmp.{}.{}", name, std::process::id(), counter);
        let write_error = |message: String| StoreError::Write {
            path: Utf8PathBuf::from(name),
            message,
        };

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self
            .dir
            .open_with(&tmp_name, &options)
            .map_err(|err| write_error(err.to_string()))?;

        if let Err(err) = file
            .write_all(contents.as_bytes())
            .and_then(|()| file.sync_all())
        {
            drop(file);
            // Best-effort cleanup of the temp file.
            drop(self.dir.remove_file(&tmp_name));
            return Err(write_error(err.to_string()));
        }
        drop(file);

        if let Err(err) = self.rename_over_target(&tmp_name, name) {
            drop(self.dir.remove_file(&tmp_name));
            return Err(write_error(err.to_string()));
        }
        Ok(())
    }

    #[cfg(windows)]
    fn rename_over_target(&self, tmp_name: &str, target_name: &str) -> io::Result<()> {
        // Windows rename fails if the target exists, so remove it first.
        match self.dir.remove_file(target_name) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        self.dir.rename(tmp_name, &self.dir, target_name)
    }

    #[cfg(not(windows))]
    fn rename_over_target(&self, tmp_name: &str, target_name: &str) -> io::Result<()> {
        self.dir.rename(tmp_name, &self.dir, target_name)
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load_users(&self) -> Result<Vec<User>, StoreError> {
        self.read_collection(USERS_FILE)
    }

    async fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.write_collection(USERS_FILE, users)
    }

    async fn load_lecturers(&self) -> Result<Vec<Lecturer>, StoreError> {
        self.read_collection(LECTURERS_FILE)
    }

    async fn save_lecturers(&self, lecturers: &[Lecturer]) -> Result<(), StoreError> {
        self.write_collection(LECTURERS_FILE, lecturers)
    }

    async fn load_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        self.read_collection(EVALUATIONS_FILE)
    }

    async fn save_evaluations(&self, evaluations: &[Evaluation]) -> Result<(), StoreError> {
        self.write_collection(EVALUATIONS_FILE, evaluations)
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{EmailAddress, LecturerId, Rating, UserIndex};

    fn store_in(dir: &TempDir) -> JsonFileStore {
        let path = Utf8Path::from_path(dir.path()).expect("utf-8 temp path");
        JsonFileStore::open(path).expect("open store")
    }

    fn user(position: usize, email: &str) -> User {
        User {
            index: UserIndex::for_position(position),
            name: format!("user-{position}"),
            email: EmailAddress::new(email).expect("valid email"),
        }
    }

    #[tokio::test]
    async fn missing_files_load_as_empty_collections() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        assert!(store.load_users().await.expect("load users").is_empty());
        assert!(
            store
                .load_lecturers()
                .await
                .expect("load lecturers")
                .is_empty()
        );
        assert!(
            store
                .load_evaluations()
                .await
                .expect("load evaluations")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn open_creates_the_data_directory() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("nested/data");
        let path = Utf8Path::from_path(&nested).expect("utf-8 temp path");

        let store = JsonFileStore::open(path).expect("open store");
        assert!(store.load_users().await.expect("load users").is_empty());
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn round_trip_preserves_records_and_order() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        let users = vec![user(1, "a@x.com"), user(2, "b@x.com")];
        store.save_users(&users).await.expect("save users");
        assert_eq!(store.load_users().await.expect("load users"), users);

        let lecturers = vec![Lecturer {
            id: LecturerId::for_position(1),
            name: "Dr. X".to_owned(),
            department: "CS".to_owned(),
        }];
        store
            .save_lecturers(&lecturers)
            .await
            .expect("save lecturers");
        assert_eq!(
            store.load_lecturers().await.expect("load lecturers"),
            lecturers
        );

        let evaluations = vec![Evaluation {
            user_index: "0001".to_owned(),
            lecturer_id: "L0001".to_owned(),
            rating: Rating::new(5).expect("valid rating"),
            comments: None,
        }];
        store
            .save_evaluations(&evaluations)
            .await
            .expect("save evaluations");
        assert_eq!(
            store.load_evaluations().await.expect("load evaluations"),
            evaluations
        );
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        store
            .save_users(&[user(1, "a@x.com"), user(2, "b@x.com")])
            .await
            .expect("save users");
        store
            .save_users(&[user(1, "a@x.com")])
            .await
            .expect("save users");

        let users = store.load_users().await.expect("load users");
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn collections_use_deterministic_file_names() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store
            .save_users(&[user(1, "a@x.com")])
            .await
            .expect("save users");

        assert!(dir.path().join("users.json").is_file());
    }

    #[tokio::test]
    async fn corrupt_file_reports_corrupt_error() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        std::fs::write(dir.path().join("users.json"), "not json").expect("write corrupt file");

        let err = store.load_users().await.expect_err("load fails");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn atomic_write_leaves_no_temp_files_behind() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store
            .save_users(&[user(1, "a@x.com")])
            .await
            .expect("save users");
        store
            .save_users(&[user(1, "a@x.com"), user(2, "b@x.com")])
            .await
            .expect("save users");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read data dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "temp files remained: {leftovers:?}");
    }

    #[tokio::test]
    async fn stored_shape_matches_the_wire_schema() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store
            .save_users(&[user(1, "a@x.com")])
            .await
            .expect("save users");

        let raw = std::fs::read_to_string(dir.path().join("users.json")).expect("read users file");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!([
                { "index": "0001", "name": "user-1", "email": "a@x.com" }
            ])
        );
    }
}

use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::i18n::Language;

/// Key under which the display language is stored
pub const LANGUAGE_KEY: &str = "app-language";

/// Preferences persists user choices in a small SQLite key/value table.
pub struct Preferences {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl Preferences {
    /// Open the preference database in the user's data directory:
    /// - Linux: ~/.local/share/fluent-icons/preferences.db
    /// - macOS: ~/Library/Application Support/fluent-icons/preferences.db
    /// - Windows: %APPDATA%\fluent-icons\preferences.db
    ///
    /// Falls back to an in-memory store when no data directory exists
    /// or the file cannot be opened, so the session still works.
    pub fn new() -> Self {
        let opened = Self::get_db_path()
            .ok_or_else(|| "no user data directory".to_string())
            .and_then(|path| Self::open(&path).map_err(|e| e.to_string()));

        match opened {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("⚠️  Preferences will not persist: {}", e);
                Self::in_memory()
            }
        }
    }

    /// Open or create a preference database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!("📁 Preferences database at: {}", path.display());

        let prefs = Preferences {
            conn,
            db_path: Some(path.to_path_buf()),
        };
        prefs.init_schema()?;
        Ok(prefs)
    }

    pub fn in_memory() -> Self {
        // An in-memory SQLite database only fails to open when out of memory
        let conn = Connection::open_in_memory().expect("SQLite in-memory database");
        let prefs = Preferences { conn, db_path: None };
        if let Err(e) = prefs.init_schema() {
            tracing::warn!("⚠️  Failed to initialise in-memory preferences: {}", e);
        }
        prefs
    }

    fn get_db_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push("fluent-icons");
        path.push("preferences.db");
        Some(path)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    /// The stored language, or the system language when nothing valid
    /// has been stored yet
    pub fn language(&self) -> Language {
        match self.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(Language::system),
            Ok(None) => Language::system(),
            Err(e) => {
                tracing::warn!("⚠️  Failed to read language preference: {}", e);
                Language::system()
            }
        }
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.set(LANGUAGE_KEY, language.code())
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("db_path", &self.db_path)
            .finish()
    }
}

//! SQLite-backed storage of named boards
//!
//! Boards are kept in their serialized text form together with their
//! dimensions, so a stored board can be rebuilt with [`Board::new`] followed
//! by [`Board::deserialize`].

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{info, instrument, warn};

use crate::board::Board;
use crate::error::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS boards (
    name          TEXT PRIMARY KEY,
    row_count     INTEGER NOT NULL,
    column_count  INTEGER NOT NULL,
    board_data    TEXT NOT NULL,
    revision      INTEGER NOT NULL,
    saved_at      TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";

/// Named board storage
pub struct BoardStore {
    conn: Connection,
}

impl BoardStore {
    /// Open (creating if needed) a store file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let store = Self::init(conn)?;
        info!(path = %path.display(), "Board store ready");
        Ok(store)
    }

    /// Store that lives only as long as this value
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(BoardStore { conn })
    }

    /// Save `board` under `name`, replacing any board already saved there
    #[instrument(skip(self, board), fields(rows = board.rows(), columns = board.columns()))]
    pub fn save(&self, name: &str, board: &Board) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO boards (name, row_count, column_count, board_data, revision, saved_at)
             VALUES (?1, ?2, ?3, ?4,
                     (SELECT COALESCE(MAX(revision), 0) + 1 FROM boards),
                     CURRENT_TIMESTAMP)
             ON CONFLICT(name) DO UPDATE SET
                 row_count = excluded.row_count,
                 column_count = excluded.column_count,
                 board_data = excluded.board_data,
                 revision = excluded.revision,
                 saved_at = excluded.saved_at",
            params![
                name,
                board.rows() as i64,
                board.columns() as i64,
                board.serialize()
            ],
        )?;
        info!("Board saved");
        Ok(())
    }

    /// Load the board saved under `name`
    #[instrument(skip(self))]
    pub fn load(&self, name: &str) -> Result<Option<Board>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT row_count, column_count, board_data FROM boards WHERE name = ?1",
                [name],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((rows, columns, data)) = row else {
            warn!("No board found");
            return Ok(None);
        };

        let rows = usize::try_from(rows).unwrap_or(0);
        let columns = usize::try_from(columns).unwrap_or(0);
        let mut board = Board::new(rows, columns).map_err(|source| StoreError::CorruptBoard {
            name: name.to_string(),
            source,
        })?;
        board.deserialize(&data);
        info!("Board loaded");
        Ok(Some(board))
    }

    /// Names of all saved boards, most recently saved first
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM boards ORDER BY revision DESC")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = names.len(), "Listed saved boards");
        Ok(names)
    }

    /// Delete the board saved under `name`. Returns whether one existed.
    #[instrument(skip(self))]
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM boards WHERE name = ?1", [name])?;
        if affected > 0 {
            info!("Board deleted");
        } else {
            warn!("No board found to delete");
        }
        Ok(affected > 0)
    }
}

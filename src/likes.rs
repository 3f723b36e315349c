//! Liked-recipe store with local persistence.

use log::{debug, warn};

use crate::model::Like;
use crate::storage::Storage;

/// Storage key the whole collection is serialized under.
pub const STORAGE_KEY: &str = "likes";

/// Tracks liked recipes and mirrors every mutation to storage as one JSON
/// array. At most one entry per recipe id.
pub struct Likes<S: Storage> {
    likes: Vec<Like>,
    storage: S,
}

impl<S: Storage> Likes<S> {
    /// Create an empty store and restore any previously persisted likes.
    /// An absent key or unreadable content yields an empty collection.
    pub fn new(storage: S) -> Self {
        let mut store = Likes {
            likes: Vec::new(),
            storage,
        };
        store.read_storage();
        store
    }

    /// Like a recipe. Liking an already-liked id is idempotent: the
    /// existing entry is returned unchanged and nothing is appended.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> &Like {
        let id = id.into();
        if let Some(pos) = self.likes.iter().position(|like| like.id == id) {
            debug!("recipe {} already liked", id);
            return &self.likes[pos];
        }
        self.likes.push(Like {
            id,
            title: title.into(),
            author: author.into(),
            img: img.into(),
        });
        self.persist();
        self.likes.last().expect("just pushed")
    }

    /// Unlike a recipe. Missing ids are a silent no-op (nothing is
    /// persisted in that case either).
    pub fn delete_like(&mut self, id: &str) {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() != before {
            self.persist();
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn get_num_likes(&self) -> usize {
        self.likes.len()
    }

    /// Likes in the order they were added.
    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// Serialize the whole collection to storage, overwriting prior
    /// content. Failures are logged and do not poison in-memory state.
    pub fn persist(&mut self) {
        let json = match serde_json::to_string(&self.likes) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize likes: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(STORAGE_KEY, &json) {
            warn!("failed to persist likes: {e}");
        }
    }

    /// Reload the collection from storage. Absent or invalid content
    /// initializes to empty rather than erroring.
    pub fn read_storage(&mut self) {
        self.likes = match self.storage.read(STORAGE_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("discarding invalid likes storage: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read likes storage: {e}");
                Vec::new()
            }
        };
        debug!("restored {} like(s)", self.likes.len());
    }
}

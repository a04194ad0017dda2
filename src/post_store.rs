use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::content::Document;

fn is_empty_path(path: &PathBuf) -> bool {
    path.as_os_str().is_empty()
}

/// Durable content identity, keyed by the metadata id of its main document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, skip_serializing_if = "is_empty_path")]
    pub file_path: PathBuf,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_hash: String,
    pub created_at: DateTime<Utc>,
    /// Only advanced when `content_hash` changes.
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub main: Document,
    /// Language code to translated document.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translated: BTreeMap<String, Document>,
}

impl Post {
    pub fn new(id: &str, now: DateTime<Utc>) -> Post {
        Post {
            id: id.to_string(),
            file_path: PathBuf::new(),
            url_path: String::new(),
            content_hash: String::new(),
            created_at: now,
            updated_at: now,
            main: Document::default(),
            translated: BTreeMap::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Post>, D::Error>
where
    D: Deserializer<'de>,
{
    let posts: Option<BTreeMap<String, Post>> = Option::deserialize(deserializer)?;
    Ok(posts.unwrap_or_default())
}

/// Every post ever seen, by id. This is the whole persisted state.
///
/// Posts are never removed: a post whose source disappeared stays in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    posts: BTreeMap<String, Post>,
}

impl PostStore {
    pub fn new() -> PostStore {
        PostStore::default()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn insert(&mut self, post: Post) -> Option<Post> {
        self.posts.insert(post.id.clone(), post)
    }

    /// Finds the post for `id`, creating it with both timestamps at `now` when absent.
    /// The flag is true when the post was created.
    pub fn locate_or_create(&mut self, id: &str, now: DateTime<Utc>) -> (&mut Post, bool) {
        let mut created = false;
        let post = self.posts.entry(id.to_string()).or_insert_with(|| {
            created = true;
            Post::new(id, now)
        });
        (post, created)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

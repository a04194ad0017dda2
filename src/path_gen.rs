use lazy_static::lazy_static;
use rand::rngs::OsRng;
use rand::RngCore;
use regex::Regex;

pub const DEFAULT_ROUTE_PREFIX: &str = "/blog/posts";
pub const DEFAULT_ROOT_PREFIX: &str = "root";

/// Random bytes appended to generated paths.
pub trait EntropySource {
    fn fill(&self, buf: &mut [u8]);
}

pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Lowercased title with whitespace and URL-unsafe characters turned into single hyphens.
pub fn slugify(title: &str, root_prefix: &str) -> String {
    lazy_static! {
        static ref UNSAFE_CHARS: Regex = Regex::new(r#"[\s/{}|\\^~\[\]'"`]"#).unwrap();
        static ref HYPHEN_RUNS: Regex = Regex::new(r"-{2,}").unwrap();
    }

    let title = title.strip_prefix(root_prefix).unwrap_or(title);
    let title = title.trim_start_matches('/').to_lowercase();

    let slug = UNSAFE_CHARS.replace_all(&title, "-");
    HYPHEN_RUNS.replace_all(&slug, "-").into_owned()
}

/// Builds `<route>/<slug>-<8 hex chars>` paths for posts.
pub struct PathGenerator {
    route_prefix: String,
    root_prefix: String,
    entropy: Box<dyn EntropySource>,
}

impl PathGenerator {
    pub fn new(route_prefix: &str, root_prefix: &str, entropy: Box<dyn EntropySource>) -> Self {
        PathGenerator {
            route_prefix: route_prefix.trim_end_matches('/').to_string(),
            root_prefix: root_prefix.to_string(),
            entropy,
        }
    }

    pub fn generate(&self, title: &str) -> String {
        let mut suffix = [0u8; 4];
        self.entropy.fill(&mut suffix);

        format!("{}/{}-{}", self.route_prefix, slugify(title, &self.root_prefix), hex::encode(suffix))
    }
}

impl Default for PathGenerator {
    fn default() -> Self {
        PathGenerator::new(DEFAULT_ROUTE_PREFIX, DEFAULT_ROOT_PREFIX, Box::new(OsEntropy))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use regex::Regex;

    use crate::test_data::{CountingEntropy, FixedEntropy};

    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World", "root"), "hello-world");
        assert_eq!(slugify("root//nested/Title", "root"), "nested-title");
        assert_eq!(slugify("{A}|[b]~'c'\"d\"`e`^\\f", "root"), "-a-b-c-d-e-f");
        assert_eq!(slugify("tabs\tand\nnewlines", "root"), "tabs-and-newlines");
        assert_eq!(slugify("already-a-slug", "root"), "already-a-slug");
        assert_eq!(slugify("", "root"), "");
    }

    #[test]
    fn test_long_runs_collapse_fully() {
        assert_eq!(slugify("a          b", "root"), "a-b");
        assert_eq!(slugify("x [[[{{{|||}}}]]] y", "root"), "x-y");
    }

    #[test]
    fn test_generate_deterministic() {
        let generator = PathGenerator::new(DEFAULT_ROUTE_PREFIX, DEFAULT_ROOT_PREFIX,
                                           Box::new(FixedEntropy(vec![0xde, 0xad, 0xbe, 0xef])));
        assert_eq!(generator.generate("Hello World"), "/blog/posts/hello-world-deadbeef");
        assert_eq!(generator.generate(""), "/blog/posts/-deadbeef");
    }

    #[test]
    fn test_generate_custom_route() {
        let generator = PathGenerator::new("/notes/", "content", Box::new(FixedEntropy(vec![1])));
        assert_eq!(generator.generate("content/Rust Tips"), "/notes/rust-tips-01010101");
    }

    #[test]
    fn test_same_title_differs() {
        let pattern = Regex::new(r"^/blog/posts/hello-world-[0-9a-f]{8}$").unwrap();

        let generator = PathGenerator::default();
        let first = generator.generate("Hello World");
        let second = generator.generate("Hello World");
        assert!(pattern.is_match(&first), "{}", first);
        assert!(pattern.is_match(&second), "{}", second);
        assert_ne!(first, second);

        let generator = PathGenerator::new(DEFAULT_ROUTE_PREFIX, DEFAULT_ROOT_PREFIX,
                                           Box::new(CountingEntropy(Cell::new(0))));
        assert_eq!(generator.generate("Hello World"), "/blog/posts/hello-world-01010101");
        assert_eq!(generator.generate("Hello World"), "/blog/posts/hello-world-02020202");
    }
}

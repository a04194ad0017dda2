//! Content digests used for change detection.
//!
//! Every field is fed to BLAKE3 with a little-endian length prefix, in a fixed order, so
//! adjacent fields cannot run into each other and the digest is the same on any platform.

use blake3::Hasher;

use crate::content::{Document, Metadata};
use crate::text_utils::format_hash_date;

fn write_field(hasher: &mut Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

impl Metadata {
    pub fn hash(&self) -> String {
        let date = self.date.as_ref().map(format_hash_date).unwrap_or_default();

        let mut hasher = Hasher::new();
        write_field(&mut hasher, &self.id);
        write_field(&mut hasher, &self.title);
        write_field(&mut hasher, &self.author);
        write_field(&mut hasher, &self.description);
        write_field(&mut hasher, &date);
        write_field(&mut hasher, &self.path);
        write_field(&mut hasher, &self.package_ref);
        write_field(&mut hasher, &self.canonical);
        write_field(&mut hasher, if self.hidden { "true" } else { "false" });
        hasher.finalize().to_hex().to_string()
    }
}

impl Document {
    pub fn hash(&self) -> String {
        let mut hasher = Hasher::new();
        write_field(&mut hasher, self.doc_type.as_str());
        write_field(&mut hasher, &self.raw_source);
        write_field(&mut hasher, &self.rendered_html);
        write_field(&mut hasher, &self.metadata.hash());
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::content::DocumentType;

    use super::*;

    fn sample() -> Document {
        Document {
            doc_type: DocumentType::Markdown,
            raw_source: "---\ntitle: Hi\n---\nbody\n".to_string(),
            rendered_html: "<p>body</p>\n".to_string(),
            metadata: Metadata {
                id: "a63bd715a3fe4788b0e12a3153778544".to_string(),
                title: "Hi".to_string(),
                date: Some(Utc.with_ymd_and_hms(2022, 4, 2, 12, 5, 0).unwrap()),
                path: "/blog/posts/hi-00000000".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_digest_shape() {
        let digest = sample().hash();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(digest, sample().hash());
    }

    #[test]
    fn test_every_field_counts() {
        let base = sample();
        let base_hash = base.hash();

        let mut doc = base.clone();
        doc.rendered_html.push('x');
        assert_ne!(doc.hash(), base_hash);

        let mut doc = base.clone();
        doc.doc_type = DocumentType::Html;
        assert_ne!(doc.hash(), base_hash);

        let mut doc = base.clone();
        doc.metadata.hidden = true;
        assert_ne!(doc.hash(), base_hash);

        let mut doc = base.clone();
        doc.metadata.package_ref = "gosuda.org/website".to_string();
        assert_ne!(doc.hash(), base_hash);

        let mut doc = base.clone();
        doc.metadata.date = None;
        assert_ne!(doc.hash(), base_hash);
    }

    #[test]
    fn test_sub_second_date_is_ignored() {
        let mut doc = sample();
        let base_hash = doc.hash();
        doc.metadata.date = doc.metadata.date.map(|d| d + Duration::milliseconds(250));
        assert_eq!(doc.hash(), base_hash);
    }

    #[test]
    fn test_field_boundaries() {
        let a = Metadata { title: "ab".to_string(), author: "c".to_string(), ..Default::default() };
        let b = Metadata { title: "a".to_string(), author: "bc".to_string(), ..Default::default() };
        assert_ne!(a.hash(), b.hash());
    }
}

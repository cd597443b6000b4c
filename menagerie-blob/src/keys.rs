use chrono::Datelike;
use uuid::Uuid;

/// Strategy for generating blob keys.
pub trait BlobKeyStrategy: Send + Sync {
    /// Generate a storage key for an upload, given the submitted filename.
    fn object_key(&self, filename: &str) -> String;
}

/// Default key strategy: `{prefix}/{year}/{month}/{uuid}.{ext}`.
///
/// The UUID makes concurrent uploads of same-named files collision-free; the
/// original extension is kept so the public URL still ends in `.png` etc.
#[derive(Debug, Clone)]
pub struct DefaultKeyStrategy {
    prefix: String,
}

impl DefaultKeyStrategy {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for DefaultKeyStrategy {
    fn default() -> Self {
        Self::new("animals")
    }
}

impl BlobKeyStrategy for DefaultKeyStrategy {
    fn object_key(&self, filename: &str) -> String {
        let now = chrono::Utc::now();
        let token = Uuid::new_v4().simple();

        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty());

        match ext {
            Some(ext) => format!(
                "{}/{:04}/{:02}/{}.{}",
                self.prefix,
                now.year(),
                now.month(),
                token,
                ext.to_lowercase()
            ),
            None => format!(
                "{}/{:04}/{:02}/{}",
                self.prefix,
                now.year(),
                now.month(),
                token
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_filename_yields_distinct_keys() {
        let keys = DefaultKeyStrategy::default();
        let a = keys.object_key("cat.png");
        let b = keys.object_key("cat.png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert!(a.starts_with("animals/"));
    }

    #[test]
    fn extension_is_lowercased_and_optional() {
        let keys = DefaultKeyStrategy::new("img");
        assert!(keys.object_key("PHOTO.JPG").ends_with(".jpg"));
        let bare = keys.object_key("no-extension");
        assert!(!bare.contains('.'));
    }
}

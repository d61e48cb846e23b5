use std::path::{Path, PathBuf};
use uuid::Uuid;

use spotter_core::ApplicationError;

/// Binary storage for user uploaded images.
#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    /// Public URL an image stored under `key` is served from.
    fn url_for(&self, key: &str) -> String;

    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<(), ApplicationError>;

    /// Deleting a missing image is not an error.
    async fn delete(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Accepted upload types and the file extension each is stored under.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Extension for an accepted image `content_type`, ignoring parameters
/// such as `; charset=binary`.
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    IMAGE_TYPES
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(essence))
        .map(|(_, ext)| *ext)
}

pub fn user_icon_key(user_id: Uuid, extension: &str) -> String {
    format!("users/{user_id}/icon.{extension}")
}

/// Recovers the key of an icon from the URL stored on the profile.
pub fn stored_icon_key(user_id: Uuid, icon_url: &str) -> Option<String> {
    let file = icon_url.rsplit('/').next()?;
    let extension = file.strip_prefix("icon.")?;
    IMAGE_TYPES
        .iter()
        .any(|(_, ext)| *ext == extension)
        .then(|| user_icon_key(user_id, extension))
}

/// Stores images as plain files below `root`.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
    base_url: String,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ApplicationError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(ApplicationError::Infrastructure(format!(
                "invalid image key '{key}'"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl ImageStore for FsImageStore {
    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<(), ApplicationError> {
        if image_extension(content_type).is_none() {
            return Err(ApplicationError::Infrastructure(format!(
                "refusing to store '{content_type}' as an image"
            )));
        }
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(&path, bytes).await.map_err(io_error)?;

        tracing::debug!(key, content_type, size = bytes.len(), "Image stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ApplicationError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e)),
        }
    }
}

fn io_error(e: std::io::Error) -> ApplicationError {
    ApplicationError::Infrastructure(format!("{:#?}", e))
}

//! File intake: filter candidate files down to images and read their bytes.

use crate::types::{AlbumError, MediaType, Result, SelectedImage};
use std::path::{Path, PathBuf};

/// Keep the candidates whose declared media type is an image type,
/// preserving input order. No count limit; corrupt files are not
/// detected here and fail at decode time instead.
pub fn filter_images(candidates: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|path| MediaType::from_path(path).is_some())
        .collect()
}

/// Read every file into a [`SelectedImage`], assigning selection indices
/// `0..n` in input order. A failed read aborts the whole load with an
/// error naming the file; the caller's previous selection stays intact.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SelectedImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let media_type = MediaType::from_path(path)
            .ok_or_else(|| AlbumError::Config(format!("{} is not an image file", path.display())))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AlbumError::Read {
                name: name.clone(),
                source,
            })?;
        images.push(SelectedImage {
            index,
            name,
            media_type,
            bytes,
        });
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_images_in_order() {
        let candidates = vec![
            PathBuf::from("b.jpg"),
            PathBuf::from("readme.md"),
            PathBuf::from("a.png"),
            PathBuf::from("anim.gif"),
            PathBuf::from("archive.zip"),
        ];
        let kept = filter_images(candidates);
        assert_eq!(
            kept,
            vec![
                PathBuf::from("b.jpg"),
                PathBuf::from("a.png"),
                PathBuf::from("anim.gif"),
            ]
        );
    }

    #[test]
    fn test_filter_empty_selection() {
        assert!(filter_images(Vec::new()).is_empty());
        assert!(filter_images(vec![PathBuf::from("doc.pdf")]).is_empty());
    }

    #[tokio::test]
    async fn test_load_images_assigns_indices() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.jpg");
        tokio::fs::write(&first, b"png bytes").await.unwrap();
        tokio::fs::write(&second, b"jpeg bytes").await.unwrap();

        let images = load_images(&[first, second]).await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].index, 0);
        assert_eq!(images[0].name, "first.png");
        assert_eq!(images[0].media_type, MediaType::Png);
        assert_eq!(images[1].index, 1);
        assert_eq!(images[1].bytes, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_load_images_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        let err = load_images(&[missing]).await.unwrap_err();
        assert!(matches!(err, AlbumError::Read { ref name, .. } if name == "gone.png"));
    }
}

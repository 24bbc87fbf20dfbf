/// Sample folder inventory
///
/// Scans the sample root so the UI can report what is available before
/// the user generates anything.

use crate::samples::resolver::SampleResolver;
use crate::state::data::{Bucket, Variant};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub root: PathBuf,
    pub image_count: usize,
    pub sheet_count: usize,
    /// Expected `sorted_{bucket}.xlsx` files that are absent
    pub missing_sheets: Vec<PathBuf>,
}

impl Inventory {
    pub fn is_complete(&self) -> bool {
        self.missing_sheets.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut status = format!(
            "Ready. {} sample images and {} score sheets in {}.",
            self.image_count,
            self.sheet_count,
            self.root.display()
        );
        if !self.is_complete() {
            status.push_str(&format!(
                " {} score sheets missing; their scores will show as 0.",
                self.missing_sheets.len()
            ));
        }
        status
    }
}

/// Walk the sample root and count images and score sheets
pub fn scan(resolver: &SampleResolver) -> Inventory {
    let root = resolver.root().to_path_buf();
    let mut image_count = 0;
    let mut sheet_count = 0;

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with("image_") && name.ends_with(".png") {
            image_count += 1;
        } else if name.starts_with("sorted_") && name.ends_with(".xlsx") {
            sheet_count += 1;
        }
    }

    let missing_sheets: Vec<PathBuf> = Variant::ALL
        .iter()
        .flat_map(|&variant| Bucket::ALL.iter().map(move |&bucket| (variant, bucket)))
        .map(|(variant, bucket)| resolver.sheet_path(variant, bucket))
        .filter(|path| !path.is_file())
        .collect();

    for path in &missing_sheets {
        tracing::warn!("⚠️  Missing score sheet: {}", path.display());
    }
    tracing::info!(
        "🔍 Scanned {}: {} images, {} sheets",
        root.display(),
        image_count,
        sheet_count
    );

    Inventory {
        root,
        image_count,
        sheet_count,
        missing_sheets,
    }
}

/// Async wrapper so the scan runs off the UI thread
pub async fn scan_async(resolver: SampleResolver) -> Inventory {
    let root = resolver.root().to_path_buf();
    tokio::task::spawn_blocking(move || scan(&resolver))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Inventory scan failed: {}", e);
            Inventory {
                root,
                ..Inventory::default()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_root() {
        let resolver = SampleResolver::new("/nonexistent/Sample image");
        let inventory = scan(&resolver);

        assert_eq!(inventory.image_count, 0);
        assert_eq!(inventory.sheet_count, 0);
        assert_eq!(inventory.missing_sheets.len(), 9);
        assert!(inventory.summary().contains("9 score sheets missing"));
    }

    #[test]
    fn test_counts_samples() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SampleResolver::new(dir.path());

        for variant in Variant::ALL {
            for bucket in Bucket::ALL {
                let bucket_dir = resolver.bucket_dir(variant, bucket);
                fs::create_dir_all(&bucket_dir).unwrap();
                fs::write(bucket_dir.join("image_0.png"), b"").unwrap();
                fs::write(bucket_dir.join("image_1.png"), b"").unwrap();
                fs::write(bucket_dir.join("notes.txt"), b"").unwrap();
                if bucket.index() != 3 || variant != Variant::WithArtist {
                    fs::write(resolver.sheet_path(variant, bucket), b"").unwrap();
                }
            }
        }

        let inventory = scan(&resolver);
        assert_eq!(inventory.image_count, 18);
        assert_eq!(inventory.sheet_count, 8);
        assert_eq!(
            inventory.missing_sheets,
            vec![resolver.sheet_path(Variant::WithArtist, Bucket::new(3).unwrap())]
        );
        assert!(!inventory.is_complete());
    }

    #[tokio::test]
    async fn test_scan_async() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = scan_async(SampleResolver::new(dir.path())).await;
        assert_eq!(inventory.root, dir.path());
        assert_eq!(inventory.image_count, 0);
    }
}

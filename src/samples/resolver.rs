/// Sample resolver
///
/// Turns a prompt id into three image paths and three aesthetic scores,
/// all taken from one randomly drawn bucket so the variants stay comparable.
///
/// Layout under the sample root:
/// `{base|positive|negative}/{1|2|3}/image_{id}.png` plus `sorted_{bucket}.xlsx`

use crate::samples::scores::ScoreSheet;
use crate::state::data::{Bucket, PerVariant, SampleSet, Variant};
use rand::Rng;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::task;

#[derive(Debug, Clone)]
pub struct SampleResolver {
    root: PathBuf,
}

impl SampleResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket_dir(&self, variant: Variant, bucket: Bucket) -> PathBuf {
        self.root
            .join(variant.subfolder())
            .join(bucket.index().to_string())
    }

    pub fn image_path(&self, variant: Variant, bucket: Bucket, prompt_id: &str) -> PathBuf {
        self.bucket_dir(variant, bucket).join(image_filename(prompt_id))
    }

    pub fn sheet_path(&self, variant: Variant, bucket: Bucket) -> PathBuf {
        self.bucket_dir(variant, bucket)
            .join(format!("sorted_{}.xlsx", bucket.index()))
    }

    /// Resolve a prompt id using a bucket drawn from `rng`
    ///
    /// The bucket is drawn before the returned future is polled, so `rng`
    /// is only borrowed for the duration of this call.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        prompt_id: &str,
        rng: &mut R,
    ) -> impl Future<Output = SampleSet> + Send + 'static {
        self.resolve_in(prompt_id, Bucket::draw(rng))
    }

    /// Resolve a prompt id within a given bucket
    ///
    /// The three sheet loads run concurrently on the blocking pool because
    /// calamine reads synchronously.
    pub fn resolve_in(
        &self,
        prompt_id: &str,
        bucket: Bucket,
    ) -> impl Future<Output = SampleSet> + Send + 'static {
        let resolver = self.clone();
        let prompt_id = prompt_id.to_string();

        async move {
            let spawn = |variant: Variant| {
                let resolver = resolver.clone();
                let prompt_id = prompt_id.clone();
                task::spawn_blocking(move || resolver.score(variant, bucket, &prompt_id))
            };

            let base = spawn(Variant::Base);
            let with_artist = spawn(Variant::WithArtist);
            let without_artist = spawn(Variant::WithoutArtist);

            let set = SampleSet {
                bucket,
                image_paths: PerVariant::from_fn(|v| resolver.image_path(v, bucket, &prompt_id)),
                scores: PerVariant {
                    base: join_score(Variant::Base, base.await),
                    with_artist: join_score(Variant::WithArtist, with_artist.await),
                    without_artist: join_score(Variant::WithoutArtist, without_artist.await),
                },
            };
            log_resolved(&prompt_id, &set);
            set
        }
    }

    /// Score for one variant; any lookup failure is logged and becomes 0
    pub fn score(&self, variant: Variant, bucket: Bucket, prompt_id: &str) -> f64 {
        let sheet_path = self.sheet_path(variant, bucket);
        let filename = image_filename(prompt_id);

        match ScoreSheet::open(&sheet_path) {
            Ok(sheet) if sheet.is_empty() => {
                tracing::warn!("⚠️  No usable score rows in {}", sheet_path.display());
                0.0
            }
            Ok(sheet) => match sheet.score_for(&filename) {
                Some(score) => {
                    tracing::debug!("{}/{}/{} scored {:.2}", variant, bucket, filename, score);
                    score
                }
                None => {
                    tracing::debug!(
                        "{} not among {} rows of {}",
                        filename,
                        sheet.len(),
                        sheet_path.display()
                    );
                    0.0
                }
            },
            Err(e) => {
                tracing::error!(
                    "Error getting score for {}/{}/{}: {}",
                    variant.subfolder(),
                    bucket,
                    filename,
                    e
                );
                0.0
            }
        }
    }
}

fn join_score(variant: Variant, joined: Result<f64, task::JoinError>) -> f64 {
    joined.unwrap_or_else(|e| {
        tracing::error!("Score task for {} failed: {}", variant, e);
        0.0
    })
}

fn image_filename(prompt_id: &str) -> String {
    format!("image_{}.png", prompt_id)
}

fn log_resolved(prompt_id: &str, set: &SampleSet) {
    tracing::info!(
        "🎨 Resolved prompt {} from bucket {}: base={:.2} with_artist={:.2} without_artist={:.2}",
        prompt_id,
        set.bucket,
        set.scores.base,
        set.scores.with_artist,
        set.scores.without_artist
    );
}

/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the sample resolver and the UI layer.

use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One of the three prompt-augmentation modes being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    WithArtist,
    WithoutArtist,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Base, Variant::WithArtist, Variant::WithoutArtist];

    /// Folder under the sample root holding this variant's buckets
    pub fn subfolder(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::WithArtist => "positive",
            Variant::WithoutArtist => "negative",
        }
    }

    /// Short label used on tabs
    pub fn tab_label(self) -> &'static str {
        match self {
            Variant::Base => "Base",
            Variant::WithArtist => "With Artist",
            Variant::WithoutArtist => "Without Artist",
        }
    }

    /// Card heading
    pub fn title(self) -> &'static str {
        match self {
            Variant::Base => "Base Image",
            Variant::WithArtist => "With Artist Style Image",
            Variant::WithoutArtist => "Without Artist Style Image",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Variant::Base => "base",
            Variant::WithArtist => "with_artist",
            Variant::WithoutArtist => "without_artist",
        };
        f.write_str(key)
    }
}

/// Index of one of the three parallel sample sets (1, 2 or 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bucket(u8);

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket(1), Bucket(2), Bucket(3)];

    #[cfg(test)]
    pub fn new(index: u8) -> Option<Self> {
        (1..=3).contains(&index).then_some(Bucket(index))
    }

    /// Draw a bucket uniformly from {1, 2, 3}
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Bucket(rng.gen_range(1..=3))
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value per variant
///
/// Serializes as `{ "base": .., "with_artist": .., "without_artist": .. }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerVariant<T> {
    pub base: T,
    pub with_artist: T,
    pub without_artist: T,
}

impl<T> PerVariant<T> {
    /// Build by calling `f` once per variant, in `Variant::ALL` order
    pub fn from_fn(mut f: impl FnMut(Variant) -> T) -> Self {
        Self {
            base: f(Variant::Base),
            with_artist: f(Variant::WithArtist),
            without_artist: f(Variant::WithoutArtist),
        }
    }

    pub fn get(&self, variant: Variant) -> &T {
        match variant {
            Variant::Base => &self.base,
            Variant::WithArtist => &self.with_artist,
            Variant::WithoutArtist => &self.without_artist,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Variant, T) -> U) -> PerVariant<U> {
        PerVariant {
            base: f(Variant::Base, self.base),
            with_artist: f(Variant::WithArtist, self.with_artist),
            without_artist: f(Variant::WithoutArtist, self.without_artist),
        }
    }
}

/// Image paths and scores for one prompt, all drawn from the same bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSet {
    #[serde(rename = "subfolder")]
    pub bucket: Bucket,
    #[serde(rename = "imagePaths")]
    pub image_paths: PerVariant<PathBuf>,
    pub scores: PerVariant<f64>,
}

impl SampleSet {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The resolved, user-facing result for one variant
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub url: PathBuf,
    pub aesthetic_score: f64,
    pub prompt: String,
}

/// Everything one Generate action produces
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub samples: SampleSet,
    pub images: PerVariant<GeneratedImage>,
}

impl Comparison {
    pub fn new(samples: SampleSet, prompts: PerVariant<String>) -> Self {
        let images = prompts.map(|variant, prompt| GeneratedImage {
            url: samples.image_paths.get(variant).clone(),
            aesthetic_score: *samples.scores.get(variant),
            prompt,
        });
        Self { samples, images }
    }
}

/// Map a score onto [0, 1] for the chart (scores are on a 0-10 scale)
pub fn normalized_score(score: f64) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    (score.clamp(0.0, 10.0) / 10.0) as f32
}

/// Pre-rendered sample lookup
///
/// This module handles:
/// - Resolving a prompt to image paths and scores (resolver.rs)
/// - Reading the per-bucket score sheets (scores.rs)
/// - Scanning the sample folder (inventory.rs)
/// - Decoding previews for display (preview.rs)

pub mod inventory;
pub mod preview;
pub mod resolver;
pub mod scores;

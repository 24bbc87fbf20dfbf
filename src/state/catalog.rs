/// Fixed selection lists shown in the pick lists

use super::data::PerVariant;
use std::fmt;

/// A curated base prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptEntry {
    pub id: &'static str,
    pub label: &'static str,
}

impl fmt::Display for PromptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// An image-generation model the user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl fmt::Display for ModelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

pub const PROMPTS: [PromptEntry; 10] = [
    PromptEntry { id: "0", label: "Cyberpunk Mercenary Portrait" },
    PromptEntry { id: "1", label: "Photorealistic Group Scene" },
    PromptEntry { id: "2", label: "Art Nouveau Waves" },
    PromptEntry { id: "3", label: "Mystical Portrait Scene" },
    PromptEntry { id: "4", label: "Lucid Dream" },
    PromptEntry { id: "5", label: "Forest River Scene" },
    PromptEntry { id: "6", label: "Anime Character" },
    PromptEntry { id: "7", label: "Spirit Photography" },
    PromptEntry { id: "8", label: "Gangster Cats" },
    PromptEntry { id: "9", label: "Fantasy School Scene" },
];

pub const MODELS: [ModelOption; 3] = [
    ModelOption { id: "dalle", label: "DALL-E" },
    ModelOption { id: "midjourney", label: "Midjourney" },
    ModelOption { id: "sd", label: "Stable Diffusion" },
];

pub const ARTISTS: [&str; 6] = [
    "Vincent van Gogh",
    "Claude Monet",
    "Pablo Picasso",
    "Leonardo da Vinci",
    "Frida Kahlo",
    "Greg Rutkowski",
];

/// Look up a prompt label by id
pub fn prompt_label(id: &str) -> Option<&'static str> {
    PROMPTS.iter().find(|p| p.id == id).map(|p| p.label)
}

/// Derive the three prompt strings for a base label and artist
pub fn compose_prompts(label: &str, artist: &str) -> PerVariant<String> {
    PerVariant {
        base: label.to_string(),
        with_artist: format!("{} in the style of {}", label, artist),
        without_artist: format!("{} without the style of {}", label, artist),
    }
}

use iced::widget::image::Handle;
use iced::widget::{button, canvas, column, container, pick_list, row, text, Column};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use std::future::Future;
use rfd::FileDialog;

mod error;
mod samples;
mod state;
mod ui;

use samples::inventory::{self, Inventory};
use samples::preview::load_preview;
use samples::resolver::SampleResolver;
use state::catalog::{self, ModelOption, PromptEntry, ARTISTS, MODELS, PROMPTS};
use state::config::Config;
use state::data::{Comparison, PerVariant, SampleSet, Variant};
use state::gate::{CapabilityTable, Selection, Strategy, ValidatedRequest};

const ACCENT: Color = Color { r: 0.0, g: 0.898, b: 0.898, a: 1.0 };
const HEADING: Color = Color { r: 1.0, g: 0.6, b: 0.4, a: 1.0 };

/// Output of one background generation
#[derive(Debug, Clone)]
struct Generated {
    comparison: Comparison,
    previews: PerVariant<Option<Handle>>,
}

/// Main application state
struct ArtPromptLab {
    config: Config,
    resolver: SampleResolver,
    capabilities: CapabilityTable,
    model: Option<ModelOption>,
    prompt: Option<PromptEntry>,
    artist: Option<&'static str>,
    /// True while a generation is in flight; disables the Generate button
    is_generating: bool,
    /// Current comparison, replaced wholesale by each completed generation
    comparison: Option<Comparison>,
    previews: PerVariant<Option<Handle>>,
    selected_variant: Variant,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    ModelSelected(ModelOption),
    PromptSelected(PromptEntry),
    ArtistSelected(&'static str),
    /// User clicked Generate
    Generate,
    /// Background resolution finished
    GenerationComplete(Box<Generated>),
    VariantSelected(Variant),
    /// User clicked "Choose Sample Folder"
    ChooseSampleFolder,
    InventoryComplete(Inventory),
    /// Copy the current sample set as JSON
    CopyJson,
}

impl ArtPromptLab {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        Self::with_config(Config::load())
    }

    fn with_config(config: Config) -> (Self, Task<Message>) {
        let resolver = SampleResolver::new(config.sample_root.clone());
        tracing::info!("🎨 ArtPromptLab using samples from {}", resolver.root().display());

        let app = ArtPromptLab {
            config,
            resolver: resolver.clone(),
            capabilities: CapabilityTable::default(),
            model: None,
            prompt: None,
            artist: None,
            is_generating: false,
            comparison: None,
            previews: PerVariant::default(),
            selected_variant: Variant::Base,
            status: "Scanning sample folder...".to_string(),
        };

        (
            app,
            Task::perform(inventory::scan_async(resolver), Message::InventoryComplete),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModelSelected(model) => {
                self.model = Some(model);
                Task::none()
            }
            Message::PromptSelected(prompt) => {
                self.prompt = Some(prompt);
                Task::none()
            }
            Message::ArtistSelected(artist) => {
                self.artist = Some(artist);
                Task::none()
            }
            Message::Generate => {
                if self.is_generating {
                    return Task::none();
                }

                let selection = Selection {
                    model: self.model.map(|m| m.id),
                    prompt_id: self.prompt.map(|p| p.id),
                    artist: self.artist,
                };

                let request = match self.capabilities.check(&selection) {
                    Ok(request) => request,
                    Err(e) => {
                        tracing::error!("Generation failed: {}", e);
                        self.status = e.to_string();
                        return Task::none();
                    }
                };

                match request.strategy {
                    Strategy::PreRenderedSamples => {
                        let samples = self
                            .resolver
                            .resolve(&request.prompt_id, &mut rand::thread_rng());
                        self.is_generating = true;
                        self.status = "Generating...".to_string();

                        Task::perform(
                            generate_async(samples, request),
                            |generated| Message::GenerationComplete(Box::new(generated)),
                        )
                    }
                }
            }
            Message::GenerationComplete(generated) => {
                let Generated {
                    comparison,
                    previews,
                } = *generated;

                self.status = format!(
                    "✅ Showing sample set {} for \"{}\"",
                    comparison.samples.bucket, comparison.images.base.prompt
                );
                self.comparison = Some(comparison);
                self.previews = previews;
                self.is_generating = false;

                Task::none()
            }
            Message::VariantSelected(variant) => {
                self.selected_variant = variant;
                Task::none()
            }
            Message::ChooseSampleFolder => {
                let folder = FileDialog::new()
                    .set_title("Select the Sample Image Folder")
                    .set_directory(self.resolver.root())
                    .pick_folder();

                let Some(folder) = folder else {
                    return Task::none();
                };

                self.config.sample_root = folder;
                self.resolver = SampleResolver::new(self.config.sample_root.clone());
                self.status = match self.config.save() {
                    Ok(path) => {
                        tracing::info!("💾 Saved config to {}", path.display());
                        format!("Scanning {}...", self.resolver.root().display())
                    }
                    Err(e) => {
                        tracing::warn!("Failed to save config: {}", e);
                        format!("Could not save config ({}). Scanning anyway...", e)
                    }
                };

                Task::perform(
                    inventory::scan_async(self.resolver.clone()),
                    Message::InventoryComplete,
                )
            }
            Message::InventoryComplete(inventory) => {
                // A generation status takes precedence over the scan summary
                if !self.is_generating {
                    self.status = inventory.summary();
                }
                Task::none()
            }
            Message::CopyJson => {
                let Some(comparison) = &self.comparison else {
                    return Task::none();
                };

                match comparison.samples.to_json() {
                    Ok(json) => {
                        self.status = "📋 Copied sample set JSON to clipboard".to_string();
                        iced::clipboard::write(json)
                    }
                    Err(e) => {
                        tracing::error!("Failed to serialize sample set: {}", e);
                        self.status = format!("Could not copy JSON: {}", e);
                        Task::none()
                    }
                }
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let generate_label = if self.is_generating {
            "Generating..."
        } else {
            "Generate"
        };

        let parameters: Column<Message> = column![
            text("Research Parameters").size(26).color(HEADING),
            field_label("AI Model"),
            pick_list(MODELS, self.model, Message::ModelSelected)
                .placeholder("Choose AI model")
                .width(Length::Fill),
            field_label("Base Prompt"),
            pick_list(PROMPTS, self.prompt, Message::PromptSelected)
                .placeholder("Select base prompt")
                .width(Length::Fill),
            field_label("Artist Style"),
            pick_list(ARTISTS, self.artist, Message::ArtistSelected)
                .placeholder("Select artist style")
                .width(Length::Fill),
            button(text(generate_label).size(18))
                .on_press_maybe((!self.is_generating).then_some(Message::Generate))
                .padding(12)
                .width(Length::Fill),
            button("Choose Sample Folder")
                .on_press(Message::ChooseSampleFolder)
                .style(button::secondary)
                .width(Length::Fill),
            button("Copy JSON")
                .on_press_maybe(self.comparison.as_ref().map(|_| Message::CopyJson))
                .style(button::secondary)
                .width(Length::Fill),
        ]
        .spacing(14)
        .width(Length::FillPortion(1));

        let tabs = Variant::ALL.iter().fold(row![].spacing(8), |tabs, &variant| {
            let style = if variant == self.selected_variant {
                button::primary
            } else {
                button::secondary
            };
            tabs.push(
                button(text(variant.tab_label()))
                    .on_press(Message::VariantSelected(variant))
                    .style(style),
            )
        });

        let cards = Variant::ALL.iter().fold(row![].spacing(12), |cards, &variant| {
            cards.push(ui::image_card(
                variant,
                self.comparison.as_ref().map(|c| c.images.get(variant)),
                self.previews.get(variant).as_ref(),
                variant == self.selected_variant,
            ))
        });

        let chart = canvas(ui::ScoreChart {
            scores: self
                .comparison
                .as_ref()
                .map(|c| c.samples.scores.clone())
                .unwrap_or_default(),
            selected: self.selected_variant,
        })
        .width(Length::Fixed(260.0))
        .height(Length::Fixed(360.0));

        let results = row![column![tabs, cards].spacing(16).width(Length::Fill), chart]
            .spacing(24)
            .align_y(Alignment::Center)
            .width(Length::FillPortion(2));

        let content: Column<Message> = column![
            text("ArtPromptLab").size(56).color(ACCENT),
            text("Exploring the impact of artist-inspired prompts on AI-generated images")
                .size(20)
                .color(HEADING),
            text("Compare outputs with and without artist styles using our curated prompts")
                .size(14)
                .color(ACCENT),
            row![parameters, results].spacing(40),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn field_label(label: &str) -> Element<'_, Message> {
    text(label).size(14).color(ACCENT).into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application("ArtPromptLab", ArtPromptLab::update, ArtPromptLab::view)
        .theme(ArtPromptLab::theme)
        .window_size((1360.0, 900.0))
        .centered()
        .run_with(ArtPromptLab::new)
}

/// Await a pending resolution, then compose prompts and decode previews
/// Runs on the executor so the UI stays responsive
async fn generate_async(
    samples: impl Future<Output = SampleSet>,
    request: ValidatedRequest,
) -> Generated {
    let samples = samples.await;

    let label = catalog::prompt_label(&request.prompt_id).unwrap_or_default();
    let comparison = Comparison::new(samples, catalog::compose_prompts(label, &request.artist));

    let paths = &comparison.samples.image_paths;
    let (base, with_artist, without_artist) = tokio::join!(
        load_preview(paths.base.clone()),
        load_preview(paths.with_artist.clone()),
        load_preview(paths.without_artist.clone()),
    );

    let previews = PerVariant {
        base,
        with_artist,
        without_artist,
    }
    .map(|_, preview| preview.map(|p| Handle::from_rgba(p.width, p.height, p.rgba)));

    Generated {
        comparison,
        previews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app(root: PathBuf) -> ArtPromptLab {
        let (app, _) = ArtPromptLab::with_config(Config { sample_root: root });
        app
    }

    fn select(app: &mut ArtPromptLab, model: &str, prompt: &str, artist: &'static str) {
        let model = MODELS.iter().find(|m| m.id == model).copied().unwrap();
        let prompt = PROMPTS.iter().find(|p| p.id == prompt).copied().unwrap();
        let _ = app.update(Message::ModelSelected(model));
        let _ = app.update(Message::PromptSelected(prompt));
        let _ = app.update(Message::ArtistSelected(artist));
    }

    #[test]
    fn test_generate_without_selection_reports_error() {
        let mut app = app(PathBuf::from("samples"));
        let _ = app.update(Message::Generate);

        assert!(!app.is_generating);
        assert!(app.status.starts_with("Please select all options"));
    }

    #[test]
    fn test_generate_unsupported_combination() {
        let mut app = app(PathBuf::from("samples"));
        select(&mut app, "dalle", "2", "Greg Rutkowski");
        let _ = app.update(Message::Generate);

        assert!(!app.is_generating);
        assert!(app.status.starts_with("This combination is not yet available"));
    }

    #[test]
    fn test_generate_supported_combination_goes_busy() {
        let mut app = app(PathBuf::from("samples"));
        select(&mut app, "sd", "2", "Greg Rutkowski");
        let _ = app.update(Message::Generate);

        assert!(app.is_generating);
        assert_eq!(app.status, "Generating...");
    }

    #[tokio::test]
    async fn test_generation_result_replaces_display() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());
        let request = ValidatedRequest {
            model: "sd".to_string(),
            prompt_id: "4".to_string(),
            artist: "Greg Rutkowski".to_string(),
            strategy: Strategy::PreRenderedSamples,
        };

        let samples = app
            .resolver
            .resolve_in(&request.prompt_id, state::data::Bucket::new(1).unwrap());
        let generated = generate_async(samples, request).await;
        assert!(generated.previews.base.is_none());

        app.is_generating = true;
        let _ = app.update(Message::GenerationComplete(Box::new(generated)));

        let comparison = app.comparison.as_ref().unwrap();
        assert!(!app.is_generating);
        assert_eq!(comparison.images.base.prompt, "Lucid Dream");
        assert_eq!(
            comparison.images.with_artist.prompt,
            "Lucid Dream in the style of Greg Rutkowski"
        );
        assert_eq!(comparison.images.without_artist.aesthetic_score, 0.0);
        assert!(app.status.contains("sample set 1"));
    }

    #[tokio::test]
    async fn test_view_builds_every_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());
        let _ = app.view();

        select(&mut app, "sd", "8", "Greg Rutkowski");
        let request = app
            .capabilities
            .check(&Selection {
                model: Some("sd"),
                prompt_id: Some("8"),
                artist: Some("Greg Rutkowski"),
            })
            .unwrap();
        let samples = app.resolver.resolve(&request.prompt_id, &mut rand::thread_rng());
        let generated = generate_async(samples, request).await;
        let _ = app.update(Message::GenerationComplete(Box::new(generated)));

        for variant in Variant::ALL {
            let _ = app.update(Message::VariantSelected(variant));
            assert_eq!(app.selected_variant, variant);
            let _ = app.view();
        }
        assert_eq!(
            app.comparison.as_ref().unwrap().images.without_artist.prompt,
            "Gangster Cats without the style of Greg Rutkowski"
        );
    }
}

use iced::widget::{column, container, horizontal_space, image, row, text};
use iced::{Border, Color, ContentFit, Element, Length};

use crate::state::data::{GeneratedImage, Variant};
use crate::ui::score_chart::variant_color;
use crate::Message;

const IMAGE_HEIGHT: f32 = 300.0;
const DIMMED: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.5 };

/// Card for one variant: title, score, image and the prompt that produced it
/// The selected variant gets its accent color; the others are dimmed
pub fn image_card<'a>(
    variant: Variant,
    generated: Option<&'a GeneratedImage>,
    preview: Option<&'a image::Handle>,
    selected: bool,
) -> Element<'a, Message> {
    let accent = variant_color(variant);
    let title_color = if selected { accent } else { DIMMED };

    let mut header = row![text(variant.title()).size(22).color(title_color), horizontal_space()];
    if let Some(generated) = generated {
        header = header.push(text(format!("✨ {:.2}", generated.aesthetic_score)).size(18));
    }

    let picture: Element<'a, Message> = match (preview, generated) {
        (Some(handle), _) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        (None, Some(generated)) => placeholder(format!(
            "Image unavailable\n{}",
            generated.url.display()
        )),
        (None, None) => placeholder("🎨".to_string()),
    };

    let prompt = generated
        .map(|g| g.prompt.as_str())
        .unwrap_or("No prompt generated yet");

    let content = column![
        header,
        picture,
        text("Prompt Used:").size(16).color(Color::from_rgb8(0xFF, 0x99, 0x66)),
        text(prompt).size(14),
    ]
    .spacing(12)
    .padding(20);

    container(content)
        .width(Length::Fill)
        .style(move |theme| {
            let mut style = container::rounded_box(theme);
            if selected {
                style.border = Border {
                    color: accent,
                    width: 1.0,
                    radius: 12.0.into(),
                };
            }
            style
        })
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(18))
        .width(Length::Fill)
        .height(Length::Fixed(IMAGE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(IMAGE_HEIGHT))
        .into()
}

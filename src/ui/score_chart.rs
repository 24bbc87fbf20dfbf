/// Aesthetic score chart
/// One bar per variant, scaled on the 0-10 score range
use iced::widget::canvas::{self, Text};
use iced::{alignment, Color, Point, Rectangle, Size};

use crate::state::data::{normalized_score, PerVariant, Variant};
use crate::Message;

/// Bar colors per variant
const BASE_COLOR: Color = Color { r: 0.0, g: 0.898, b: 0.898, a: 1.0 }; // #00E5E5
const WITH_ARTIST_COLOR: Color = Color { r: 1.0, g: 0.6, b: 0.4, a: 1.0 }; // #FF9966
const WITHOUT_ARTIST_COLOR: Color = Color { r: 0.251, g: 0.976, b: 0.608, a: 1.0 }; // #40F99B

/// Space reserved under the bars for labels
const LABEL_HEIGHT: f32 = 24.0;

pub fn variant_color(variant: Variant) -> Color {
    match variant {
        Variant::Base => BASE_COLOR,
        Variant::WithArtist => WITH_ARTIST_COLOR,
        Variant::WithoutArtist => WITHOUT_ARTIST_COLOR,
    }
}

#[derive(Debug, Clone)]
pub struct ScoreChart {
    pub scores: PerVariant<f64>,
    pub selected: Variant,
}

impl ScoreChart {
    /// Bar heights in pixels for a drawing area of `height`
    pub fn bar_heights(&self, height: f32) -> PerVariant<f32> {
        self.scores
            .clone()
            .map(|_, score| normalized_score(score) * height)
    }
}

impl canvas::Program<Message> for ScoreChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let plot_height = (bounds.height - LABEL_HEIGHT * 2.0).max(0.0);
        let slot_width = bounds.width / Variant::ALL.len() as f32;
        let bar_width = slot_width * 0.6;
        let heights = self.bar_heights(plot_height);

        for (i, variant) in Variant::ALL.into_iter().enumerate() {
            let selected = variant == self.selected;
            let bar_height = *heights.get(variant);
            let x = i as f32 * slot_width + (slot_width - bar_width) / 2.0;
            let baseline = LABEL_HEIGHT + plot_height;

            let color = variant_color(variant);
            let color = if selected {
                color
            } else {
                Color { a: 0.4, ..color }
            };

            frame.fill_rectangle(
                Point::new(x, baseline - bar_height),
                Size::new(bar_width, bar_height),
                color,
            );

            frame.fill_text(Text {
                content: variant.tab_label().to_string(),
                position: Point::new(x + bar_width / 2.0, baseline + 4.0),
                color: Color::WHITE,
                size: 12.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                ..Text::default()
            });

            // Score value above the selected bar only
            if selected {
                frame.fill_text(Text {
                    content: format!("{:.1}", self.scores.get(variant)),
                    position: Point::new(x + bar_width / 2.0, baseline - bar_height - 20.0),
                    color,
                    size: 16.0.into(),
                    horizontal_alignment: alignment::Horizontal::Center,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

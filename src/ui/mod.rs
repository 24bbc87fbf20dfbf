/// Widgets for the comparison view
pub mod image_card;
pub mod score_chart;

pub use image_card::image_card;
pub use score_chart::ScoreChart;

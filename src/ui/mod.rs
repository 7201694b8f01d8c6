// src/ui/mod.rs
use eframe::egui;

pub mod demo;
pub mod footer;
pub mod hero;
pub mod overview;

pub use demo::show_demo_section;
pub use footer::show_footer;
pub use hero::show_hero;
pub use overview::show_overview;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
pub const CONTENT_WIDTH: f32 = 760.0;

/// Headless frame helpers shared by the view tests.
#[cfg(test)]
pub mod testing {
    use eframe::egui;

    pub fn input(size: egui::Vec2, events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, size)),
            events,
            ..Default::default()
        }
    }

    /// Press and release the primary button at `pos` within one frame.
    pub fn click_at(pos: egui::Pos2) -> Vec<egui::Event> {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        vec![egui::Event::PointerMoved(pos), button(true), button(false)]
    }

    /// Every piece of text painted in the frame, with its screen rect.
    pub fn drawn_texts(output: &egui::FullOutput) -> Vec<(String, egui::Rect)> {
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut texts);
        }
        texts
    }

    fn collect_texts(shape: &egui::Shape, texts: &mut Vec<(String, egui::Rect)>) {
        match shape {
            egui::Shape::Text(text) => {
                let rect = egui::Rect::from_min_size(text.pos, text.galley.size());
                texts.push((text.galley.text().to_string(), rect));
            }
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_texts(shape, texts);
                }
            }
            _ => {}
        }
    }

    pub fn find_text<'a>(texts: &'a [(String, egui::Rect)], needle: &str) -> Option<&'a (String, egui::Rect)> {
        texts.iter().find(|(text, _)| text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisResult;
    use super::demo::ResultView;
    use super::overview::{BULLET, TECH_COLUMNS};

    #[test]
    fn test_bundled_fonts_cover_every_icon() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |_| {});

        let mut icons: Vec<&str> = TECH_COLUMNS.iter().map(|column| column.icon).collect();
        for confidence in [0.6, 0.9] {
            icons.push(ResultView::from(&AnalysisResult::from_confidence(confidence)).icon);
        }
        icons.push(BULLET);

        let font_id = egui::FontId::proportional(20.0);
        ctx.fonts(|fonts| {
            for icon in &icons {
                for c in icon.chars() {
                    assert!(fonts.has_glyph(&font_id, c), "missing glyph {} U+{:04X}", c, c as u32);
                }
            }
        });
    }
}

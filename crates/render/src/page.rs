use crate::fonts::{self, Font};
use crate::geometry::Rect;
use hugo_types::Color;
use lopdf::Object;
use lopdf::content::{Content, Operation};

/// Builds the content stream operations for the single page.
///
/// Tracks the current font and fill color so repeated draws do not emit
/// redundant state changes.
pub(crate) struct PageContent {
    content: Content,
    font: Option<(Font, f32)>,
    fill_color: Option<Color>,
}

impl PageContent {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            font: None,
            fill_color: None,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill_color != Some(color) {
            self.op(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            );
            self.fill_color = Some(color);
        }
    }

    fn set_font(&mut self, font: Font, size: f32) {
        if self.font != Some((font, size)) {
            self.op("Tf", vec![font.resource_name().into(), size.into()]);
            self.font = Some((font, size));
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill_color(color);
        self.op(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
        self.op("f", vec![]);
    }

    /// Draws a single line of text with its baseline at `(x, baseline_y)`.
    pub fn draw_text(
        &mut self,
        x: f32,
        baseline_y: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(font, size);
        self.set_fill_color(color);
        self.op("Td", vec![x.into(), baseline_y.into()]);
        self.op(
            "Tj",
            vec![Object::string_literal(fonts::encode_win_ansi(text))],
        );
        self.op("ET", vec![]);
    }

    /// Places an image XObject scaled into `rect`.
    pub fn draw_image(&mut self, resource_name: &str, rect: Rect) {
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.op("Do", vec![resource_name.into()]);
        self.op("Q", vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(page: &PageContent) -> Vec<String> {
        page.content
            .operations
            .iter()
            .map(|op| op.operator.clone())
            .collect()
    }

    #[test]
    fn text_draw_wraps_in_text_section() {
        let mut page = PageContent::new();
        page.draw_text(10.0, 20.0, "hello", Font::Helvetica, 12.0, Color::default());
        assert_eq!(operators(&page), vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut page = PageContent::new();
        page.draw_text(10.0, 20.0, "", Font::Helvetica, 12.0, Color::default());
        assert!(page.content.operations.is_empty());
    }

    #[test]
    fn repeated_font_and_color_are_not_reemitted() {
        let mut page = PageContent::new();
        page.draw_text(0.0, 0.0, "a", Font::Helvetica, 12.0, Color::default());
        page.draw_text(0.0, 20.0, "b", Font::Helvetica, 12.0, Color::default());
        let ops = operators(&page);
        assert_eq!(ops.iter().filter(|o| *o == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "rg").count(), 1);
    }
}

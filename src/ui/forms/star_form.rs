//! The STAR story form
//!
//! The form is taller than most terminals, so it is laid out as a list of
//! rows and scrolled just enough to keep the focused row on screen.

use super::field_renderer::{draw_text_field, draw_tone_selector, field_height};
use crate::app::App;
use crate::state::{FieldId, FormFocus, Section};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SUBMIT_LABEL: &str = "Save to Database";

/// One vertical slot of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRow {
    SectionTitle(Section),
    Blurb(&'static str),
    Field(FieldId),
    Submit,
}

impl FormRow {
    fn height(&self) -> u16 {
        match self {
            Self::SectionTitle(_) => 2,
            Self::Blurb(_) => 1,
            Self::Field(field) => field_height(*field),
            Self::Submit => BUTTON_HEIGHT + 1,
        }
    }
}

fn form_rows() -> Vec<FormRow> {
    let mut rows = Vec::new();
    for section in Section::ALL {
        rows.push(FormRow::SectionTitle(section));
        if let Some(blurb) = section.blurb() {
            rows.push(FormRow::Blurb(blurb));
        }
        rows.extend(section.fields().map(FormRow::Field));
    }
    rows.push(FormRow::Submit);
    rows
}

fn focused_row(rows: &[FormRow], focus: FormFocus) -> usize {
    let target = match focus {
        FormFocus::Field(field) => FormRow::Field(field),
        FormFocus::SubmitButton => FormRow::Submit,
    };
    rows.iter().position(|r| *r == target).unwrap_or(0)
}

/// First row to draw so that `focused` is fully visible in `available` rows.
///
/// Scrolls as little as possible: the form starts at the top whenever the
/// focused row fits from there.
fn first_visible_row(heights: &[u16], focused: usize, available: u16) -> usize {
    let mut start = 0;
    let focused = focused.min(heights.len().saturating_sub(1));
    while start < focused {
        let needed: u16 = heights[start..=focused].iter().sum();
        if needed <= available {
            break;
        }
        start += 1;
    }
    start
}

/// Draw the form into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let rows = form_rows();
    let heights: Vec<u16> = rows.iter().map(FormRow::height).collect();
    let start = first_visible_row(&heights, focused_row(&rows, form.focus()), area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (row, height) in rows.iter().zip(&heights).skip(start) {
        if y + height > bottom {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: *height,
        };
        draw_row(frame, row_area, *row, app);
        y += height;
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: FormRow, app: &App) {
    let form = &app.state.form;
    match row {
        FormRow::SectionTitle(section) => {
            let title = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    section.title(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )),
            ]);
            frame.render_widget(title, area);
        }
        FormRow::Blurb(text) => {
            let blurb = Paragraph::new(text).style(Style::default().fg(Color::Gray));
            frame.render_widget(blurb, area);
        }
        FormRow::Field(field) if field.is_tone() => {
            draw_tone_selector(
                frame,
                area,
                form.record().tone,
                form.active_field() == Some(field),
            );
        }
        FormRow::Field(field) => {
            draw_text_field(
                frame,
                area,
                field,
                form.record().value(field),
                form.active_field() == Some(field),
            );
        }
        FormRow::Submit => {
            let width = button_width(SUBMIT_LABEL).min(area.width);
            let button_area = Rect {
                x: area.x + area.width.saturating_sub(width),
                y: area.y + 1,
                width,
                height: BUTTON_HEIGHT,
            };
            render_button(frame, button_area, SUBMIT_LABEL, form.is_submit_focused());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_sections() {
        let rows = form_rows();
        assert_eq!(rows[0], FormRow::SectionTitle(Section::StarStory));
        assert!(matches!(rows[1], FormRow::Blurb(_)));
        assert_eq!(rows[2], FormRow::Field(FieldId::Situation));
        assert_eq!(rows.last(), Some(&FormRow::Submit));
        let field_rows = rows.iter().filter(|r| matches!(r, FormRow::Field(_))).count();
        assert_eq!(field_rows, FieldId::ALL.len());
    }

    #[test]
    fn test_focused_row_locates_fields_and_button() {
        let rows = form_rows();
        assert_eq!(
            rows[focused_row(&rows, FormFocus::Field(FieldId::Tone))],
            FormRow::Field(FieldId::Tone)
        );
        assert_eq!(focused_row(&rows, FormFocus::SubmitButton), rows.len() - 1);
    }

    #[test]
    fn test_no_scroll_when_focused_row_fits() {
        let heights = [2, 1, 5, 5, 5];
        assert_eq!(first_visible_row(&heights, 2, 20), 0);
        assert_eq!(first_visible_row(&heights, 4, 18), 0);
    }

    #[test]
    fn test_scrolls_minimally_to_show_focused_row() {
        let heights = [2, 1, 5, 5, 5];
        // Rows 0..=4 need 18; with 12 rows available rows 2..=4 (15) still
        // overflow, rows 3..=4 (10) fit.
        assert_eq!(first_visible_row(&heights, 4, 12), 3);
    }

    #[test]
    fn test_tiny_area_shows_focused_row_first() {
        let heights = [2, 1, 5, 5];
        assert_eq!(first_visible_row(&heights, 3, 1), 3);
    }

    #[test]
    fn test_empty_heights() {
        assert_eq!(first_visible_row(&[], 0, 10), 0);
    }
}

//! Field rendering utilities for forms

use crate::state::{FieldId, Tone};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Visible text rows of a text area
pub const TEXT_AREA_ROWS: u16 = 3;

/// Total height of a field box, borders included
pub fn field_height(field: FieldId) -> u16 {
    if field.is_multiline() {
        TEXT_AREA_ROWS + 2
    } else {
        3
    }
}

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Split `value` into display rows at most `width` characters wide
fn wrap_rows(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in value.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Rows shown in a box of `width` x `height`, scrolled to the end of the
/// text. With `cursor` set, a full last row gets a fresh row for the cursor.
fn visible_rows(
    value: &str,
    width: usize,
    height: usize,
    multiline: bool,
    cursor: bool,
) -> Vec<String> {
    if !multiline {
        let flat: Vec<char> = value
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let room = if cursor { width.saturating_sub(1) } else { width };
        let skip = flat.len().saturating_sub(room);
        return vec![flat[skip..].iter().collect()];
    }

    let mut rows = wrap_rows(value, width);
    if cursor && rows.last().is_some_and(|r| r.chars().count() >= width) {
        rows.push(String::new());
    }
    let skip = rows.len().saturating_sub(height.max(1));
    rows.split_off(skip)
}

/// Draw a free-text field.
///
/// Empty fields show their placeholder. Longer text is scrolled so its end,
/// where the cursor sits, stays in view.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &str,
    is_active: bool,
) {
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let height = area.height.saturating_sub(2).max(1) as usize;
        visible_rows(value, width, height, field.is_multiline(), is_active)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, text_style)))
            .collect()
    };

    if is_active {
        if value.is_empty() {
            lines[0].spans.insert(0, cursor);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let paragraph = Paragraph::new(lines).block(field_block(field.label(), is_active));
    let paragraph = if value.is_empty() {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };
    frame.render_widget(paragraph, area);
}

/// Draw the tone selector as a row of options with the current one highlighted
pub fn draw_tone_selector(frame: &mut Frame, area: Rect, current: Tone, is_active: bool) {
    let mut spans = Vec::with_capacity(Tone::ALL.len() * 2 + 2);
    if is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    for (i, tone) in Tone::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *tone == current {
            Style::default()
                .fg(Color::Black)
                .bg(if is_active { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", tone.label()), style));
    }
    if is_active {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(field_block(FieldId::Tone.label(), is_active));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_rows_breaks_long_lines() {
        assert_eq!(wrap_rows("abcdefg\n\nxy", 3), vec!["abc", "def", "g", "", "xy"]);
    }

    #[test]
    fn test_long_paragraph_keeps_last_visual_rows() {
        let value = "a".repeat(25);
        let rows = visible_rows(&value, 10, 3, true, false);
        assert_eq!(rows, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_full_last_row_makes_room_for_cursor() {
        let value = "a".repeat(20);
        let rows = visible_rows(&value, 10, 3, true, true);
        assert_eq!(rows, vec!["a".repeat(10), "a".repeat(10), String::new()]);
    }

    #[test]
    fn test_single_line_scrolls_to_tail() {
        let rows = visible_rows("Rust, SQL, Go, Kubernetes", 10, 1, false, true);
        assert_eq!(rows, vec!["ubernetes"]);

        let rows = visible_rows("Rust", 10, 1, false, true);
        assert_eq!(rows, vec!["Rust"]);
    }

    #[test]
    fn test_cursor_visible_after_long_paragraph() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let value = format!("{}END", "x".repeat(100));
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_text_field(frame, area, FieldId::Situation, &value, true);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (1..19).map(|x| buffer[(x, 3)].symbol()).collect();
        assert!(row.contains("END▌"), "last row was {row:?}");
    }

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(FieldId::Situation), 5);
        assert_eq!(field_height(FieldId::Skills), 3);
        assert_eq!(field_height(FieldId::Tone), 3);
    }
}

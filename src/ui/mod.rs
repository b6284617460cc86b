//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_star_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::firestore::{Endpoint, PersistenceGateway};
    use crate::state::{FieldId, FormFocus, Notice};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app(host: Option<&str>) -> App {
        let endpoint = Endpoint::resolve(host, &AppConfig::default());
        App::new(PersistenceGateway::new(endpoint), None)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draws_header_first_section_and_endpoint() {
        let app = test_app(Some("localhost"));
        let screen = render(&app, 100, 30);
        assert!(screen.contains("AI Career Assistant"));
        assert!(screen.contains("STAR Story Database"));
        assert!(screen.contains("Situation"));
        assert!(screen.contains("local emulator 127.0.0.1:8080"));
    }

    #[test]
    fn test_scrolls_to_submit_button() {
        let mut app = test_app(None);
        app.state.form.set_focus(FormFocus::SubmitButton);
        let screen = render(&app, 100, 24);
        assert!(screen.contains("Save to Database"));
        assert!(screen.contains("Formal"));
        assert!(!screen.contains("STAR Story Database"));
    }

    #[test]
    fn test_shows_typed_text() {
        let mut app = test_app(None);
        app.state
            .form
            .set_text(FieldId::Situation, "Led a cross-team migration");
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Led a cross-team migration"));
    }

    #[test]
    fn test_shows_notice_overlay() {
        let mut app = test_app(None);
        app.state.push_notice(Notice::error("Error saving to database."));
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Error saving to database."));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = test_app(None);
        app.state.push_notice(Notice::success("Saved"));
        render(&app, 10, 5);
        render(&app, 1, 1);
    }
}

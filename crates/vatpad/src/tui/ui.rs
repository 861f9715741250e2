//! TUI rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUi::new(app);
    frame.render_widget(ui, area);
}

/// Returns the screen region the keypad occupies for a given frame area,
/// so mouse clicks can be hit-tested against the rendered button grid
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    CalculatorUi::create_horizontal_layout(area)
        .get(1)
        .copied()
        .unwrap_or_default()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the main horizontal layout (display column + keypad + help)
    fn create_horizontal_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // Display column
                Constraint::Length(34), // Keypad
                Constraint::Length(24), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    /// Creates the display column chunks
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(3), // Memory
                Constraint::Min(3),    // Status
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the display buffer, right-aligned like a desk calculator
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();

        let paragraph = Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        paragraph.render(area, buf);
    }

    /// Renders the memory slot contents
    fn render_memory(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.controller().memory().unwrap_or("(empty)");

        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::Cyan)))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Memory ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );

        paragraph.render(area, buf);
    }

    /// Renders the status area with the latest signals
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let signals = self.app.status();

        let items: Vec<ListItem> = if signals.is_empty() {
            vec![ListItem::new(Span::styled(
                "Ready",
                Style::default().fg(Color::Gray),
            ))]
        } else {
            signals
                .iter()
                .map(|signal| {
                    ListItem::new(Span::styled(
                        signal.to_string(),
                        Style::default().fg(Color::Red),
                    ))
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );

        list.render(area, buf);
    }

    /// Renders the keypad area
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        let widget = KeypadWidget::new(self.app.keypad());
        widget.render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(shortcuts).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = Self::create_horizontal_layout(area);

        if h_chunks.len() >= 3 {
            let chunks = Self::create_layout(h_chunks[0]);

            if chunks.len() >= 3 {
                self.render_display(chunks[0], buf);
                self.render_memory(chunks[1], buf);
                self.render_status(chunks[2], buf);
            }

            self.render_keypad(h_chunks[1], buf);
            Self::render_help_sidebar(h_chunks[2], buf);
        }
    }
}

/// Title shown on the outer border
pub const APP_TITLE: &str = " VAT Pad ";

/// Keyboard shortcuts for the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Equals"),
    ("Bksp", "Clear last"),
    ("Esc", "Clear all"),
    ("m / r", "Mem store/recall"),
    ("x / s", "Square / root"),
    ("v / V", "VAT add/remove"),
    ("Ctrl+C", "Quit"),
];

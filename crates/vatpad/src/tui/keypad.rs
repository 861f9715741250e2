//! Interactive keypad for the TUI calculator.
//!
//! The keypad mirrors the physical button panel: digits, operators, the
//! memory pair, the VAT pair, and the unary operations. Buttons can be
//! clicked with the mouse or highlighted when the matching key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::controller::CalcEvent;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The label shown on the button
    pub label: String,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

/// Actions that keypad buttons perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert an operator, bracket, or decimal point
    Operator(char),
    /// Evaluate the expression
    Equals,
    /// Remove the last character
    ClearLast,
    /// Reset the display
    ClearAll,
    /// Store the display in memory
    MemoryStore,
    /// Recall memory into the display
    MemoryRecall,
    /// Square the display
    Square,
    /// Square root of the display
    SquareRoot,
    /// Add VAT
    VatAdd,
    /// Remove VAT
    VatSubtract,
}

impl ButtonAction {
    /// Maps the action to its controller event
    #[must_use]
    pub fn to_event(self) -> CalcEvent {
        match self {
            Self::Digit(d) => CalcEvent::Digit(d),
            Self::Operator(op) => CalcEvent::Operator(op),
            Self::Equals => CalcEvent::Equals,
            Self::ClearLast => CalcEvent::ClearLast,
            Self::ClearAll => CalcEvent::ClearAll,
            Self::MemoryStore => CalcEvent::MemoryStore,
            Self::MemoryRecall => CalcEvent::MemoryRecall,
            Self::Square => CalcEvent::Square,
            Self::SquareRoot => CalcEvent::SquareRoot,
            Self::VatAdd => CalcEvent::VatAdd,
            Self::VatSubtract => CalcEvent::VatSubtract,
        }
    }
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: d.to_string(),
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates an operator/bracket/decimal button
    #[must_use]
    pub fn operator(op: char) -> Self {
        Self {
            label: op.to_string(),
            pressed: false,
            action: ButtonAction::Operator(op),
        }
    }

    /// Creates a labelled action button
    #[must_use]
    pub fn action(label: &str, action: ButtonAction) -> Self {
        Self {
            label: label.to_string(),
            pressed: false,
            action,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns the character this button inserts into the display, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self.action {
            ButtonAction::Digit(d) => char::from_digit(u32::from(d), 10),
            ButtonAction::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// The keypad layout - rows of buttons, widest row first
/// ```text
/// [M+ ] [MR ] [VAT+] [VAT-] [CE ]
/// [ ( ] [ ) ] [ x² ] [ √x ] [ C ]
/// [ 7 ] [ 8 ] [ 9  ] [ +  ]
/// [ 4 ] [ 5 ] [ 6  ] [ -  ]
/// [ 1 ] [ 2 ] [ 3  ] [ *  ]
/// [ 0 ] [ . ] [ =  ] [ /  ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard VAT-calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let rows = vec![
            vec![
                KeypadButton::action("M+", ButtonAction::MemoryStore),
                KeypadButton::action("MR", ButtonAction::MemoryRecall),
                KeypadButton::action("VAT+", ButtonAction::VatAdd),
                KeypadButton::action("VAT-", ButtonAction::VatSubtract),
                KeypadButton::action("CE", ButtonAction::ClearAll),
            ],
            vec![
                KeypadButton::operator('('),
                KeypadButton::operator(')'),
                KeypadButton::action("x²", ButtonAction::Square),
                KeypadButton::action("√x", ButtonAction::SquareRoot),
                KeypadButton::action("C", ButtonAction::ClearLast),
            ],
            vec![
                KeypadButton::digit(7),
                KeypadButton::digit(8),
                KeypadButton::digit(9),
                KeypadButton::operator('+'),
            ],
            vec![
                KeypadButton::digit(4),
                KeypadButton::digit(5),
                KeypadButton::digit(6),
                KeypadButton::operator('-'),
            ],
            vec![
                KeypadButton::digit(1),
                KeypadButton::digit(2),
                KeypadButton::digit(3),
                KeypadButton::operator('*'),
            ],
            vec![
                KeypadButton::digit(0),
                KeypadButton::operator('.'),
                KeypadButton::action("=", ButtonAction::Equals),
                KeypadButton::operator('/'),
            ],
        ];

        Self { rows }
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Gets a mutable button by row and column
    pub fn get_button_at_mut(&mut self, row: usize, col: usize) -> Option<&mut KeypadButton> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Finds a button position by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<(usize, usize)> {
        self.positions().find_map(|((row, col), btn)| {
            if btn.label == label {
                Some((row, col))
            } else {
                None
            }
        })
    }

    /// Finds a button position by the character it inserts
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<(usize, usize)> {
        self.positions().find_map(|((row, col), btn)| {
            if btn.to_char() == Some(ch) {
                Some((row, col))
            } else {
                None
            }
        })
    }

    /// Finds a button position by its action
    #[must_use]
    pub fn find_button_by_action(&self, action: ButtonAction) -> Option<(usize, usize)> {
        self.positions().find_map(|((row, col), btn)| {
            if btn.action == action {
                Some((row, col))
            } else {
                None
            }
        })
    }

    /// Sets a button as pressed by position
    pub fn press_button(&mut self, row: usize, col: usize) {
        if let Some(btn) = self.get_button_at_mut(row, col) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for row in &mut self.rows {
            for btn in row {
                btn.set_pressed(false);
            }
        }
    }

    /// Highlights the button for an action, releasing every other button
    pub fn highlight_action(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some((row, col)) = self.find_button_by_action(action) {
            self.press_button(row, col);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(row, buttons)| {
            buttons
                .iter()
                .enumerate()
                .map(move |(col, btn)| ((row, col), btn))
        })
    }

    /// Converts a click position to a button position.
    ///
    /// Rows share the area height evenly; each row then divides the width
    /// by its own button count, so the wide action rows get narrower cells.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let row_height = (area.height - 2) / self.row_count() as u16;
        if row_height == 0 {
            return None;
        }

        let row = (inner_y / row_height) as usize;
        let cols = self.rows.get(row)?.len();

        let btn_width = (area.width - 2) / cols as u16;
        if btn_width == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        if col < cols {
            Some((row, col))
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.row_count() as u16;
        if inner.width < 10 || inner.height < rows {
            return; // Too small to render
        }

        let row_height = inner.height / rows;

        for ((row, col), btn) in self.keypad.positions() {
            let cols = self
                .keypad
                .rows
                .get(row)
                .map_or(1, |r| r.len().max(1)) as u16;
            let btn_width = inner.width / cols;

            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * row_height;

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) => Style::default().fg(Color::White),
                    ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::ClearLast | ButtonAction::ClearAll => {
                        Style::default().fg(Color::Red)
                    }
                    ButtonAction::VatAdd | ButtonAction::VatSubtract => {
                        Style::default().fg(Color::Magenta)
                    }
                    _ => Style::default().fg(Color::Cyan),
                }
            };

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + row_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_digit_button_creation() {
        for d in 0..=9 {
            let btn = KeypadButton::digit(d);
            assert_eq!(btn.label, d.to_string());
            assert!(!btn.pressed);
            assert_eq!(btn.action, ButtonAction::Digit(d));
        }
    }

    #[test]
    fn test_operator_button_creation() {
        for op in ['+', '-', '*', '/', '(', ')', '.'] {
            let btn = KeypadButton::operator(op);
            assert_eq!(btn.label, op.to_string());
            assert_eq!(btn.action, ButtonAction::Operator(op));
        }
    }

    #[test]
    fn test_action_button_creation() {
        let btn = KeypadButton::action("VAT+", ButtonAction::VatAdd);
        assert_eq!(btn.label, "VAT+");
        assert_eq!(btn.action, ButtonAction::VatAdd);
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::digit(5);
        assert!(!btn.pressed);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    #[test]
    fn test_button_to_char() {
        assert_eq!(KeypadButton::digit(5).to_char(), Some('5'));
        assert_eq!(KeypadButton::operator('+').to_char(), Some('+'));
        assert_eq!(KeypadButton::operator('.').to_char(), Some('.'));
        assert_eq!(
            KeypadButton::action("=", ButtonAction::Equals).to_char(),
            None
        );
        assert_eq!(
            KeypadButton::action("M+", ButtonAction::MemoryStore).to_char(),
            None
        );
    }

    // ===== ButtonAction tests =====

    #[test]
    fn test_action_to_event() {
        assert_eq!(ButtonAction::Digit(7).to_event(), CalcEvent::Digit(7));
        assert_eq!(
            ButtonAction::Operator('*').to_event(),
            CalcEvent::Operator('*')
        );
        assert_eq!(ButtonAction::Equals.to_event(), CalcEvent::Equals);
        assert_eq!(ButtonAction::VatAdd.to_event(), CalcEvent::VatAdd);
        assert_eq!(ButtonAction::VatSubtract.to_event(), CalcEvent::VatSubtract);
        assert_eq!(ButtonAction::MemoryStore.to_event(), CalcEvent::MemoryStore);
        assert_eq!(ButtonAction::SquareRoot.to_event(), CalcEvent::SquareRoot);
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 26); // 5 + 5 + 4*4
        assert_eq!(keypad.row_count(), 6);
    }

    #[test]
    fn test_keypad_default() {
        let keypad = Keypad::default();
        assert_eq!(keypad.button_count(), 26);
    }

    #[test]
    fn test_keypad_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label, "M+");
        assert_eq!(keypad.get_button_at(2, 0).unwrap().label, "7");
        assert_eq!(keypad.get_button_at(5, 2).unwrap().label, "=");
    }

    #[test]
    fn test_keypad_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(10, 0).is_none());
        assert!(keypad.get_button_at(2, 5).is_none());
    }

    #[test]
    fn test_keypad_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_by_label("VAT+"), Some((0, 2)));
        assert_eq!(keypad.find_button_by_label("7"), Some((2, 0)));
        assert_eq!(keypad.find_button_by_label("nope"), None);
    }

    #[test]
    fn test_keypad_find_by_char() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_by_char('5'), Some((3, 1)));
        assert_eq!(keypad.find_button_by_char('+'), Some((2, 3)));
        assert_eq!(keypad.find_button_by_char('('), Some((1, 0)));
    }

    #[test]
    fn test_keypad_find_by_action() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.find_button_by_action(ButtonAction::Equals),
            Some((5, 2))
        );
        assert_eq!(
            keypad.find_button_by_action(ButtonAction::VatSubtract),
            Some((0, 3))
        );
    }

    #[test]
    fn test_keypad_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press_button(0, 0);
        assert!(keypad.get_button_at(0, 0).unwrap().pressed);

        keypad.release_all();
        for btn in keypad.buttons() {
            assert!(!btn.pressed);
        }
    }

    #[test]
    fn test_keypad_highlight_action() {
        let mut keypad = Keypad::new();
        keypad.press_button(0, 0);
        keypad.highlight_action(ButtonAction::Digit(5));

        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, "5");
    }

    #[test]
    fn test_keypad_positions() {
        let keypad = Keypad::new();
        let positions: Vec<_> = keypad.positions().collect();
        assert_eq!(positions.len(), 26);
        assert_eq!(positions[0].0, (0, 0));
        assert_eq!(positions[25].0, (5, 3));
    }

    // ===== Layout verification =====

    #[test]
    fn test_keypad_action_row() {
        let keypad = Keypad::new();
        let labels: Vec<_> = (0..5)
            .map(|c| keypad.get_button_at(0, c).unwrap().label.clone())
            .collect();
        assert_eq!(labels, vec!["M+", "MR", "VAT+", "VAT-", "CE"]);
    }

    #[test]
    fn test_keypad_unary_row() {
        let keypad = Keypad::new();
        let labels: Vec<_> = (0..5)
            .map(|c| keypad.get_button_at(1, c).unwrap().label.clone())
            .collect();
        assert_eq!(labels, vec!["(", ")", "x²", "√x", "C"]);
    }

    #[test]
    fn test_keypad_digit_rows() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(2, 0).unwrap().label, "7");
        assert_eq!(keypad.get_button_at(3, 0).unwrap().label, "4");
        assert_eq!(keypad.get_button_at(4, 0).unwrap().label, "1");
        assert_eq!(keypad.get_button_at(5, 0).unwrap().label, "0");
        assert_eq!(keypad.get_button_at(2, 3).unwrap().label, "+");
        assert_eq!(keypad.get_button_at(5, 3).unwrap().label, "/");
    }

    // ===== Hit testing =====

    #[test]
    fn test_keypad_hit_test_inside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 32, 14);
        let result = keypad.hit_test(area, 10, 5);
        assert!(result.is_some());
    }

    #[test]
    fn test_keypad_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 32, 14);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_keypad_hit_test_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 32, 14);
        assert!(keypad.hit_test(area, 0, 0).is_none());
    }

    #[test]
    fn test_keypad_hit_test_maps_to_valid_button() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 32, 14);
        if let Some((row, col)) = keypad.hit_test(area, 5, 3) {
            assert!(keypad.get_button_at(row, col).is_some());
        }
    }

    // ===== Keypad invariants =====

    #[test]
    fn prop_all_digits_have_buttons() {
        let keypad = Keypad::new();
        for d in 0..=9u32 {
            let ch = char::from_digit(d, 10).unwrap();
            assert!(
                keypad.find_button_by_char(ch).is_some(),
                "Missing button for digit {d}"
            );
        }
    }

    #[test]
    fn prop_all_alphabet_operators_have_buttons() {
        let keypad = Keypad::new();
        for op in ['+', '-', '*', '/', '(', ')', '.'] {
            assert!(
                keypad.find_button_by_char(op).is_some(),
                "Missing button for operator {op}"
            );
        }
    }

    #[test]
    fn prop_every_controller_action_on_keypad() {
        let keypad = Keypad::new();
        for action in [
            ButtonAction::Equals,
            ButtonAction::ClearLast,
            ButtonAction::ClearAll,
            ButtonAction::MemoryStore,
            ButtonAction::MemoryRecall,
            ButtonAction::Square,
            ButtonAction::SquareRoot,
            ButtonAction::VatAdd,
            ButtonAction::VatSubtract,
        ] {
            assert!(
                keypad.find_button_by_action(action).is_some(),
                "Missing button for {action:?}"
            );
        }
    }

    #[test]
    fn prop_labels_unique() {
        let keypad = Keypad::new();
        let labels: Vec<_> = keypad.buttons().map(|b| b.label.clone()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let area = Rect::new(0, 0, 32, 14);
        let mut buf = Buffer::empty(area);

        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[VAT+]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let area = Rect::new(0, 0, 5, 5); // Too small
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }

    #[test]
    fn test_keypad_widget_render_pressed() {
        let mut keypad = Keypad::new();
        keypad.press_button(2, 0);
        let widget = KeypadWidget::new(&keypad);
        let area = Rect::new(0, 0, 32, 14);
        let mut buf = Buffer::empty(area);

        widget.render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("[7]"));
    }
}

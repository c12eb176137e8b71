//! Keypad pane rendering

use crate::input::Input;
use crate::ui::keypad::Keypad;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render every keypad button into its cell of `area`.
///
/// `pressed` is highlighted with the focus border.
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, keypad: &Keypad, pressed: Option<Input>) {
    let cells = keypad.cell_rects(area);

    for (row, rects) in keypad.rows().iter().zip(cells.iter()) {
        for (button, rect) in row.iter().zip(rects.iter()) {
            let input = button.input().ok();
            let is_pressed = input.is_some() && input == pressed;

            let border_style = if is_pressed {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.border_normal)
            };

            let mut label_style = Style::default()
                .fg(label_color(input))
                .add_modifier(Modifier::BOLD);
            if is_pressed {
                label_style = label_style.bg(DEFAULT_THEME.pressed_bg);
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);

            // Centre the caption vertically inside the border
            let inner_height = rect.height.saturating_sub(2);
            let mut lines = vec![String::new(); (inner_height / 2) as usize];
            lines.push(button.label());

            let paragraph = Paragraph::new(lines.join("\n"))
                .block(block)
                .style(label_style)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, *rect);
        }
    }
}

fn label_color(input: Option<Input>) -> Color {
    match input {
        Some(Input::Digit(_)) | Some(Input::Decimal) => DEFAULT_THEME.digit,
        Some(Input::Operate(_)) => DEFAULT_THEME.operator,
        Some(Input::Equals) => DEFAULT_THEME.primary,
        Some(Input::Clear) | Some(Input::Delete) => DEFAULT_THEME.error,
        Some(Input::Negate) | Some(Input::Percent) => DEFAULT_THEME.function,
        None => DEFAULT_THEME.comment,
    }
}

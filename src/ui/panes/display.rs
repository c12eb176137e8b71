//! Display pane rendering

use crate::engine::Operator;
use crate::engine::state::ERROR_TEXT;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display: pending expression on top, display text below it
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    pending: Option<(&str, Operator)>,
) {
    let block = Block::default()
        .title(" calctty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let pending_line = match pending {
        Some((previous, op)) => Line::from(Span::styled(
            format!("{} {}", previous, operator_glyph(op)),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        None => Line::from(""),
    };

    let value_color = if text == ERROR_TEXT {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.fg
    };

    // Keep the tail of very long entries visible
    let inner_width = area.width.saturating_sub(4) as usize;
    let char_count = text.chars().count();
    let shown: String = if inner_width > 0 && char_count > inner_width {
        let skip = char_count - inner_width + 1;
        std::iter::once('…').chain(text.chars().skip(skip)).collect()
    } else {
        text.to_string()
    };

    let value_line = Line::from(Span::styled(
        shown,
        Style::default().fg(value_color).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(vec![pending_line, value_line])
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

fn operator_glyph(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "−",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
    }
}

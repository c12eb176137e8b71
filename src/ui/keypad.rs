//! Keypad model: button attributes, grid layout and hit testing

use crate::input::{Input, InputError};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use rustc_hash::FxHashMap;

/// A keypad button, described the same way a click reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub action: &'static str,
    pub value: Option<&'static str>,
}

impl Button {
    const fn new(action: &'static str, value: Option<&'static str>) -> Self {
        Button { action, value }
    }

    /// Decode the button's attributes
    pub fn input(&self) -> Result<Input, InputError> {
        Input::from_action(self.action, self.value)
    }

    pub fn label(&self) -> String {
        self.input()
            .map(|input| input.label())
            .unwrap_or_else(|_| "?".to_string())
    }
}

const STANDARD_LAYOUT: [[Button; 4]; 5] = [
    [
        Button::new("clear", None),
        Button::new("delete", None),
        Button::new("negate", None),
        Button::new("percent", None),
    ],
    [
        Button::new("digit", Some("7")),
        Button::new("digit", Some("8")),
        Button::new("digit", Some("9")),
        Button::new("operate", Some("/")),
    ],
    [
        Button::new("digit", Some("4")),
        Button::new("digit", Some("5")),
        Button::new("digit", Some("6")),
        Button::new("operate", Some("*")),
    ],
    [
        Button::new("digit", Some("1")),
        Button::new("digit", Some("2")),
        Button::new("digit", Some("3")),
        Button::new("operate", Some("-")),
    ],
    [
        Button::new("digit", Some("0")),
        Button::new("decimal", None),
        Button::new("equals", None),
        Button::new("operate", Some("+")),
    ],
];

/// Grid of buttons
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
    /// Input -> (row, column), used to highlight the button for a key press
    positions: FxHashMap<Input, (usize, usize)>,
}

impl Keypad {
    /// The 5x4 layout: `C ⌫ ± %` / `7 8 9 ÷` / `4 5 6 ×` / `1 2 3 −` / `0 . = +`
    pub fn standard() -> Self {
        let rows = STANDARD_LAYOUT.iter().map(|row| row.to_vec()).collect();
        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Vec<Button>>) -> Self {
        let mut positions = FxHashMap::default();
        for (r, row) in rows.iter().enumerate() {
            for (c, button) in row.iter().enumerate() {
                if let Ok(input) = button.input() {
                    positions.entry(input).or_insert((r, c));
                }
            }
        }
        Keypad { rows, positions }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn position_of(&self, input: Input) -> Option<(usize, usize)> {
        self.positions.get(&input).copied()
    }

    /// Split `area` into one rectangle per button, row by row
    pub fn cell_rects(&self, area: Rect) -> Vec<Vec<Rect>> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Ratio(1, self.rows.len() as u32);
                self.rows.len()
            ])
            .split(area);

        self.rows
            .iter()
            .zip(row_areas.iter())
            .map(|(row, row_area)| {
                if row.is_empty() {
                    return Vec::new();
                }
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
                    .split(*row_area)
                    .to_vec()
            })
            .collect()
    }

    /// Button under the terminal cell `(column, row)` when the keypad fills `area`
    pub fn button_at(&self, area: Rect, column: u16, row: u16) -> Option<&Button> {
        let cells = self.cell_rects(area);
        for (r, rects) in cells.iter().enumerate() {
            for (c, rect) in rects.iter().enumerate() {
                if contains(*rect, column, row) {
                    return self.rows.get(r).and_then(|buttons| buttons.get(c));
                }
            }
        }
        None
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

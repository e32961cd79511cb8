//! Terminal rendering module for rich markdown output
//!
//! Markdown text goes through termimad. Fenced blocks hold the calendar
//! grids; they are printed line by line with the cell markers colored.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

const CELL_WIDTH: usize = 4;
const CELL_STRIDE: usize = CELL_WIDTH + 1;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut in_grid = false;
        for line in markdown.lines() {
            if line.starts_with("```") {
                in_grid = !in_grid;
            } else if in_grid {
                println!("{}", style_grid_line(line));
            } else if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Colors the cells of one calendar grid line.
///
/// Cells are four characters wide with one space between them; the first
/// and last column are the weekend.
fn style_grid_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut styled = String::with_capacity(line.len() * 2);

    for (column, chunk) in chars.chunks(CELL_STRIDE).enumerate() {
        let cell: String = chunk.iter().take(CELL_WIDTH).collect();
        let gap: String = chunk.iter().skip(CELL_WIDTH).collect();

        let cell = if cell.contains('[') {
            cell.green().bold().to_string()
        } else if cell.contains('<') {
            cell.red().to_string()
        } else if cell.contains('^') {
            cell.yellow().to_string()
        } else if (column == 0 || column == 6) && !cell.trim().is_empty() {
            cell.dark_grey().to_string()
        } else {
            cell
        };
        styled.push_str(&cell);
        styled.push_str(&gap);
    }
    styled
}

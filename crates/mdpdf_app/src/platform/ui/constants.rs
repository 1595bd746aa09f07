use ratatui::style::{Color, Modifier, Style};

pub const TITLE: &str = "Markdown to PDF";
pub const SETUP_TITLE: &str = "Markdown to PDF setup";

pub const EMPTY_LIST: &str = "No markdown files found. Press q to quit.";
pub const HELP_IDLE: &str = "Up/k Down/j  g/G top/bottom  Enter convert  q quit";
pub const HELP_CONVERTING: &str = "Converting, please wait. q quit";
pub const HELP_ERROR: &str = "Press Esc or Enter to return, q to quit.";
pub const SETUP_PROMPT: &str = "Gotenberg endpoint:";
pub const HELP_SETUP_EDIT: &str = "Enter save  Esc/Ctrl+C quit";
pub const HELP_SETUP_CONFIRMED: &str = "Saved. Press Enter to continue, Esc to quit.";

pub const CURSOR_MARKER: &str = "> ";
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIME_COLUMN_WIDTH: u16 = 19;

pub const HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const COLUMN_HEADER: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::UNDERLINED);
pub const ROW_SELECTED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
pub const ROW_NORMAL: Style = Style::new().fg(Color::White);
pub const STATUS: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const BUSY: Style = Style::new().fg(Color::Yellow);
pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
pub const HINT: Style = Style::new().fg(Color::DarkGray);
pub const INPUT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use mdpdf_core::{AppViewModel, Mode, SetupStep, SetupViewModel};
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::main_areas(frame.area());

    frame.render_widget(Paragraph::new(Span::styled(TITLE, HEADER)), areas.header);

    match view.mode {
        Mode::Error => draw_error(frame, areas.body, view),
        Mode::Idle | Mode::Converting if view.rows.is_empty() => {
            frame.render_widget(Paragraph::new(EMPTY_LIST), areas.body)
        }
        Mode::Idle | Mode::Converting => draw_list(frame, areas.body, view),
    }

    frame.render_widget(Paragraph::new(status_line(view)).style(STATUS), areas.status);

    let help = match view.mode {
        Mode::Idle => HELP_IDLE,
        Mode::Converting => HELP_CONVERTING,
        Mode::Error => HELP_ERROR,
    };
    frame.render_widget(Paragraph::new(Span::styled(help, HINT)), areas.help);
}

fn draw_list(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let style = if row.selected { ROW_SELECTED } else { ROW_NORMAL };
            Row::new(vec![
                row.name.clone(),
                folder_of(&row.path),
                format_modified(row.modified),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["Name", "Folder", "Modified"]).style(COLUMN_HEADER);
    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Min(8),
            Constraint::Length(TIME_COLUMN_WIDTH),
        ],
    )
    .header(header)
    .highlight_symbol(CURSOR_MARKER)
    .row_highlight_style(ROW_SELECTED);

    let mut state = TableState::default();
    state.select(view.cursor);
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_error(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let message = view.error.as_deref().unwrap_or("unknown failure");
    let text = vec![
        Line::from(Span::styled(format!("Error: {message}"), ERROR)),
        Line::default(),
        Line::from(Span::styled(HELP_ERROR, HINT)),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    let mut spans = match (&view.converting, &view.last_output) {
        (Some(name), _) => vec![Span::styled(format!("Converting {name} to PDF..."), BUSY)],
        (None, Some(output)) => vec![Span::raw(format!("Saved {}", output.display()))],
        (None, None) => vec![Span::raw(format!("{} file(s)", view.rows.len()))],
    };
    if view.scan_issues > 0 {
        spans.push(Span::raw(format!(
            "  ({} path(s) could not be read, see log)",
            view.scan_issues
        )));
    }
    Line::from(spans)
}

/// Directory of a root-relative path; `.` for files directly in the root.
fn folder_of(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    }
}

/// Local time, `YYYY-MM-DD HH:MM:SS`.
pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIME_FORMAT).to_string()
}

pub fn render_setup(frame: &mut Frame, view: &SetupViewModel) {
    let areas = layout::setup_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(SETUP_TITLE, HEADER)),
        areas.header,
    );
    frame.render_widget(Paragraph::new(SETUP_PROMPT), areas.prompt);

    let input = Paragraph::new(Span::styled(view.endpoint.clone(), INPUT))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, areas.input);

    let help = match view.step {
        SetupStep::EditingEndpoint => {
            // Cursor sits after the text, inside the border.
            let offset = u16::try_from(view.endpoint.chars().count()).unwrap_or(u16::MAX);
            let x = areas
                .input
                .x
                .saturating_add(1)
                .saturating_add(offset)
                .min(areas.input.right().saturating_sub(2));
            frame.set_cursor_position((x, areas.input.y + 1));
            HELP_SETUP_EDIT
        }
        SetupStep::Confirmed => HELP_SETUP_CONFIRMED,
    };
    frame.render_widget(Paragraph::new(Span::styled(help, HINT)), areas.help);
}

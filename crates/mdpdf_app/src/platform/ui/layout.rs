use ratatui::layout::{Constraint, Layout, Margin, Rect};

pub struct MainAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

pub fn main_areas(area: Rect) -> MainAreas {
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [header, body, status, help] = Layout::vertical([
        Constraint::Length(2), // Title + blank line
        Constraint::Min(3),    // List or error
        Constraint::Length(1), // Status bar
        Constraint::Length(1), // Key help
    ])
    .areas(inner);

    MainAreas {
        header,
        body,
        status,
        help,
    }
}

pub struct SetupAreas {
    pub header: Rect,
    pub prompt: Rect,
    pub input: Rect,
    pub help: Rect,
}

pub fn setup_areas(area: Rect) -> SetupAreas {
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let [header, prompt, input, _, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    SetupAreas {
        header,
        prompt,
        input,
        help,
    }
}

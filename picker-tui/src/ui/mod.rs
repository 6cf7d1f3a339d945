use crate::app::{App, Control};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub(crate) mod layout;
mod picker_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(layout::PICKER_HEIGHT + 2), // Picker
            Constraint::Length(4),                      // Host form
            Constraint::Length(3),                      // Status
            Constraint::Length(3),                      // Controls
        ])
        .split(frame.area());

    picker_view::render_picker(frame, chunks[0], app);
    render_host_form(frame, chunks[1], app);
    render_status(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_host_form(frame: &mut Frame, area: Rect, app: &App) {
    let host = &app.host;
    let lines = vec![
        Line::from(vec![
            Span::styled("Stored: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} minutes", host.total_minutes),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", host.duration()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {} updates", host.updates),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Recent: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                utils::format_trail(host.recent.iter().copied()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Form ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        app.focused.label(),
        Style::default().fg(Color::White),
    )];

    if let Some(spinner) = app.held_spinner() {
        spans.push(Span::styled(
            format!("  ⏵ holding {}", spinner.label()),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("Tab/←→↑↓", key),
        Span::styled(" Move  ", hint),
        Span::styled("Space/Enter", key),
        Span::styled(" Press  ", hint),
        Span::styled("0-9", key),
        Span::styled(" Type  ", hint),
        Span::styled("+/-", key),
        Span::styled(" Step  ", hint),
        Span::styled("r", key),
        Span::styled(" Reset  ", hint),
        Span::styled("q", key),
        Span::styled(" Quit", hint),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Controls "));
    frame.render_widget(widget, area);
}

use super::layout::PickerLayout;
use super::*;
use duration_picker::{Field, Spinner};

const PLACEHOLDER: &str = "--";

pub fn render_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Duration ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Remember where everything went so mouse events can find it
    app.layout = PickerLayout::compute(inner);
    let app = &*app;

    for field in Field::ALL {
        let column = *app.layout.column(field);
        render_spinner(frame, column.increment, app, Spinner::increment(field), "▲");
        render_input(frame, column.input, app, field);
        render_spinner(frame, column.decrement, app, Spinner::decrement(field), "▼");

        let label = Paragraph::new(app.label_for(field).to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(label, column.label);
    }

    for separator in app.layout.separators {
        // Colon sits on the middle row of the input boxes
        let colon = Paragraph::new(vec![Line::from(""), Line::from(""), Line::from(":")])
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(colon, separator);
    }
}

fn render_spinner(frame: &mut Frame, area: Rect, app: &App, spinner: Spinner, glyph: &str) {
    let is_focused = app.focused == Control::Spinner(spinner);
    let is_held = app.held_spinner() == Some(spinner);

    let style = if is_held {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let button = Paragraph::new(Span::styled(glyph.to_string(), style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, field: Field) {
    let is_focused = app.focused == Control::Field(field);
    let text = app.picker.display_text(field);

    let content = if text.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else if is_focused {
        // Block cursor after the typed digits
        Span::styled(format!("{}█", text), Style::default().fg(Color::White))
    } else {
        Span::styled(text, Style::default().fg(Color::White))
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let menu_height = app.tracks().len() as u16 * 2;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(menu_height + 10),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CODE MASTER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Learn Programming Languages".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Choose a language to learn:".fg(Color::Gray)),
        Line::from(""),
    ];

    for (index, track) in app.tracks().iter().enumerate() {
        let is_selected = index == app.selected_track();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        content.push(Line::from(vec![
            Span::styled(format!("{} {}. ", marker, index + 1), style),
            Span::styled(track.display_name(), style),
        ]));
        content.push(Line::from(""));
    }

    content.push(Line::from(
        "Master programming concepts one question at a time".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k navigate  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::session::AnswerOutcome;

use super::centered_rect;

/// Result popup shown over the quiz after each answer.
pub fn render(frame: &mut Frame, area: Rect, outcome: &AnswerOutcome) {
    let popup_area = centered_rect(80, 60, area);
    frame.render_widget(Clear, popup_area);

    let (verdict, color) = if outcome.correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect!", Color::Red)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled(
            outcome.explanation.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "[ Next Question ]",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("press enter".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(color)
                .padding(Padding::horizontal(2)),
        );
    frame.render_widget(widget, popup_area);
}

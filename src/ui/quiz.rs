use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{NUM_OPTIONS, Question};
use crate::session::{AnswerOutcome, QuizSession};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['1', '2', '3', '4'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_question_text(frame, chunks[3], question.text());
    render_options(
        frame,
        chunks[4],
        question,
        app.selected_option(),
        app.last_outcome(),
    );
    render_controls(frame, chunks[5]);
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let columns = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(area);

    let back = Paragraph::new("< b  Back to Menu").fg(Color::DarkGray);
    frame.render_widget(back, columns[0]);

    let score = Paragraph::new(format!(
        "Score: {}/{}",
        session.score(),
        session.answered_count()
    ))
    .alignment(Alignment::Center)
    .fg(Color::White);
    frame.render_widget(score, columns[1]);

    let track = session
        .track()
        .map(|track| track.display_name().to_uppercase())
        .unwrap_or_default();
    let label = Paragraph::new(track)
        .alignment(Alignment::Right)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(label, columns[2]);
}

/// One cell per question: green for correct, red for incorrect, grey while unanswered.
fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let history = session.history();
    let cells: Vec<Span> = (0..session.max_questions())
        .map(|index| match history.get(index) {
            Some(true) => Span::styled("■ ", Style::default().fg(Color::Green)),
            Some(false) => Span::styled("■ ", Style::default().fg(Color::Red)),
            None => Span::styled("□ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let widget = Paragraph::new(Line::from(cells)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().borders(Borders::TOP).title("Question:"));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    selected: usize,
    outcome: Option<&AnswerOutcome>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(NUM_OPTIONS * 2);

    for (index, option) in question.options().iter().enumerate() {
        let is_selected = index == selected;
        let style = option_style(index, is_selected, outcome);
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(index: usize, is_selected: bool, outcome: Option<&AnswerOutcome>) -> Style {
    match outcome {
        Some(outcome) if index == outcome.correct_index => {
            Style::default().fg(Color::Green).bold()
        }
        Some(outcome) if index == outcome.selected_index => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if is_selected => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  1-4 answer  ·  enter select  ·  b menu  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CurrentScreen, EditField, QuizMode, MENU_ITEMS};

pub fn render(app: &App, frame: &mut Frame) {
    match app.current_screen {
        CurrentScreen::Menu => render_menu(app, frame),
        CurrentScreen::Quiz => render_quiz(app, frame),
        CurrentScreen::Browse => render_browse(app, frame),
        CurrentScreen::Edit => render_edit(app, frame),
        CurrentScreen::Stats => render_stats(app, frame),
    }
}

fn footer(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
}

pub fn correct_answers_label(count: usize) -> String {
    match count {
        1 => "1 correct answer".to_string(),
        n => format!("{} correct answers", n),
    }
}

fn render_menu(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(MENU_ITEMS.len() as u16 + 2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Synonym Quiz ({} words)", app.store.all().len()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    frame.render_widget(title, chunks[0]);

    let items: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.menu_selection {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(*item, style))
        })
        .collect();

    let menu = Paragraph::new(items)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Select Mode"));
    frame.render_widget(menu, chunks[1]);

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(status, chunks[2]);
    }

    frame.render_widget(footer("Arrow keys to select, Enter to start, 'q' to quit"), chunks[3]);
}

fn render_quiz(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Length(5), // Target word
            Constraint::Min(10),   // Options
            Constraint::Length(3), // Feedback
            Constraint::Length(1),
        ])
        .split(frame.area());

    let stats_text = match (&app.quiz_mode, &app.class_session) {
        (QuizMode::Class(list), Some(session)) => format!(
            "{} | Left: {} | {} hits, {} misses",
            list.label(),
            session.remaining() + usize::from(app.round.is_some()),
            session.hits,
            session.misses
        ),
        _ => format!(
            "Score: {} | Attempts: {} | Streak: {}",
            app.score.correct, app.score.attempts, app.streak
        ),
    };
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, chunks[0]);

    let Some(round) = &app.round else {
        render_session_summary(app, frame, chunks[2]);
        frame.render_widget(footer("'r' to restart, Esc for menu"), chunks[4]);
        return;
    };

    let target = Paragraph::new(vec![
        Line::from(Span::styled(
            round.target.headword.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(correct_answers_label(round.correct_count())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Word"));
    frame.render_widget(target, chunks[1]);

    let lines: Vec<Line> = round
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = app.is_selected(&option.id);
            let marker = if selected { "[x]" } else { "[ ]" };
            let style = match app.feedback {
                Some(_) if option.is_correct => Style::default().fg(Color::Green),
                Some(_) if selected => Style::default().fg(Color::Red),
                None if selected => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            Line::from(Span::styled(format!("{} {} {}", i + 1, marker, option.text), style))
        })
        .collect();
    let options = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Options"));
    frame.render_widget(options, chunks[2]);

    if let Some(correct) = app.feedback {
        let (text, color) = if correct {
            ("Correct!".to_string(), Color::Green)
        } else {
            let answers: Vec<&str> = round
                .options
                .iter()
                .filter(|o| o.is_correct)
                .map(|o| o.text.as_str())
                .collect();
            (format!("Not quite. Synonyms: {}", answers.join(", ")), Color::Red)
        };
        let feedback = Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(feedback, chunks[3]);
        frame.render_widget(footer("Space for the next word, Esc for menu"), chunks[4]);
    } else {
        frame.render_widget(footer("1-8 to toggle, Enter to check, Esc for menu"), chunks[4]);
    }
}

fn render_session_summary(app: &App, frame: &mut Frame, area: Rect) {
    let text = match &app.class_session {
        Some(session) => vec![
            Line::from(Span::styled(
                "Session complete!",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Hits: {}   Misses: {}", session.hits, session.misses)),
            Line::from(format!("Accuracy: {}%", session.accuracy())),
        ],
        None => vec![Line::from("No word to show.")],
    };
    let summary = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn render_browse(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let search = Paragraph::new(format!("Search: {}", app.browse_query))
        .block(Block::default().borders(Borders::ALL).title("Browse"));
    frame.render_widget(search, chunks[0]);

    let results = app.browse_results();
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let skip = app.browse_selection.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = results
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, entry)| {
            let style = if i == app.browse_selection {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let class_tag = if entry.is_class_word { " *" } else { "" };
            Line::from(vec![
                Span::styled(format!("{}{}", entry.headword, class_tag), style),
                Span::styled(
                    format!("  {}", entry.synonyms.join(", ")),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} words", results.len())),
    );
    frame.render_widget(list, chunks[1]);

    frame.render_widget(footer("Enter to practice, Tab to edit, Esc for menu"), chunks[2]);
}

fn render_edit(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let form = &app.edit;
    let field_block = |title: &'static str, field: EditField| {
        let style = if form.field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default().borders(Borders::ALL).title(title).border_style(style)
    };

    let title = if form.editing { "Word (editing)" } else { "New word" };
    frame.render_widget(
        Paragraph::new(form.headword.as_str()).block(field_block(title, EditField::Headword)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(form.synonyms.as_str())
            .block(field_block("Synonyms (comma separated)", EditField::Synonyms)),
        chunks[1],
    );
    let flag = if form.is_class_word { "[x] Class word" } else { "[ ] Class word" };
    frame.render_widget(
        Paragraph::new(flag).block(field_block("Lists", EditField::ClassFlag)),
        chunks[2],
    );

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red)),
            chunks[3],
        );
    }

    frame.render_widget(
        footer("Tab to switch field, Space toggles class flag, Enter to save, Esc to cancel"),
        chunks[5],
    );
}

fn render_stats(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(frame.area());

    let minutes = app.score.elapsed().num_minutes();
    let text = vec![
        Line::from(format!("Attempts: {}", app.score.attempts)),
        Line::from(Span::styled(
            format!("Correct: {}", app.score.correct),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Accuracy: {}%", app.score.percentage()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Practicing since {} ({} min)",
            app.score.started_at.format("%H:%M"),
            minutes
        )),
    ];
    let stats = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your progress"));
    frame.render_widget(stats, chunks[1]);
    frame.render_widget(footer("Any key to return"), chunks[2]);
}

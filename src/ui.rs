use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fundmatch::{cards, Action, App, FormField, RecordKind, Tab, TypeChip};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // The modal overlays everything; dismiss before anything else.
            if app.modal.is_some() {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                        app.dispatch(Action::CloseModal)
                    }
                    _ => {}
                }
                continue;
            }

            // Global navigation
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    app.dispatch(Action::NextTab);
                    continue;
                }
                KeyCode::BackTab => {
                    app.dispatch(Action::PreviousTab);
                    continue;
                }
                _ => {}
            }

            match app.tab {
                Tab::Home => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Enter | KeyCode::Char('g') => app.dispatch(Action::GetStarted),
                    KeyCode::Char('1') => app.dispatch(Action::GoTab(Tab::Home)),
                    KeyCode::Char('2') => app.dispatch(Action::GoTab(Tab::Profile)),
                    KeyCode::Char('3') => app.dispatch(Action::GoTab(Tab::Results)),
                    KeyCode::Char('4') => app.dispatch(Action::GoTab(Tab::Saved)),
                    _ => {}
                },
                // Every printable character belongs to the form here,
                // so quitting is Esc only.
                Tab::Profile => match key.code {
                    KeyCode::Up => app.dispatch(Action::FocusPrevious),
                    KeyCode::Down => app.dispatch(Action::FocusNext),
                    KeyCode::Enter => app.dispatch(Action::Submit),
                    KeyCode::Backspace => app.dispatch(Action::Backspace),
                    KeyCode::Char(c) => app.dispatch(Action::Input(c)),
                    _ => {}
                },
                Tab::Results => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.dispatch(Action::CursorDown),
                    KeyCode::Up | KeyCode::Char('k') => app.dispatch(Action::CursorUp),
                    KeyCode::Enter | KeyCode::Char('d') => app.dispatch(Action::OpenDetails),
                    KeyCode::Char('s') => app.dispatch(Action::ToggleSave),
                    KeyCode::Char('1') => app.dispatch(Action::SelectChip(TypeChip::Both)),
                    KeyCode::Char('2') => {
                        app.dispatch(Action::SelectChip(TypeChip::ScholarshipOnly))
                    }
                    KeyCode::Char('3') => app.dispatch(Action::SelectChip(TypeChip::LoanOnly)),
                    _ => {}
                },
                Tab::Saved => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.dispatch(Action::CursorDown),
                    KeyCode::Up | KeyCode::Char('k') => app.dispatch(Action::CursorUp),
                    KeyCode::Enter | KeyCode::Char('d') => app.dispatch(Action::OpenDetails),
                    KeyCode::Char('r') | KeyCode::Char('s') => app.dispatch(Action::RemoveSaved),
                    _ => {}
                },
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.tab {
        Tab::Home => render_home(f, chunks[1]),
        Tab::Profile => render_profile(f, chunks[1], app),
        Tab::Results => render_results(f, chunks[1], app),
        Tab::Saved => render_saved(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);

    if let Some(record) = app.modal.clone() {
        render_modal(f, &record);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let tabs = [Tab::Home, Tab::Profile, Tab::Results, Tab::Saved];

    let mut tab_spans = vec![];
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *tab == app.tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(tab.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Catalog: {}", app.catalog.record_count()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Saved: {}", app.saved.len()),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" FundMatch "),
    );

    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Find scholarships and student loans that fit you",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  Tell us your GPA, what kind of funding you want, and a few"),
        Line::from("  category keywords. We match you against the catalog and let"),
        Line::from("  you save the entries worth applying to."),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled("g", Style::default().fg(Color::Yellow)),
            Span::raw(" to get started with your profile."),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Welcome "),
    );

    f.render_widget(paragraph, area);
}

fn form_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let marker = if focused { "› " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value = if focused {
        format!("{}█", value)
    } else {
        value
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:<16}", label), label_style),
        Span::raw(value),
    ])
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let mut content = vec![
        Line::from(""),
        form_line("GPA", form.gpa.clone(), form.focus == FormField::Gpa),
        Line::from(""),
        form_line(
            "Preference",
            format!("{}  (space to change)", form.preference.label()),
            form.focus == FormField::Preference,
        ),
        Line::from(""),
        form_line(
            "Course",
            format!("{}  (space to change)", form.course_label()),
            form.focus == FormField::Course,
        ),
    ];

    if form.other_course_visible() {
        content.push(Line::from(""));
        content.push(form_line(
            "Other course",
            form.other_course.clone(),
            form.focus == FormField::OtherCourse,
        ));
    }

    content.push(Line::from(""));
    content.push(form_line(
        "Categories",
        form.categories.clone(),
        form.focus == FormField::Categories,
    ));
    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "    comma-separated keywords, e.g. STEM, need-based, low-income",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )]));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Your Profile "),
    );

    f.render_widget(paragraph, area);
}

fn render_chips(f: &mut Frame, area: Rect, app: &App) {
    let chips = [
        ('1', TypeChip::Both),
        ('2', TypeChip::ScholarshipOnly),
        ('3', TypeChip::LoanOnly),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (key, chip) in chips {
        let style = if chip == app.chip {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", key, chip.label()), style));
        spans.push(Span::raw("  "));
    }

    let chips_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Filter "),
    );

    f.render_widget(chips_bar, area);
}

fn record_row<'a>(
    kind: RecordKind,
    name: String,
    subtitle: String,
    action: &'a str,
) -> Row<'a> {
    let badge_color = match kind {
        RecordKind::Scholarship => Color::Green,
        RecordKind::Loan => Color::Cyan,
    };

    Row::new(vec![
        Cell::from(kind.badge()).style(Style::default().fg(badge_color)),
        Cell::from(name).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(subtitle).style(Style::default().fg(Color::DarkGray)),
        Cell::from(action.to_string()).style(Style::default().fg(Color::Yellow)),
    ])
    .height(1)
}

fn cards_table<'a>(rows: Vec<Row<'a>>, title: &'a str) -> Table<'a> {
    let header_cells = ["Type", "Name", "Details", "Action"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(28),
            Constraint::Min(36),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title.to_string()),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ")
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_chips(f, chunks[0], app);

    let visible = app.visible_results();

    if visible.is_empty() {
        let hint = if app.last_recommendations.is_empty() {
            "  No recommendations yet. Submit your profile first."
        } else {
            "  Nothing matches this filter."
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Recommendations "),
            );
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|rec| {
            record_row(
                rec.record.kind(),
                rec.record.name().to_string(),
                cards::subtitle(&rec.record),
                cards::save_label(app.saved.contains(rec.record.id())),
            )
        })
        .collect();

    let table = cards_table(rows, " Recommendations ");

    let mut state = TableState::default();
    state.select(Some(app.results_cursor.min(visible.len() - 1)));
    f.render_stateful_widget(table, chunks[1], &mut state);
}

fn render_saved(f: &mut Frame, area: Rect, app: &App) {
    let saved = app.saved_records();

    if saved.is_empty() {
        let empty = Paragraph::new("  No saved items yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Saved "),
            );
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = saved
        .iter()
        .map(|record| {
            record_row(
                record.kind(),
                record.name().to_string(),
                cards::subtitle(record),
                "Remove",
            )
        })
        .collect();

    let table = cards_table(rows, " Saved ");

    let mut state = TableState::default();
    state.select(Some(app.saved_cursor.min(saved.len() - 1)));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_modal(f: &mut Frame, record: &fundmatch::Record) {
    let area = centered_rect(64, 60, f.size());

    let mut content = vec![Line::from("")];
    for (label, value) in cards::detail_rows(record) {
        content.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", label),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ]));
        content.push(Line::from(""));
    }
    content.push(Line::from(vec![
        Span::styled(
            "  Apply: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            record.apply_url().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "  Press Esc to close",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )]));

    let popup = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ({}) ", record.name(), record.kind().badge())),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let hint = |key: &'static str, what: &'static str| {
        vec![
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {} | ", what)),
        ]
    };

    spans.push(Span::raw(" "));
    if app.modal.is_some() {
        spans.extend(hint("Esc", "Close details"));
    } else {
        match app.tab {
            Tab::Home => {
                spans.extend(hint("g", "Get started"));
                spans.extend(hint("1-4", "Tabs"));
            }
            Tab::Profile => {
                spans.extend(hint("↑/↓", "Field"));
                spans.extend(hint("Enter", "Submit"));
            }
            Tab::Results => {
                spans.extend(hint("↑/↓", "Nav"));
                spans.extend(hint("Enter", "Details"));
                spans.extend(hint("s", "Save"));
                spans.extend(hint("1-3", "Filter"));
            }
            Tab::Saved => {
                spans.extend(hint("↑/↓", "Nav"));
                spans.extend(hint("Enter", "Details"));
                spans.extend(hint("r", "Remove"));
            }
        }
        spans.extend(hint("Tab", "Switch view"));
        spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" Quit"));
    }

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

/// Popup region centered in `r`, sized as a percentage of it.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

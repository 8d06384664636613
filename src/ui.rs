use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Screen, TaskScreen};
use crate::form::{EditMode, Field, TaskForm};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, app.screen, chunks[0]);

    match app.screen {
        Screen::Echo => draw_echo(f, app, chunks[1]),
        Screen::List => draw_list_screen(f, &app.list, chunks[1]),
        Screen::Modal | Screen::Editor => {
            let screen = app.active_tasks().unwrap_or(&app.modal);
            draw_tasks(f, screen, app.screen == Screen::Editor, chunks[1]);
            if screen.form.is_open() {
                draw_form(f, &screen.form, app.screen == Screen::Editor);
            }
        }
    }

    draw_help(f, app, chunks[2]);

    if let Some(message) = &app.toast {
        draw_toast(f, message);
    }
}

fn draw_tabs(f: &mut Frame, current: Screen, area: Rect) {
    let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
    let selected = Screen::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().title(" tasklist ").borders(Borders::ALL))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_echo(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input = Paragraph::new(input_line(&app.echo.input, true))
        .block(Block::default().title("Text").borders(Borders::ALL));
    f.render_widget(input, chunks[0]);

    let echo = Paragraph::new(app.echo.echo.as_str())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().title("Echo").borders(Borders::ALL));
    f.render_widget(echo, chunks[1]);
}

fn draw_list_screen(f: &mut Frame, screen: &TaskScreen, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input = Paragraph::new(input_line(&screen.input, true))
        .block(Block::default().title("New task").borders(Borders::ALL));
    f.render_widget(input, chunks[0]);

    draw_tasks(f, screen, false, chunks[1]);
}

fn draw_tasks(f: &mut Frame, screen: &TaskScreen, detailed: bool, area: Rect) {
    let items: Vec<ListItem> = screen
        .store
        .list()
        .iter()
        .map(|t| {
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("[#{}] ", t.id)),
                Span::styled(t.title.as_str(), Style::default().fg(Color::White)),
            ])];
            if detailed {
                lines.push(Line::from(Span::raw(format!("      {}", t.description))));
                lines.push(Line::from(Span::styled(
                    format!("      Created: {}", t.created_at),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let title = format!("Tasks ({})", screen.store.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !screen.store.is_empty() {
        state.select(Some(screen.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_form(f: &mut Frame, form: &TaskForm, with_description: bool) {
    let height = if with_description { 8 } else { 5 };
    let area = centered(f.area(), 60, height);
    f.render_widget(Clear, area);

    let title = match form.mode {
        EditMode::Editing(_) => " Edit task ",
        _ => " New task ",
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        field_line("Title", &form.title, form.field == Field::Title),
    ];
    if with_description {
        lines.push(field_line(
            "Description",
            &form.description,
            form.field == Field::Description,
        ));
        lines.push(Line::from(""));
        lines.push(hint("Enter save · Tab next field · Esc cancel"));
    } else {
        lines.push(Line::from(""));
        lines.push(hint("Enter add · Esc cancel"));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.screen {
        Screen::Echo => "type · Enter echo · Tab screens · Esc quit",
        Screen::List => "type · Enter add · ↑↓ select · Del delete · Tab screens · Esc quit",
        Screen::Modal => "a add · d delete · ↑↓ select · Tab screens · q quit",
        Screen::Editor => "a add · e edit · d delete · ↑↓ select · Tab screens · q quit",
    };
    f.render_widget(Paragraph::new(hint(text)), area);
}

fn draw_toast(f: &mut Frame, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(6);
    let full = f.area();
    let area = Rect::new(
        full.width.saturating_sub(width) / 2,
        full.height.saturating_sub(6),
        width.min(full.width),
        3.min(full.height),
    );
    f.render_widget(Clear, area);
    let toast = Paragraph::new(message)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(toast, area);
}

fn input_line(text: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![Span::raw(text)];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![Span::styled(format!("  {label}: "), label_style)];
    spans.extend(input_line(value, focused).spans);
    Line::from(spans)
}

fn hint(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<Vec<_>>()
            .concat()
    }

    #[test]
    fn test_renders_tasks_and_form() {
        let mut app = App::new(Screen::Editor, "%Y-%m-%d");
        app.editor.store.create("Buy milk", Some("two liters")).unwrap();
        let screen = render(&app);
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("two liters"));
        assert!(screen.contains("Tasks (1)"));

        app.editor.form.open_create();
        assert!(render(&app).contains("New task"));
    }

    #[test]
    fn test_renders_toast_and_echo() {
        let mut app = App::new(Screen::Echo, "%Y-%m-%d");
        app.echo.echo = "hello".to_string();
        app.toast = Some("Enter the task title".to_string());
        let screen = render(&app);
        assert!(screen.contains("hello"));
        assert!(screen.contains("Enter the task title"));
    }
}

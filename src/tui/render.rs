//! Board rendering: stage columns, the creation form, and modals.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph};

use crate::board::domain::Stage;
use crate::board::ports::BoardGateway;

use super::app::{BoardApp, FormField, Mode, TaskForm};

const HEADER: &str = concat!("tuido ", env!("CARGO_PKG_VERSION"));
const KEY_HINTS: &str =
    "Ctrl+A new | Ctrl+B delete | a/d move | arrows select | Esc quit";

/// Draws the whole UI for the current app state.
pub(crate) fn render<G: BoardGateway>(frame: &mut Frame<'_>, app: &BoardApp<G>) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(HEADER).alignment(Alignment::Center),
        header,
    );
    render_columns(frame, app, body);
    render_footer(frame, app, footer);

    match &app.mode {
        Mode::Browse => {}
        Mode::AddTask(form) => render_task_form(frame, form),
        Mode::ConfirmQuit => render_quit_confirm(frame),
    }
}

fn render_columns<G: BoardGateway>(frame: &mut Frame<'_>, app: &BoardApp<G>, area: Rect) {
    let stage_count = app.store.stages().stage_count();
    let chunks = Layout::horizontal(vec![Constraint::Fill(1); stage_count]).split(area);

    for ((stage, name), chunk) in app.store.stages().iter().zip(chunks.iter()) {
        let tasks = app.store.tasks_in_stage(stage);
        let focused = stage.index() == app.focus;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::bordered()
            .title(format!(" {name} ({}) ", tasks.len()))
            .border_style(border_style);

        let items: Vec<ListItem<'_>> = tasks
            .iter()
            .map(|task| {
                ListItem::new(Text::from(vec![
                    Line::styled(
                        task.theme().to_owned(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        task.description().to_owned(),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        if focused && !tasks.is_empty() {
            state.select(Some(app.cursor_in(Stage::new(app.focus))));
        }
        frame.render_stateful_widget(list, *chunk, &mut state);
    }
}

fn render_footer<G: BoardGateway>(frame: &mut Frame<'_>, app: &BoardApp<G>, area: Rect) {
    let line = app.status.as_ref().map_or_else(
        || Line::raw(KEY_HINTS),
        |message| Line::styled(message.clone(), Style::default().fg(Color::Red)),
    );
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_task_form(frame: &mut Frame<'_>, form: &TaskForm) {
    let area = centered_rect(70, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Create new task ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [theme_row, description_row, _, hint_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_form_field(
        frame,
        theme_row,
        "Theme",
        &form.theme,
        form.field == FormField::Theme,
    );
    render_form_field(
        frame,
        description_row,
        "Description",
        &form.description,
        form.field == FormField::Description,
    );
    frame.render_widget(
        Paragraph::new("Enter submit | Tab switch field | Esc cancel")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM)),
        hint_row,
    );
}

fn render_form_field(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str, active: bool) {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::bordered()
        .title(format!(" {label} "))
        .border_style(border_style);
    frame.render_widget(Paragraph::new(value.to_owned()).block(block), area);
}

fn render_quit_confirm(frame: &mut Frame<'_>) {
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(" Quit ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new("Quit the application? (y/n)").alignment(Alignment::Center),
        inner,
    );
}

/// Centers a fixed-size rectangle inside the given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, centered, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    centered
}

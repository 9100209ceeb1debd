//! Application state and event loop for the board UI.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::board::domain::{Stage, TaskId};
use crate::board::ports::BoardGateway;
use crate::board::services::{TaskStore, WriteOutcome};

use super::{input, render};

/// Which input mode the UI is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Navigating the board columns.
    Browse,
    /// Typing into the task creation form.
    AddTask(TaskForm),
    /// Quit confirmation dialog.
    ConfirmQuit,
}

/// Field focus inside the task creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    Theme,
    Description,
}

/// In-progress input for a new task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TaskForm {
    pub(crate) theme: String,
    pub(crate) description: String,
    pub(crate) field: FormField,
}

impl TaskForm {
    /// Returns the buffer of the currently focused field.
    pub(crate) fn active_buffer_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Theme => &mut self.theme,
            FormField::Description => &mut self.description,
        }
    }

    /// Moves focus to the other field.
    pub(crate) fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Theme => FormField::Description,
            FormField::Description => FormField::Theme,
        };
    }
}

/// UI state: the store plus column focus, per-column cursors, the input
/// mode, and the most recent write-through diagnostic.
pub(crate) struct BoardApp<G: BoardGateway> {
    pub(crate) store: TaskStore<G>,
    pub(crate) focus: usize,
    pub(crate) cursors: Vec<usize>,
    pub(crate) mode: Mode,
    pub(crate) status: Option<String>,
    pub(crate) should_quit: bool,
}

impl<G: BoardGateway> BoardApp<G> {
    pub(crate) fn new(store: TaskStore<G>) -> Self {
        let cursors = vec![0; store.stages().stage_count()];
        Self {
            store,
            focus: 0,
            cursors,
            mode: Mode::Browse,
            status: None,
            should_quit: false,
        }
    }

    /// Identifier of the task under the cursor in the focused column.
    pub(crate) fn selected_task_id(&self) -> Option<TaskId> {
        let cursor = self.cursors.get(self.focus).copied()?;
        self.store
            .tasks_in_stage(Stage::new(self.focus))
            .get(cursor)
            .map(|task| task.id())
    }

    /// Cursor position in the focused column.
    pub(crate) fn cursor_in(&self, stage: Stage) -> usize {
        self.cursors.get(stage.index()).copied().unwrap_or(0)
    }

    pub(crate) fn focus_next_column(&mut self) {
        let last = self.store.stages().stage_count().saturating_sub(1);
        self.focus = self.focus.saturating_add(1).min(last);
    }

    pub(crate) fn focus_previous_column(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.store.tasks_in_stage(Stage::new(self.focus)).len();
        if let Some(cursor) = self.cursors.get_mut(self.focus) {
            *cursor = cursor.saturating_add(1).min(count.saturating_sub(1));
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if let Some(cursor) = self.cursors.get_mut(self.focus) {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Creates a task from the submitted form and selects it in the first
    /// column.
    pub(crate) fn submit_form(&mut self, form: TaskForm) {
        let (task, outcome) = self.store.create(form.theme, form.description);
        self.note_outcome(outcome);
        self.focus = Stage::FIRST.index();
        let position = self.position_in_stage(Stage::FIRST, task.id());
        if let Some(cursor) = self.cursors.get_mut(self.focus) {
            *cursor = position;
        }
    }

    /// Deletes the task under the cursor, if any.
    pub(crate) fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let (_, outcome) = self.store.delete(id);
        self.note_outcome(outcome);
        self.clamp_cursors();
    }

    /// Moves the task under the cursor one stage forward and follows it.
    pub(crate) fn move_selected_forward(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let (moved, outcome) = self.store.move_forward(id);
        self.note_outcome(outcome);
        self.follow_moved_task(id, moved);
    }

    /// Moves the task under the cursor one stage backward and follows it.
    pub(crate) fn move_selected_backward(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let (moved, outcome) = self.store.move_backward(id);
        self.note_outcome(outcome);
        self.follow_moved_task(id, moved);
    }

    pub(crate) fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn follow_moved_task(&mut self, id: TaskId, moved: Option<Stage>) {
        if let Some(stage) = moved {
            self.focus = stage.index();
            let position = self.position_in_stage(stage, id);
            if let Some(cursor) = self.cursors.get_mut(self.focus) {
                *cursor = position;
            }
        }
        self.clamp_cursors();
    }

    fn position_in_stage(&self, stage: Stage, id: TaskId) -> usize {
        self.store
            .tasks_in_stage(stage)
            .iter()
            .position(|task| task.id() == id)
            .unwrap_or(0)
    }

    fn note_outcome(&mut self, outcome: WriteOutcome) {
        self.status = outcome.err().map(|err| err.to_string());
    }

    fn clamp_cursors(&mut self) {
        let counts: Vec<usize> = self
            .store
            .stages()
            .iter()
            .map(|(stage, _)| self.store.tasks_in_stage(stage).len())
            .collect();
        for (cursor, count) in self.cursors.iter_mut().zip(counts) {
            *cursor = (*cursor).min(count.saturating_sub(1));
        }
    }
}

/// Runs the board UI over the given store until the user quits.
///
/// Puts the terminal into raw mode on the alternate screen, installs a
/// panic hook that restores it, and drives the cooperative event loop: one
/// input event at a time, re-rendering from store contents after every
/// dispatch.
///
/// # Errors
///
/// Returns any terminal I/O error raised while setting up, drawing, or
/// restoring the screen.
pub fn run<G: BoardGateway>(store: TaskStore<G>) -> io::Result<()> {
    let mut app = BoardApp::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Restore the terminal before propagating any panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<G: BoardGateway>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut BoardApp<G>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

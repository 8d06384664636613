use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::echo::EchoState;
use crate::form::TaskForm;
use crate::task::Task;
use crate::task_store::{DescriptionPolicy, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Echo,
    List,
    Modal,
    Editor,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Echo, Screen::List, Screen::Modal, Screen::Editor];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Echo => "Echo",
            Screen::List => "List",
            Screen::Modal => "Modal",
            Screen::Editor => "Editor",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A task list with its form and selection cursor.
#[derive(Debug)]
pub struct TaskScreen {
    pub store: TaskStore,
    pub form: TaskForm,
    /// Inline title input of the list screen
    pub input: String,
    pub selected: usize,
}

impl TaskScreen {
    fn new(policy: DescriptionPolicy, date_format: &str) -> Self {
        Self {
            store: TaskStore::new(policy).with_date_format(date_format),
            form: TaskForm::new(),
            input: String::new(),
            selected: 0,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.store.list().get(self.selected)
    }

    fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_down(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }
}

#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub echo: EchoState,
    pub list: TaskScreen,
    pub modal: TaskScreen,
    pub editor: TaskScreen,
    /// Notification shown until the next key press
    pub toast: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(screen: Screen, date_format: &str) -> Self {
        Self {
            screen,
            echo: EchoState::default(),
            list: TaskScreen::new(DescriptionPolicy::Unused, date_format),
            modal: TaskScreen::new(DescriptionPolicy::Unused, date_format),
            editor: TaskScreen::new(DescriptionPolicy::Required, date_format),
            toast: None,
            should_quit: false,
        }
    }

    /// The task screen currently shown, if any.
    pub fn active_tasks(&self) -> Option<&TaskScreen> {
        match self.screen {
            Screen::Echo => None,
            Screen::List => Some(&self.list),
            Screen::Modal => Some(&self.modal),
            Screen::Editor => Some(&self.editor),
        }
    }

    /// Tasks of every screen, in screen order.
    pub fn all_tasks(&self) -> Vec<&Task> {
        [&self.list, &self.modal, &self.editor]
            .into_iter()
            .flat_map(|s| s.store.list())
            .collect()
    }

    /// Pretty JSON export of `all_tasks`.
    pub fn tasks_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.all_tasks())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.toast = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        // Ctrl/Alt combinations never reach text inputs.
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }

        let form_open = self.active_tasks().is_some_and(|s| s.form.is_open());
        if !form_open {
            match key.code {
                KeyCode::Tab => return self.switch_screen(self.screen.next()),
                KeyCode::BackTab => return self.switch_screen(self.screen.prev()),
                KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        match self.screen {
            Screen::Echo => self.handle_echo_key(key),
            Screen::List => self.handle_list_key(key),
            Screen::Modal | Screen::Editor => self.handle_form_screen_key(key),
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        debug!(from = self.screen.title(), to = screen.title(), "switch screen");
        self.screen = screen;
    }

    fn handle_echo_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.echo.submit(),
            KeyCode::Backspace => {
                self.echo.input.pop();
            }
            KeyCode::Char(c) => self.echo.input.push(c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let screen = &mut self.list;
        match key.code {
            KeyCode::Enter => match screen.store.create(&screen.input, None) {
                Ok(_) => screen.input.clear(),
                Err(err) => self.toast = Some(err.to_string()),
            },
            KeyCode::Backspace => {
                screen.input.pop();
            }
            KeyCode::Up => screen.select_up(),
            KeyCode::Down => screen.select_down(),
            KeyCode::Delete => screen.delete_selected(),
            KeyCode::Char(c) => screen.input.push(c),
            _ => {}
        }
    }

    fn handle_form_screen_key(&mut self, key: KeyEvent) {
        let editable = self.screen == Screen::Editor;
        let screen = match self.screen {
            Screen::Editor => &mut self.editor,
            _ => &mut self.modal,
        };

        if screen.form.is_open() {
            match key.code {
                KeyCode::Esc => screen.form.cancel(),
                KeyCode::Enter => {
                    if let Some(Err(err)) = screen.form.submit(&mut screen.store) {
                        self.toast = Some(err.to_string());
                    }
                }
                KeyCode::Tab | KeyCode::BackTab if editable => screen.form.toggle_field(),
                KeyCode::Backspace => {
                    screen.form.focused_mut().pop();
                }
                KeyCode::Char(c) => screen.form.focused_mut().push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => screen.form.open_create(),
            KeyCode::Char('e') if editable => {
                if let Some(task) = screen.selected_task().cloned() {
                    screen.form.open_edit(&task);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => screen.delete_selected(),
            KeyCode::Up => screen.select_up(),
            KeyCode::Down => screen.select_down(),
            _ => {}
        }
    }
}

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use docchat_core::{update, AppState, AppViewModel, Effect, Msg};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::effects::EffectRunner;
use crate::settings::Settings;
use crate::ui;
use crate::upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Upload,
}

/// Shell-only state: which input has the keyboard, the upload path being
/// typed, and whether the shell itself needs a redraw.
pub struct Shell {
    pub focus: Focus,
    pub upload_path: String,
    should_quit: bool,
    dirty: bool,
}

impl Shell {
    fn new() -> Self {
        Self {
            focus: Focus::Chat,
            upload_path: String::new(),
            should_quit: false,
            dirty: false,
        }
    }
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, settings);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: Settings,
) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, settings.api_settings());

    let mut state = AppState::new();
    let mut shell = Shell::new();
    let mut view = state.view();
    terminal.draw(|frame| ui::render::draw(frame, &view, &shell))?;

    loop {
        // One terminal event per pass, then drain engine completions.
        if event::poll(Duration::from_millis(75))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = handle_key(key, &mut shell, &view) {
                        dispatch(&mut state, msg, &runner, &mut shell);
                    }
                }
            }
        }
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner, &mut shell);
        }

        if shell.should_quit {
            return Ok(());
        }

        let state_dirty = state.consume_dirty();
        let shell_dirty = std::mem::take(&mut shell.dirty);
        if state_dirty || shell_dirty {
            view = state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view, &shell))?;
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner, shell: &mut Shell) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    for effect in effects {
        if matches!(effect, Effect::FocusChatInput) {
            shell.focus = Focus::Chat;
            shell.dirty = true;
            continue;
        }
        runner.run(effect);
    }
}

fn handle_key(key: KeyEvent, shell: &mut Shell, view: &AppViewModel) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        shell.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            shell.should_quit = true;
            None
        }
        KeyCode::Tab => {
            shell.focus = match shell.focus {
                Focus::Chat => Focus::Upload,
                Focus::Upload => Focus::Chat,
            };
            shell.dirty = true;
            None
        }
        KeyCode::Enter => match shell.focus {
            Focus::Chat => Some(Msg::SubmitQuery),
            Focus::Upload => {
                let raw = shell.upload_path.trim().to_string();
                if raw.is_empty() {
                    return None;
                }
                shell.upload_path.clear();
                shell.dirty = true;
                let path = PathBuf::from(raw);
                Some(Msg::FileChosen {
                    name: upload::file_name_of(&path),
                    content_type: upload::content_type_for(&path),
                    path,
                })
            }
        },
        KeyCode::Backspace => match shell.focus {
            Focus::Chat => {
                let mut draft = view.chat_draft.clone();
                draft.pop();
                Some(Msg::DraftChanged(draft))
            }
            Focus::Upload => {
                shell.upload_path.pop();
                shell.dirty = true;
                None
            }
        },
        KeyCode::Char(c) => match shell.focus {
            Focus::Chat => {
                let mut draft = view.chat_draft.clone();
                draft.push(c);
                Some(Msg::DraftChanged(draft))
            }
            Focus::Upload => {
                shell.upload_path.push(c);
                shell.dirty = true;
                None
            }
        },
        _ => None,
    }
}

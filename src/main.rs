mod config;
mod logging;
mod models;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use crate::config::{APP_DIR, Config, config_path, load_config};
use crate::logging::init_logging;
use crate::ui::{App, handle_event, render};

/// 获取数据目录路径 (~/.local/share/todo-list/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot resolve local data directory"))?
        .join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> io::Result<()> {
    let config = match config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    // 日志 guard 必须存活到进程结束
    let _log_guard = init_logging(&get_data_dir()?, &config.log_filter);
    info!(mouse = config.mouse, "todo-list starting");

    let mut app = App::new();

    // 设置终端
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    let restored = restore_terminal();

    match &result {
        Ok(()) => info!(items = app.editor.len(), "todo-list exiting"),
        Err(e) => error!(error = %e, "event loop failed"),
    }
    if let Err(e) = &restored {
        error!(error = %e, "terminal restore failed");
    }

    result.and(restored)
}

/// 恢复终端，每一步都会执行，返回第一个错误
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture,
        Show
    );
    raw.and(screen)
}

/// panic 时先恢复终端，再交给默认 hook 打印信息
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!(panic = %info, "todo-list panicked");
        default_hook(info);
    }));
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let area = terminal.draw(|f| render(f, app))?.area;

        let event = crossterm::event::read()?;
        if handle_event(app, area, event) {
            break;
        }
    }
    Ok(())
}

//zlabel/src/main.rs
use std::env;
use std::io;

use ratatui::prelude::*;

use zlabel::annotator::{Annotator, Outcome};
use zlabel::app::{render, UiTheme};
use zlabel::core::event::InputEvent;
use zlabel::services::{checkpoint, source, Config};
use zlabel::tui::TerminalGuard;

mod logging;

fn main() -> io::Result<()> {
    let config = Config::from_args(env::args().skip(1));
    let _logging = logging::init();

    let corpus = source::load(&config).map_err(io::Error::other)?;
    let mut annotator = Annotator::new(corpus);
    let theme = UiTheme::default();

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let _signals = zlabel::tui::terminal_guard::install_termination_signals(guard.restorer())?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 单线程同步事件循环：画一帧，读一个事件，处理完再画下一帧
    loop {
        terminal.draw(|frame| render(&mut annotator, &theme, frame))?;
        let event = InputEvent::from(crossterm::event::read()?);
        match annotator.handle_event(&event) {
            Outcome::Continue => {}
            Outcome::Save => {
                if let Err(err) = checkpoint::save(&config.checkpoint, annotator.corpus()) {
                    tracing::error!(error = %err, "save on demand failed");
                    annotator.set_warning(format!("Save failed: {}", err));
                }
            }
            Outcome::Quit => break,
        }
    }

    // 退出前整体落盘
    checkpoint::save(&config.checkpoint, annotator.corpus()).map_err(io::Error::other)?;
    drop(guard);
    Ok(())
}

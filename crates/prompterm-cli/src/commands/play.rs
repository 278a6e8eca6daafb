use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use prompterm_core::{AppConfig, Store};
use prompterm_tui::{
    event::{AppEvent, EventHandler},
    playback::FrameClock,
    widgets::{HudBarWidget, PrompterWidget},
    Session,
};

pub async fn run(config: AppConfig, script_path: Option<PathBuf>) -> Result<()> {
    let store = Store::new(config.data_dir());
    let settings = store.load_settings().await;
    let script = match script_path {
        Some(path) => Store::load_script_from(&path).await?,
        None => store.load_script().await,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("prompterm")
    )?;
    // Without REPORT_EVENT_TYPES the terminal driver delivers held-key
    // auto-repeats as plain presses and the router cannot tell them apart;
    // opt in where the terminal supports it
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The session clock starts here; the HUD comes up armed to hide
    let clock = FrameClock::start();
    let double_tap_window = Duration::from_millis(config.ui.double_tap_window_ms);
    let mut session = Session::new(settings, script, double_tap_window, clock.instant());

    let event_handler = EventHandler::new(config.ui.frame_interval());

    // Main loop
    loop {
        let mut buttons = None;
        terminal.draw(|frame| {
            let size = frame.area();
            PrompterWidget::render(frame, size, &session);
            buttons = HudBarWidget::render(frame, size, &session);
        })?;
        session.set_hud_buttons(buttons);

        // Blocks for at most one frame interval; a timeout is the frame tick
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => session.handle_key(key, clock.instant()),
                AppEvent::Mouse(mouse) => session.handle_mouse(mouse, clock.instant()),
                AppEvent::Resize(_, _) => {
                    // Next draw picks up the new size
                }
                AppEvent::Tick => {}
            }
        }

        // Advance playback every iteration so dt stays continuous across
        // pause, input bursts, and slow frames
        if session.on_tick(clock.now_ms(), clock.instant()) {
            flush_settings(&store, &mut session).await;
        }

        if session.should_quit() {
            break;
        }
    }

    // A change still inside its quiet period is flushed on the way out
    if session.has_unsaved_settings() {
        flush_settings(&store, &mut session).await;
    }

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Persist settings; failures are logged and absorbed
async fn flush_settings(store: &Store, session: &mut Session) {
    match store.save_settings(&session.settings).await {
        Ok(()) => session.settings_flushed(),
        Err(e) => tracing::warn!("Failed to persist settings: {e}"),
    }
}

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
};
use glam::Vec2;
use ratatui::{DefaultTerminal, Frame};
use stardrift_background::{BackgroundState, Viewport};
use stardrift_config::ConfigStore;
use stardrift_core::Settings;
use stardrift_field::{FieldParams, ParticleField};

mod logging;
mod menu;
mod welcome;

use menu::OptionsMenu;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init() {
        log::info!("logging to {}", path.display());
    }

    let store = match ConfigStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("settings will not be persisted: {e}");
            None
        }
    };
    let settings = store.as_ref().map(ConfigStore::load).unwrap_or_default();

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(settings, store.as_ref().map(|s| s.path().to_path_buf())).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    let settings = result?;
    if let Some(store) = store
        && let Err(e) = store.save(&settings)
    {
        log::error!("failed to save settings: {e}");
        eprintln!("stardrift: could not save settings: {e}");
    }
    Ok(())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Showing the start-up screen?
    show_welcome: bool,
    /// Current tunables, edited by the options menu.
    settings: Settings,
    /// Where settings are saved, shown on the welcome screen.
    config_path: Option<PathBuf>,
    field: ParticleField,
    background: BackgroundState,
    menu: OptionsMenu,
    /// Terminal area the field was last laid out in.
    viewport: Viewport,
    /// Last terminal cell the mouse was reported at.
    pointer: Option<(u16, u16)>,
    /// Start of the run; drives the shared pulse clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(settings: Settings, config_path: Option<PathBuf>) -> Self {
        Self {
            running: false,
            show_welcome: true,
            background: BackgroundState::new(settings.background_top),
            settings,
            config_path,
            field: ParticleField::from_entropy(),
            menu: OptionsMenu::new(),
            viewport: Viewport::default(),
            pointer: None,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop. Returns the settings to persist.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<Settings> {
        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(frame_start + self.frame_budget())?;
        }
        Ok(self.settings)
    }

    /// Time allotted to one frame at the configured tick rate.
    fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.settings.tick_rate().max(1) as f64)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.viewport = Viewport::new(frame.area());

        if self.show_welcome {
            welcome::render(frame, self.config_path.as_deref());
            return;
        }

        self.background.set_top(self.settings.background_top);
        self.background.render(frame);

        let params = FieldParams::from(&self.settings);
        let bounds = self.viewport.bounds();
        self.field
            .set_particle_count(self.settings.particle_count(), bounds, &params);

        self.menu.update_alpha();
        if self.menu.is_open() {
            self.menu.render(frame, &self.settings);
            return;
        }

        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.field
            .tick(self.reference_point(), bounds, elapsed_ms, &params);
        self.background
            .render_sprites(frame.buffer_mut(), self.viewport, self.field.sprites());
    }

    /// Mouse position in field coordinates, or the centre before the mouse
    /// has been seen.
    fn reference_point(&self) -> Vec2 {
        match self.pointer {
            Some((column, row)) => {
                let (x, y) = self.viewport.cell_center(column, row);
                Vec2::new(x, y)
            }
            None => {
                let bounds = self.viewport.bounds();
                Vec2::new(bounds.width / 2.0, bounds.height / 2.0)
            }
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Keeps polling until `deadline` so frames are paced at the tick rate.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if event::poll(deadline - now)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                    Event::Mouse(mouse) => self.on_mouse_event(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        // The first key only dismisses the welcome screen, then acts as usual.
        self.show_welcome = false;

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
            | (_, KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Esc) => {
                if self.menu.is_open() {
                    self.menu.close();
                } else {
                    self.quit();
                }
            }
            (_, KeyCode::Char('o') | KeyCode::Char('O')) => self.menu.toggle(),
            (_, KeyCode::Char('r') | KeyCode::Char('R')) => self.revert_to_defaults(),
            _ if self.menu.is_open() => self.menu.on_key_event(key, &mut self.settings),
            _ => {}
        }
    }

    /// Track the pointer and forward clicks to the menu.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        self.pointer = Some((mouse.column, mouse.row));
        if self.menu.is_open() {
            self.menu.on_mouse_event(mouse, &mut self.settings);
        }
    }

    /// Revert every setting to its default.
    fn revert_to_defaults(&mut self) {
        log::info!("reverting settings to defaults");
        self.settings.reset();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use stardrift_core::{Rgb, Setting};

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn test_first_key_dismisses_welcome() {
        let mut app = App::new(Settings::default(), None);
        app.running = true;
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.show_welcome);
        assert!(app.running);
    }

    #[test]
    fn test_field_follows_particle_count() {
        let mut app = App::new(Settings::default(), None);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut app, &mut terminal);
        // Welcome screen does not spawn anything.
        assert!(app.field.is_empty());

        press(&mut app, KeyCode::Enter);
        draw(&mut app, &mut terminal);
        assert_eq!(app.field.len(), 200);

        app.settings.set(Setting::NumParticles, 50.0);
        draw(&mut app, &mut terminal);
        assert_eq!(app.field.len(), 50);
    }

    #[test]
    fn test_menu_pauses_field() {
        let mut app = App::new(Settings::default(), None);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        press(&mut app, KeyCode::Char('o'));
        assert!(app.menu.is_open());
        draw(&mut app, &mut terminal);
        let before = app.field.particles().to_vec();
        draw(&mut app, &mut terminal);
        assert_eq!(app.field.particles(), before.as_slice());

        press(&mut app, KeyCode::Right);
        assert_eq!(app.settings.tick_rate(), 61);
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_revert_and_quit() {
        let mut app = App::new(Settings::default(), None);
        app.running = true;
        app.settings.set(Setting::Fps, 100.0);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.settings, Settings::default());
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }

    #[test]
    fn test_revert_keeps_theme() {
        let mut app = App::new(Settings::default(), None);
        app.settings.background_top = Rgb(40, 0, 60);
        app.settings.set(Setting::Fps, 100.0);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.settings.tick_rate(), 60);
        assert_eq!(app.settings.background_top, Rgb(40, 0, 60));
    }

    #[test]
    fn test_reference_point_tracks_mouse() {
        let mut app = App::new(Settings::default(), None);
        app.viewport = Viewport::new(ratatui::layout::Rect::new(0, 0, 80, 24));
        assert_eq!(app.reference_point(), Vec2::new(320.0, 192.0));
        app.on_mouse_event(MouseEvent {
            kind: event::MouseEventKind::Moved,
            column: 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.reference_point(), Vec2::new(20.0, 24.0));
    }

    #[test]
    fn test_frame_budget() {
        let app = App::new(Settings::default(), None);
        let budget = app.frame_budget();
        assert!(budget > Duration::from_millis(16) && budget < Duration::from_millis(17));
    }
}

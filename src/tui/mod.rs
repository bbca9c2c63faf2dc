//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the site,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Mapping the Browser onto a Terminal
//!
//! | Browser               | Terminal                                  |
//! |-----------------------|-------------------------------------------|
//! | click a link          | Tab to it, Enter (or click a nav link)    |
//! | back / forward        | Alt+← / Alt+→                             |
//! | hover the carousel    | mouse over its box                        |
//! | swipe the carousel    | drag across it with the left button       |
//! | tab hidden / shown    | terminal focus lost / gained              |
//! | `alert(...)`          | `Notice` overlay                          |
//!
//! ## Redraw Strategy
//!
//! The loop sleeps until the next timer deadline (carousel advance or page
//! activation tick) or an input event, whichever comes first, capped at
//! 500ms. It only redraws when a timer fired or an event arrived.

pub(crate) mod component;
mod components;
mod event;
mod focus;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, advance_clock, update};
use crate::core::form::FieldId;
use crate::core::state::Site;
use crate::tui::components::NavHitbox;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::focus::{FocusRing, Focusable};

/// Horizontal pixels per terminal column, for swipe distances.
pub const CELL_WIDTH_PX: i32 = 8;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core site logic)
pub struct TuiState {
    pub focus: FocusRing,
    /// Open notice overlay (None = hidden)
    pub notice: Option<String>,
    pub scroll_state: ScrollViewState,
    // Hit-test caches, refreshed on every draw
    pub carousel_area: Option<Rect>,
    pub nav_hitboxes: Vec<NavHitbox>,
    pub nav_row: u16,
    /// Height of the page view, for PageUp/PageDown.
    pub page_rows: u16,
    // Gesture tracking
    pointer_in_carousel: bool,
    dragging: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::default(),
            notice: None,
            scroll_state: ScrollViewState::default(),
            carousel_area: None,
            nav_hitboxes: Vec::new(),
            nav_row: 0,
            page_rows: 0,
            pointer_in_carousel: false,
            dragging: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escapes make a bare Esc arrive without the alt-prefix delay.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableFocusChange,
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, focus change, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableFocusChange,
            DisableMouseCapture,
            Show
        );
    }
}

pub fn run(mut site: Site) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut site, &mut tui);

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    site: &mut Site,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let clock = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now_ms = clock.elapsed().as_millis() as u64;
        if advance_clock(site, now_ms) > 0 {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_site(f, site, tui))?;
            needs_redraw = false;
        }

        let timeout = site
            .timers
            .next_deadline()
            .map_or(IDLE_POLL, |ms| Duration::from_millis(ms).min(IDLE_POLL));

        let Some(first_event) = poll_event_timeout(timeout)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain all pending events before next draw
        if dispatch(site, tui, first_event) {
            return Ok(());
        }
        while let Some(event) = poll_event_immediate()? {
            if dispatch(site, tui, event) {
                return Ok(());
            }
        }
    }
}

/// Applies one terminal event. Returns `true` when the site should quit.
fn dispatch(site: &mut Site, tui: &mut TuiState, event: TuiEvent) -> bool {
    // ForceQuit (Ctrl+C) always quits, even over the notice
    if event == TuiEvent::ForceQuit {
        return apply(site, tui, Action::Quit);
    }

    // Notice is modal: only dismissal gets through
    if tui.notice.is_some() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            tui.notice = None;
        }
        return false;
    }

    let typing = tui.focus.current().and_then(Focusable::text_field);

    let quit = match event {
        TuiEvent::ForceQuit | TuiEvent::Resize => false,

        TuiEvent::FocusLost => apply(site, tui, Action::VisibilityChanged { hidden: true }),
        TuiEvent::FocusGained => apply(site, tui, Action::VisibilityChanged { hidden: false }),

        TuiEvent::FocusNext => {
            tui.focus.next(&focus::collect(site));
            false
        }
        TuiEvent::FocusPrev => {
            tui.focus.prev(&focus::collect(site));
            false
        }
        TuiEvent::Escape => {
            if tui.focus.current().is_some() {
                tui.focus.clear();
                false
            } else {
                apply(site, tui, Action::Quit)
            }
        }

        TuiEvent::InputChar(c) => match typing {
            Some(field) => edit_field(site, tui, field, |value| value.push(c)),
            None if c == 'q' => apply(site, tui, Action::Quit),
            None => false,
        },
        TuiEvent::Backspace => match typing {
            Some(field) => edit_field(site, tui, field, |value| {
                value.pop();
            }),
            None => false,
        },
        TuiEvent::Submit => match tui.focus.current().cloned() {
            Some(Focusable::Field(FieldId::Message)) => {
                edit_field(site, tui, FieldId::Message, |value| value.push('\n'))
            }
            Some(Focusable::Field(_)) => {
                tui.focus.next(&focus::collect(site));
                false
            }
            Some(focused) => match focused.activate(site) {
                Some(action) => apply(site, tui, action),
                None => false,
            },
            None => false,
        },

        // Arrow keys edit nothing, so they always reach the carousel
        TuiEvent::Arrow(key) => apply(site, tui, Action::KeyPressed(key)),
        TuiEvent::HistoryBack => apply(site, tui, Action::HistoryBack),
        TuiEvent::HistoryForward => apply(site, tui, Action::HistoryForward),

        TuiEvent::ScrollUp => apply(site, tui, Action::ScrollBy(-1)),
        TuiEvent::ScrollDown => apply(site, tui, Action::ScrollBy(1)),
        TuiEvent::ScrollPageUp => {
            let rows = i32::from(tui.page_rows.max(1));
            apply(site, tui, Action::ScrollBy(-rows))
        }
        TuiEvent::ScrollPageDown => {
            let rows = i32::from(tui.page_rows.max(1));
            apply(site, tui, Action::ScrollBy(rows))
        }
        TuiEvent::ScrollToTop => apply(site, tui, Action::BackToTop),

        TuiEvent::MouseMove(column, row) => {
            let inside = ui::hit(tui.carousel_area, column, row);
            if inside == tui.pointer_in_carousel {
                false
            } else {
                tui.pointer_in_carousel = inside;
                let action = if inside {
                    Action::PointerEntered
                } else {
                    Action::PointerLeft
                };
                apply(site, tui, action)
            }
        }
        TuiEvent::MouseDown(column, row) => {
            if row == tui.nav_row
                && let Some(hitbox) = tui.nav_hitboxes.iter().find(|h| h.contains(column))
            {
                let link = hitbox.link;
                apply(site, tui, Action::ActivateNavLink(link))
            } else if ui::hit(tui.carousel_area, column, row) {
                tui.dragging = true;
                apply(site, tui, Action::TouchStarted(i32::from(column) * CELL_WIDTH_PX))
            } else {
                false
            }
        }
        TuiEvent::MouseUp(column, _row) => {
            if tui.dragging {
                tui.dragging = false;
                apply(site, tui, Action::TouchEnded(i32::from(column) * CELL_WIDTH_PX))
            } else {
                false
            }
        }
    };

    // Elements on a page that just went away can't keep focus
    tui.focus.retain(&focus::collect(site));
    quit
}

fn edit_field(
    site: &mut Site,
    tui: &mut TuiState,
    field: FieldId,
    edit: impl FnOnce(&mut String),
) -> bool {
    let mut value = site.form.field(field).value.clone();
    edit(&mut value);
    apply(site, tui, Action::FormInput { field, value })
}

/// Runs an action through the core and carries out its effect.
fn apply(site: &mut Site, tui: &mut TuiState, action: Action) -> bool {
    match update(site, action) {
        Effect::None => false,
        Effect::Notify(message) => {
            debug!("Notice: {}", message);
            tui.notice = Some(message);
            false
        }
        Effect::Quit => true,
    }
}

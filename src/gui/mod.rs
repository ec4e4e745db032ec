//! # GUI Adapter
//!
//! The eframe/egui-specific layer. Opens the note window, renders the text
//! area and the Close button, and translates input into `core::Action`
//! values. `Effect`s coming back from the reducer are carried out here:
//! writing the save file, moving the window, closing it.
//!
//! This is the only module that knows about egui.
//!
//! ## Frame Order
//!
//! 1. Backspace/Delete with a selection is consumed before the `TextEdit`
//!    sees it, and the selection is removed through the core.
//! 2. The panels draw; text edits and the selection are synced into the core.
//! 3. Pointer input becomes drag (or resize) actions.
//! 4. Any key release while the text area has focus saves the note.

mod event;
pub mod theme;

use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use eframe::egui::{
    self, Align, CursorIcon, Id, LayerId, Layout, Order, Rect, Stroke, ViewportCommand,
    WindowLevel,
    text::{CCursor, CCursorRange, LayoutJob},
    text_edit::TextEditState,
    viewport::ResizeDirection,
};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::error::AppError;
use crate::gui::event::{OriginTracker, PointerIntent, PointerSnapshot, Regions};
use crate::gui::theme::{GRIP_SIZE, OUTER_PADDING, TEXT_BORDER, Theme};

pub const WINDOW_TITLE: &str = "To-Do List";

/// Slot for an error that must end the process after the window closes.
type FatalSlot = Rc<RefCell<Option<io::Error>>>;

/// The note window: owns the core `App` and the per-frame GUI bits.
pub struct NoteWindow {
    app: App,
    theme: Theme,
    text_id: Id,
    origin: OriginTracker,
    fatal: FatalSlot,
}

impl NoteWindow {
    fn new(app: App, theme: Theme, fatal: FatalSlot) -> Self {
        Self {
            app,
            theme,
            text_id: Id::new("note_text"),
            origin: OriginTracker::default(),
            fatal,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Save => {
                if let Err(e) = self.app.save() {
                    error!(
                        "Failed to save note to {}: {}",
                        self.app.save_path.display(),
                        e
                    );
                    *self.fatal.borrow_mut() = Some(e);
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            }
            Effect::CursorMoved(index) => {
                if let Some(mut state) = TextEditState::load(ctx, self.text_id) {
                    state
                        .cursor
                        .set_char_range(Some(CCursorRange::one(CCursor::new(index))));
                    state.store(ctx, self.text_id);
                }
            }
            Effect::MoveWindow(origin) => {
                let origin = event::to_pos2(origin);
                self.origin.moved_to(origin);
                ctx.send_viewport_cmd(ViewportCommand::OuterPosition(origin));
            }
            Effect::Close => {
                info!("Close requested");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        let effect = update(&mut self.app, action);
        self.apply(ctx, effect);
    }

    fn text_has_focus(&self, ctx: &egui::Context) -> bool {
        ctx.memory(|m| m.has_focus(self.text_id))
    }

    /// Backspace/Delete with a selection: remove it through the core and
    /// swallow the key. Without a selection the key goes to the widget.
    fn intercept_selection_delete(&mut self, ctx: &egui::Context) {
        if !self.text_has_focus(ctx) || !ctx.input(event::delete_pressed) {
            return;
        }
        let effect = update(&mut self.app, Action::DeleteSelection);
        if effect == Effect::None {
            return;
        }
        ctx.input_mut(|i| {
            let modifiers = i.modifiers;
            i.consume_key(modifiers, egui::Key::Backspace);
            i.consume_key(modifiers, egui::Key::Delete);
        });
        self.apply(ctx, effect);
    }

    fn show_close_bar(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.theme.window_fill())
            .inner_margin(egui::Margin::same(OUTER_PADDING));
        let mut close = false;
        egui::TopBottomPanel::bottom("close_bar")
            .frame(frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    close = ui.button("Close").clicked();
                });
            });
        if close {
            self.dispatch(ctx, Action::Close);
        }
    }

    /// Draws the text area and returns its rect.
    fn show_note(&mut self, ctx: &egui::Context) -> Rect {
        let panel_frame = egui::Frame::none()
            .fill(self.theme.window_fill())
            .inner_margin(self.theme.outer_margin());
        let text_frame = egui::Frame::none()
            .fill(self.theme.text_fill())
            .stroke(Stroke::new(TEXT_BORDER, self.theme.border_color()));
        let text_color = self.theme.text_color();

        let mut text = self.app.buffer.text().to_owned();
        let mut selection = None;
        let mut changed = false;

        let rect = egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                text_frame
                    .show(ui, |ui| {
                        let viewport = ui.available_size();
                        egui::ScrollArea::both()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                // No wrapping: long lines scroll horizontally.
                                let mut layouter = |ui: &egui::Ui, text: &str, _wrap: f32| {
                                    let font = egui::TextStyle::Monospace.resolve(ui.style());
                                    let job = LayoutJob::simple(
                                        text.to_owned(),
                                        font,
                                        text_color,
                                        f32::INFINITY,
                                    );
                                    ui.fonts(|f| f.layout_job(job))
                                };
                                let output = egui::TextEdit::multiline(&mut text)
                                    .id(self.text_id)
                                    .frame(false)
                                    .desired_width(viewport.x)
                                    .min_size(viewport)
                                    .layouter(&mut layouter)
                                    .show(ui);
                                changed = output.response.changed();
                                selection = output.state.cursor.char_range().map(|r| {
                                    let (a, b) = (r.primary.index, r.secondary.index);
                                    a.min(b)..a.max(b)
                                });
                            });
                    })
                    .response
                    .rect
            })
            .inner;

        if changed {
            self.dispatch(ctx, Action::TextEdited(text));
        }
        self.dispatch(ctx, Action::SelectionChanged(selection));
        rect
    }

    /// Paints the bottom-right resize grip and returns its rect.
    fn show_resize_grip(&self, ctx: &egui::Context) -> Rect {
        let screen = ctx.screen_rect();
        let grip = Rect::from_min_max(screen.max - egui::vec2(GRIP_SIZE, GRIP_SIZE), screen.max);
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("resize_grip")));
        let stroke = Stroke::new(1.0, self.theme.text_color().gamma_multiply(0.6));
        for step in [4.0, 8.0, 12.0] {
            painter.line_segment(
                [
                    egui::pos2(grip.max.x - step, grip.max.y - 1.0),
                    egui::pos2(grip.max.x - 1.0, grip.max.y - step),
                ],
                stroke,
            );
        }
        if ctx.input(|i| i.pointer.hover_pos().is_some_and(|p| grip.contains(p))) {
            ctx.set_cursor_icon(CursorIcon::ResizeSouthEast);
        }
        grip
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, text_area: Rect, resize_grip: Rect) {
        let (pointer, reported_origin) = ctx.input(|i| {
            let viewport = i.viewport();
            let origin = viewport.outer_rect.or(viewport.inner_rect).map(|r| r.min);
            (PointerSnapshot::capture(i), origin)
        });
        let regions = Regions {
            text_area,
            resize_grip,
            window_origin: self.origin.resolve(reported_origin),
        };
        for intent in event::pointer_intents(&pointer, &regions) {
            match intent {
                PointerIntent::Core(action) => {
                    if matches!(action, Action::BeginDrag { .. } | Action::EndDrag) {
                        self.origin.reset();
                    }
                    self.dispatch(ctx, action);
                }
                PointerIntent::Resize => {
                    debug!("Starting native resize");
                    ctx.send_viewport_cmd(ViewportCommand::BeginResize(ResizeDirection::SouthEast));
                }
            }
        }
    }

    fn handle_key_release(&mut self, ctx: &egui::Context) {
        if self.text_has_focus(ctx) && ctx.input(|i| event::key_released(&i.events)) {
            self.dispatch(ctx, Action::KeyReleased);
        }
    }
}

impl eframe::App for NoteWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.intercept_selection_delete(ctx);
        self.show_close_bar(ctx);
        let text_area = self.show_note(ctx);
        let resize_grip = self.show_resize_grip(ctx);
        self.handle_pointer(ctx, text_area, resize_grip);
        if self.app.drag.is_dragging() {
            ctx.set_cursor_icon(CursorIcon::Grabbing);
        }
        self.handle_key_release(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.app.unsaved {
            // Last flush stays authoritative; edits without a key release are dropped.
            warn!("Exiting with edits made since the last key release");
        }
        info!("Note window closed");
    }
}

fn viewport(config: &ResolvedConfig) -> egui::ViewportBuilder {
    let level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };
    egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([config.width, config.height])
        .with_resizable(true)
        .with_decorations(false)
        .with_transparent(true)
        .with_window_level(level)
}

/// Load the note and run the window until it closes.
///
/// Load errors return before any window opens. A failed save closes the
/// window and is returned once the event loop has ended.
pub fn run(config: ResolvedConfig) -> Result<(), AppError> {
    let app = App::load(&config.save_path)?;
    info!(
        "Note window starting ({} chars from {})",
        app.buffer.char_len(),
        app.save_path.display()
    );

    let theme = Theme::from_config(&config);
    let fatal: FatalSlot = Rc::default();
    let window_fatal = Rc::clone(&fatal);

    let options = eframe::NativeOptions {
        viewport: viewport(&config),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let mut visuals = egui::Visuals::dark();
            theme.apply(&mut visuals);
            cc.egui_ctx.set_visuals(visuals);
            Ok(Box::new(NoteWindow::new(app, theme, window_fatal)))
        }),
    )?;

    let save_error = fatal.borrow_mut().take();
    match save_error {
        Some(e) => Err(AppError::Io(e)),
        None => Ok(()),
    }
}

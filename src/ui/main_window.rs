//! Main application window.
//!
//! Renders the reservation form, the add button, the reservations table and the
//! modal notification shown after each add attempt.

use crate::config::{AppConfig, ColumnConfig, ConfigError};
use crate::core::catalog::Catalog;
use crate::core::form::ReservationForm;
use crate::core::reservation::ReservationBook;
use crate::ui::theme::{Palette, LOBBY};
use egui::{Align, Align2, Event, Key, Layout, RichText, TextEdit, Ui};

const ROW_HEIGHT: f32 = 20.0;
const FIELD_WIDTH: f32 = 220.0;
const NATIONAL_ID_FIELD: &str = "national_id_field";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotificationKind {
    Success,
    Warning,
}

/// Blocking message shown until the user dismisses it.
#[derive(Debug, Clone)]
struct Notification {
    kind: NotificationKind,
    title: String,
    text: String,
}

/// Main window state.
pub struct MainWindow {
    config: AppConfig,
    form: ReservationForm,
    book: ReservationBook,
    notification: Option<Notification>,
    palette: Palette,
    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config: AppConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        let mask = config.id_mask()?;
        Ok(Self {
            config,
            form: ReservationForm::new(catalog, mask),
            book: ReservationBook::new(),
            notification: None,
            palette: LOBBY,
            theme_applied: false,
        })
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            self.palette.install(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(RichText::new(&self.config.window_title).color(self.palette.marquee));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        // The add button may open a notification during this frame; only one
        // that was already showing may react to this frame's keys.
        let was_open = self.notification.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!was_open, |ui| {
                self.render_form(ui);
                ui.add_space(10.0);
                self.render_table(ui);
            });
        });

        self.render_notification(ctx, was_open);
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let count = self.book.len();
            let label = if count == 1 {
                "1 reserva registrada".to_string()
            } else {
                format!("{} reservas registradas", count)
            };
            ui.label(label);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(self.palette.muted),
                );
            });
        });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            egui::Grid::new("reservation_form")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Nombre:");
                    self.render_name_field(ui);
                    ui.end_row();

                    ui.label("DUI:");
                    self.render_national_id_field(ui);
                    ui.end_row();

                    ui.label("Categoría:");
                    self.render_category_selector(ui);
                    ui.end_row();

                    ui.label("Película:");
                    self.render_movie_selector(ui);
                    ui.end_row();
                });

            ui.add_space(6.0);

            let add = ui.add_enabled(
                self.form.is_submit_enabled(),
                egui::Button::new("➕ Agregar"),
            );
            if add.clicked() {
                self.add_reservation();
            }
        });
    }

    fn render_name_field(&mut self, ui: &mut Ui) {
        let mut name = self.form.name().to_string();
        let response = ui.add(TextEdit::singleline(&mut name).desired_width(FIELD_WIDTH));
        if response.changed() {
            self.form.set_name(&name);
        }
    }

    fn render_national_id_field(&mut self, ui: &mut Ui) {
        let id = egui::Id::new(NATIONAL_ID_FIELD);
        if ui.is_enabled() && ui.ctx().memory(|m| m.has_focus(id)) {
            self.take_national_id_keys(ui.ctx());
        }

        let previous = self.form.national_id();
        let mut text = previous.clone();
        let response = ui.add(
            TextEdit::singleline(&mut text)
                .id(id)
                .hint_text(self.form.id_mask().as_str())
                .font(egui::TextStyle::Monospace)
                .desired_width(FIELD_WIDTH),
        );
        if !response.changed() {
            return;
        }

        let digits_before = self.form.national_id_digits().len();
        let digits_after = text.chars().filter(char::is_ascii_digit).count();
        let shrank = text.chars().count() < previous.chars().count();

        if shrank && digits_after == digits_before {
            // Erasing a prompt or literal removes the last digit instead.
            self.form.national_id_backspace();
        } else {
            self.form.set_national_id(&text);
        }
    }

    /// Feed typed characters and backspaces to the masked input one at a time.
    ///
    /// Paste, cut and delete stay with the text edit.
    fn take_national_id_keys(&mut self, ctx: &egui::Context) {
        let mut keys: Vec<Option<char>> = Vec::new();
        ctx.input_mut(|i| {
            i.events.retain(|event| match event {
                Event::Text(text) => {
                    keys.extend(text.chars().map(Some));
                    false
                }
                Event::Key {
                    key: Key::Backspace,
                    pressed: true,
                    ..
                } => {
                    keys.push(None);
                    false
                }
                _ => true,
            });
        });

        for key in keys {
            match key {
                Some(c) => {
                    // Non-digits and digits past the last slot are dropped.
                    self.form.type_national_id_char(c);
                }
                None => self.form.national_id_backspace(),
            }
        }
    }

    fn render_category_selector(&mut self, ui: &mut Ui) {
        let categories: Vec<String> = self
            .form
            .catalog()
            .categories()
            .map(str::to_string)
            .collect();
        let current = self.form.category().map(str::to_string);
        let mut picked: Option<Option<String>> = None;

        egui::ComboBox::from_id_salt("category_selector")
            .width(FIELD_WIDTH)
            .selected_text(current.as_deref().unwrap_or("Seleccione una categoría"))
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), "—").clicked() {
                    picked = Some(None);
                }
                for category in &categories {
                    let selected = current.as_deref() == Some(category.as_str());
                    if ui.selectable_label(selected, category).clicked() {
                        picked = Some(Some(category.clone()));
                    }
                }
            });

        if let Some(category) = picked {
            if category != current {
                self.form.select_category(category.as_deref());
            }
        }
    }

    fn render_movie_selector(&mut self, ui: &mut Ui) {
        let movies = self.form.movie_options().to_vec();
        let current = self.form.movie().map(str::to_string);
        let mut picked: Option<Option<String>> = None;

        ui.add_enabled_ui(!movies.is_empty(), |ui| {
            egui::ComboBox::from_id_salt("movie_selector")
                .width(FIELD_WIDTH)
                .selected_text(current.as_deref().unwrap_or("Seleccione una película"))
                .show_ui(ui, |ui| {
                    for movie in &movies {
                        let selected = current.as_deref() == Some(movie.as_str());
                        if ui.selectable_label(selected, movie).clicked() {
                            picked = Some(Some(movie.clone()));
                        }
                    }
                });
        });

        if let Some(movie) = picked {
            self.form.select_movie(movie.as_deref());
        }
    }

    fn render_table(&self, ui: &mut Ui) {
        let columns = &self.config.columns;

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("reservations_table")
                .num_columns(columns.len())
                .striped(true)
                .spacing([4.0, 2.0])
                .show(ui, |ui| {
                    for column in columns {
                        cell(ui, column, RichText::new(&column.header).strong());
                    }
                    ui.end_row();

                    for reservation in self.book.rows() {
                        for (column, value) in columns.iter().zip(reservation.cells()) {
                            cell(ui, column, RichText::new(value));
                        }
                        ui.end_row();
                    }
                });

            if self.book.is_empty() {
                ui.label(RichText::new("Sin reservas.").italics().color(self.palette.muted));
            }
        });
    }

    fn render_notification(&mut self, ctx: &egui::Context, was_open: bool) {
        let Some(notification) = &self.notification else {
            return;
        };

        let color = match notification.kind {
            NotificationKind::Success => self.palette.confirmed,
            NotificationKind::Warning => self.palette.rejected,
        };
        let mut dismissed = false;

        egui::Window::new(notification.title.as_str())
            .id(egui::Id::new("notification"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&notification.text).color(color));
                ui.add_space(8.0);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Aceptar").clicked() {
                        dismissed = true;
                    }
                });
            });

        let enter = was_open && ctx.input(|i| i.key_pressed(Key::Enter));
        if dismissed || enter {
            self.notification = None;
        }
    }

    // Actions

    fn add_reservation(&mut self) {
        let messages = &self.config.messages;
        self.notification = Some(match self.form.submit(&mut self.book) {
            Ok(_) => Notification {
                kind: NotificationKind::Success,
                title: messages.success_title.clone(),
                text: messages.success_text.clone(),
            },
            Err(_) => Notification {
                kind: NotificationKind::Warning,
                title: messages.failure_title.clone(),
                text: messages.failure_text.clone(),
            },
        });
    }
}

/// One fixed-width table cell.
fn cell(ui: &mut Ui, column: &ColumnConfig, text: RichText) {
    ui.allocate_ui_with_layout(
        egui::vec2(column.width, ROW_HEIGHT),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.set_width(column.width);
            ui.add(egui::Label::new(text).truncate());
        },
    );
}

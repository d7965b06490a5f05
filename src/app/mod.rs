use eframe::egui;

use crate::editor::{Editor, Mode};
use crate::model::Pt;

mod render;
mod settings;

use settings::AppSettings;

pub struct GraphPadApp {
    editor: Editor,
    settings: AppSettings,
    settings_path: String,
    status: Option<String>,
}

impl GraphPadApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home)
                .join(".config")
                .join("graphpad.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_settings(&settings_path)
            .or_else(|| settings::load_settings("settings.json"))
            .unwrap_or_default();
        let mut editor = Editor::new();
        editor.set_hit_threshold(settings.hit_threshold);
        Self {
            editor,
            settings,
            settings_path,
            status: None,
        }
    }

    fn persist_settings(&mut self) {
        if let Err(err) = settings::save_settings(&self.settings_path, &self.settings) {
            log::warn!("failed to save settings to {}: {err}", self.settings_path);
            self.status = Some(format!("Failed to save settings: {err}"));
        }
    }

    fn toggle_mode(&mut self) {
        self.editor.toggle_mode();
        let label = match self.editor.mode() {
            Mode::Build => "Build mode: click places points, right-click links them",
            Mode::Edit => "Edit mode: drag points to move them",
        };
        log::info!("{label}");
        self.status = Some(label.to_string());
    }

    fn clear(&mut self) {
        self.editor.clear();
        self.status = Some("Canvas cleared".to_string());
    }

    fn dump_state(&mut self) {
        let dump = self.editor.dump();
        if dump.is_empty() {
            log::info!("graph dump: empty");
        } else {
            log::info!("graph dump:\n{dump}");
        }
        self.status = Some(format!(
            "Dumped {} point(s), {} line(s) to the log",
            self.editor.graph().point_count(),
            self.editor.graph().line_count()
        ));
    }
}

impl eframe::App for GraphPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            if !wants_keyboard {
                if i.consume_key(egui::Modifiers::NONE, egui::Key::Tab) {
                    self.toggle_mode();
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::D) {
                    self.dump_state();
                }
            }
        });

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mode_label = match self.editor.mode() {
                    Mode::Build => "Mode: Build (⇥)",
                    Mode::Edit => "Mode: Edit (⇥)",
                };
                if ui.button(mode_label).clicked() {
                    self.toggle_mode();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui.button("Dump state (D)").clicked() {
                    self.dump_state();
                }
                ui.separator();
                match self.editor.mode() {
                    Mode::Build => {
                        ui.label("Left-click: add point · Right-click two points: link");
                    }
                    Mode::Edit => {
                        ui.label("Drag a point to move it");
                    }
                }
            });
        });

        egui::SidePanel::right("properties")
            .resizable(true)
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.heading("Properties");
                ui.separator();
                if ui
                    .add(
                        egui::Slider::new(&mut self.settings.point_radius, 2.0..=16.0)
                            .text("Point radius"),
                    )
                    .changed()
                {
                    self.persist_settings();
                }
                if ui
                    .add(
                        egui::Slider::new(&mut self.settings.hit_threshold, 2.0..=32.0)
                            .text("Hit radius"),
                    )
                    .changed()
                {
                    self.editor.set_hit_threshold(self.settings.hit_threshold);
                    self.persist_settings();
                }
                if ui
                    .add(
                        egui::Slider::new(&mut self.settings.stroke_width, 0.5..=8.0)
                            .text("Line width"),
                    )
                    .changed()
                {
                    self.persist_settings();
                }
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.status {
                    ui.label(status);
                } else {
                    ui.label("Ready");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(match self.editor.mode() {
                        Mode::Build => "Build",
                        Mode::Edit => "Edit",
                    });
                    ui.separator();
                    ui.label(format!("Lines: {}", self.editor.graph().line_count()));
                    ui.separator();
                    ui.label(format!("Points: {}", self.editor.graph().point_count()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            let origin = rect.min;

            let pointer_pos = ctx.input(|i| i.pointer.interact_pos());
            let pointer_canvas = pointer_pos
                .filter(|p| rect.contains(*p))
                .map(|p| Pt::from_pos2(p - origin.to_vec2()));

            if response.secondary_clicked() {
                if let Some(pos) = pointer_canvas {
                    self.editor.secondary_down(pos);
                }
            }

            // A plain click reports press and release in the same frame, so
            // it both enters and leaves the drag gesture here.
            let pressed =
                response.drag_started_by(egui::PointerButton::Primary) || response.clicked();
            if pressed {
                if let Some(pos) = pointer_canvas {
                    self.editor.primary_down(pos);
                }
            }
            if response.dragged_by(egui::PointerButton::Primary) {
                if let Some(pos) = pointer_canvas {
                    self.editor.pointer_moved(pos);
                }
            }
            if response.drag_stopped_by(egui::PointerButton::Primary) || response.clicked() {
                self.editor.primary_up();
            }

            let painter = ui.painter_at(rect);
            render::draw_background(&painter, rect);
            render::draw_graph(&painter, origin, self.editor.graph(), &self.settings);
        });
    }
}

// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Context, Ui};
use parking_lot::RwLock;

use crate::editor::{Editor, Mode};
use crate::plan::ObjectTemplate;

/// Manages the left-side panel: tool modes, the wall undo affordance, the
/// template form and inventory, object actions, and saved configurations.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
    name_input: String,
    width_input: String,
    height_input: String,
    config_input: String,
}

impl SidePanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            name_input: String::new(),
            width_input: String::new(),
            height_input: String::new(),
            config_input: String::new(),
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::SidePanel::left("side_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.show_modes(ui);
                ui.separator();
                self.show_walls(ui);
                ui.separator();
                self.show_catalog(ui);
                ui.separator();
                self.show_object_actions(ui);
                ui.separator();
                self.show_configurations(ui);
                ui.separator();
                self.show_resets(ui);
            });
    }

    fn show_modes(&self, ui: &mut Ui) {
        ui.heading("Mode");
        let current = self.editor.read().mode();
        for mode in Mode::all() {
            if ui.selectable_label(current == *mode, mode.name()).clicked() {
                self.editor.write().set_mode(*mode);
            }
        }
    }

    fn show_walls(&self, ui: &mut Ui) {
        ui.heading("Walls");
        let has_walls = {
            let editor = self.editor.read();
            let store = editor.store();
            let has = store.read().has_walls();
            has
        };
        // The affordance only exists while there is something to undo.
        if has_walls {
            if ui.button("Undo last wall").clicked() {
                self.editor.write().undo_last_wall();
            }
        } else {
            ui.label("Drag on the canvas to draw a wall.");
        }
    }

    fn show_catalog(&mut self, ui: &mut Ui) {
        ui.heading("Catalog");
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.name_input);
        });
        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.text_edit_singleline(&mut self.width_input);
        });
        ui.horizontal(|ui| {
            ui.label("Height:");
            ui.text_edit_singleline(&mut self.height_input);
        });
        if ui.button("Add to catalog").clicked() {
            self.submit_template();
        }

        let templates: Vec<ObjectTemplate> = {
            let editor = self.editor.read();
            let store = editor.store();
            let templates = store.read().templates().cloned().collect();
            templates
        };
        for template in templates {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} ({}x{})",
                    template.name, template.width, template.height
                ));
                if ui.button("add").clicked() {
                    self.editor.write().place_object(&template.name);
                }
            });
        }
    }

    /// Form input parsing is this panel's job; the editor only sees
    /// well-formed submissions.
    fn submit_template(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.editor.write().error_message = Some("Must enter a name".to_string());
            return;
        }
        let Ok(width) = self.width_input.trim().parse::<i32>() else {
            self.editor.write().error_message = Some("Must enter an integer width".to_string());
            return;
        };
        let Ok(height) = self.height_input.trim().parse::<i32>() else {
            self.editor.write().error_message = Some("Must enter an integer height".to_string());
            return;
        };

        let mut editor = self.editor.write();
        editor.add_template(&name, width, height);
        if editor.error_message.is_none() {
            drop(editor);
            self.name_input.clear();
            self.width_input.clear();
            self.height_input.clear();
        }
    }

    fn show_object_actions(&self, ui: &mut Ui) {
        ui.heading("Objects");
        let selected_name = {
            let editor = self.editor.read();
            let store = editor.store();
            let name = {
                let store = store.read();
                store
                    .selected()
                    .and_then(|id| store.placed_object(id))
                    .map(|object| object.name.clone())
            };
            name
        };
        match &selected_name {
            Some(name) => {
                ui.label(format!("Selected: {}", name));
            }
            None => {
                ui.label("Click an object on the canvas to select it.");
            }
        }
        ui.horizontal(|ui| {
            if ui.button("Rotate").clicked() {
                self.editor.write().rotate_selected();
            }
            if ui.button("Delete").clicked() {
                self.editor.write().delete_selected();
            }
        });
    }

    fn show_configurations(&mut self, ui: &mut Ui) {
        ui.heading("Configurations");
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.config_input);
        });
        if ui.button("Save current layout").clicked() {
            let name = self.config_input.trim().to_string();
            if name.is_empty() {
                self.editor.write().error_message = Some("Must enter a name".to_string());
            } else {
                self.editor.write().save_configuration(&name);
                self.config_input.clear();
            }
        }

        let names = {
            let editor = self.editor.read();
            let store = editor.store();
            let names = store.read().configuration_names();
            names
        };
        for name in names {
            ui.horizontal(|ui| {
                ui.label(&name);
                if ui.button("load").clicked() {
                    self.editor.write().load_configuration(&name);
                }
                if ui.button("delete").clicked() {
                    self.editor.write().delete_configuration(&name);
                }
            });
        }
    }

    fn show_resets(&self, ui: &mut Ui) {
        ui.heading("Reset");
        let store = self.editor.read().store();
        if ui.button("Clear walls").clicked() {
            store.write().reset_walls();
        }
        if ui.button("Clear objects").clicked() {
            store.write().reset_placed_objects();
        }
        if ui.button("Clear catalog").clicked() {
            store.write().reset_templates();
        }
        if ui.button("Clear configurations").clicked() {
            store.write().reset_configurations();
        }
    }
}

// src/gui/components/export_bar.rs

use eframe::egui::{ self, Checkbox };
use tracing::{ debug, info };

use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        // --- Format ---
        let prev_fmt = export.format;
        ui.label("Format:");
        for fmt in ExportFormat::ALL {
            ui.selectable_value(&mut export.format, fmt, fmt.label());
        }
        if export.format != prev_fmt {
            info!(format = ?export.format, "UI: Export format");
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        // Headers only mean something for the tabular formats.
        let tabular = export.format.delim().is_some();
        ui.add_enabled(tabular, Checkbox::new(&mut export.include_headers, "Include headers"));

        ui.separator();

        // --- Output field ---
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!(text = %app.out_path_text, "UI: out_path_text changed (dirty=true)");
        }

        let can_export = !app.running && app.board.is_some();
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}

// src/gui/components/action_buttons.rs
//
// Refresh / auto-refresh / status line.

use eframe::egui::{ self, widgets::Spinner };
use tracing::info;

use crate::{ config::consts::AUTO_REFRESH_SECS, gui::{ actions, app::App } };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 80);
        let refresh = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("REFRESH").color(egui::Color32::BLACK).strong())
                .fill(green),
        );
        if refresh.clicked() {
            let ctx = ui.ctx().clone();
            actions::refresh(app, &ctx);
        }

        let label = format!("Auto-refresh every {} min", AUTO_REFRESH_SECS / 60);
        if ui.checkbox(&mut app.state.gui.auto_refresh, label).changed() {
            info!(enabled = app.state.gui.auto_refresh, "UI: Auto-refresh");
        }

        ui.separator();

        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(format!("Status: {}", app.status_text()));
    });
}

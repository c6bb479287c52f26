// src/gui/components/board_view.rs
//
// The output region: loading indicator, or one collapsible section per syndicate.
// Clicking a heading flips its SectionState; nothing is re-fetched.

use eframe::egui::{ self, Color32, CursorIcon, RichText, Sense };

use crate::{
    board::{ PriceCard, SyndicateSection, Tier },
    config::{ consts::{ CARD_WIDTH, FALLBACK_IMAGE, ICON_SIZE }, state::GuiState },
    gui::app::App,
};

fn tier_color(tier: Tier) -> Color32 {
    match tier {
        Tier::High => Color32::from_rgb(111, 220, 111),
        Tier::Mid => Color32::from_rgb(229, 195, 91),
        Tier::Low => Color32::from_rgb(154, 154, 163),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(board) = app.board.as_ref() else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading prices...");
        });
        return;
    };

    let gui = &mut app.state.gui;
    egui::ScrollArea::vertical()
        .id_salt("board_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for section in &board.sections {
                draw_section(ui, gui, section);
                ui.add_space(8.0);
            }
        });
}

fn draw_section(ui: &mut egui::Ui, gui: &mut GuiState, section: &SyndicateSection) {
    let state = gui.section(&section.name);
    let title = RichText::new(format!("{} {}", section.name, state.arrow())).heading();
    let header = ui
        .add(egui::Label::new(title).sense(Sense::click()))
        .on_hover_cursor(CursorIcon::PointingHand);
    if header.clicked() {
        gui.toggle_section(&section.name);
    }
    ui.separator();

    let expanded = gui.section(&section.name).is_expanded();
    let openness = ui.ctx().animate_bool(ui.id().with(&section.name), expanded);
    if openness <= 0.0 {
        return;
    }

    ui.scope(|ui| {
        ui.set_opacity(openness);
        ui.horizontal_wrapped(|ui| {
            for card in &section.cards {
                draw_card(ui, card);
            }
        });
    });
}

fn draw_card(ui: &mut egui::Ui, card: &PriceCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            let image = if card.info.image() == FALLBACK_IMAGE {
                egui::Image::new(egui::include_image!("../../../assets/fallback.png"))
            } else {
                egui::Image::new(card.info.image())
            };
            ui.add(image.fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)));
            ui.label(RichText::new(card.info.name()).strong());
            ui.label(RichText::new(format!("Prices: {}", card.prices_label())).color(tier_color(card.tier)));
            ui.label(format!("Avg: {}", card.avg_label()));
        });
    });
}

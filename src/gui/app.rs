use std::{
    sync::{ mpsc::Receiver, Arc, Mutex },
    time::{ Duration, Instant },
};

use eframe::egui;
use tracing::info;

use crate::{
    board::PriceBoard,
    config::{ Catalog, consts::AUTO_REFRESH_SECS, state::AppState },
};

use super::{ actions, components };

/// Outcome of one background render pass.
pub type PassResult = Result<PriceBoard, String>;

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        "Arcane Prices",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default(), Catalog::builtin(), &cc.egui_ctx)))
        }),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub catalog: Catalog,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // the output region; None while a pass is loading
    pub board: Option<PriceBoard>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<PassResult>>,
    pub last_refresh: Option<Instant>,
}

impl App {
    pub fn new(state: AppState, catalog: Catalog, ctx: &egui::Context) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        info!(groups = catalog.groups().len(), items = catalog.item_count(), "Init");

        let mut app = Self {
            state,
            catalog,
            out_path_text,
            out_path_dirty: false,
            board: None,
            status: Arc::new(Mutex::new("Idle".to_string())),
            running: false,
            pending: None,
            last_refresh: None,
        };

        // first render pass on open
        actions::refresh(&mut app, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Time left until the next automatic pass, if one is due at all.
    fn auto_refresh_wait(&self) -> Option<Duration> {
        if !self.state.gui.auto_refresh || self.running {
            return None;
        }
        let period = Duration::from_secs(AUTO_REFRESH_SECS);
        Some(self.last_refresh.map_or(Duration::ZERO, |t| period.saturating_sub(t.elapsed())))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        match self.auto_refresh_wait() {
            Some(wait) if wait.is_zero() => actions::refresh(self, ctx),
            Some(wait) => ctx.request_repaint_after(wait),
            None => {}
        }

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::board_view::draw(ui, self);
        });

        if self.running {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

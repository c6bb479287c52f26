use std::{
    sync::{ mpsc::{ self, TryRecvError }, Arc, Mutex },
    thread,
    time::Instant,
};

use eframe::egui;
use tracing::{ error, info };

use crate::{
    board::{ self, PriceBoard },
    config::{ Catalog, options::NetOptions },
    gui::{ app::{ App, PassResult }, progress::GuiProgress },
    market::WarframeMarket,
};

/// Start a render pass on a worker thread. The output region is cleared
/// (loading indicator) until the whole board arrives.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    info!(groups = app.catalog.groups().len(), proxy = ?app.state.options.net.proxy, "Refresh: Begin");

    app.board = None;
    app.state.gui.reset_sections();
    app.running = true;
    app.last_refresh = Some(Instant::now());
    app.status("Loading prices...");

    let (tx, rx) = mpsc::channel::<PassResult>();
    app.pending = Some(rx);

    let net = app.state.options.net.clone();
    let catalog = app.catalog.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let _ = tx.send(run_pass(&net, &catalog, status));
        ctx.request_repaint();
    });
}

fn run_pass(net: &NetOptions, catalog: &Catalog, status: Arc<Mutex<String>>) -> PassResult {
    let market = WarframeMarket::new(net).map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;

    let mut progress = GuiProgress::new(status);
    Ok(runtime.block_on(board::collect_board(&market, catalog, Some(&mut progress))))
}

/// Pick up a finished pass, if any. Called every frame.
pub fn poll(app: &mut App) {
    let received = match app.pending.as_ref().map(|rx| rx.try_recv()) {
        None | Some(Err(TryRecvError::Empty)) => return,
        Some(Ok(result)) => result,
        Some(Err(TryRecvError::Disconnected)) => Err("render worker stopped".to_string()),
    };

    app.pending = None;
    app.running = false;

    match received {
        Ok(board) => {
            info!(sections = board.sections.len(), cards = board.card_count(), "Refresh: OK");
            app.board = Some(board);
        }
        Err(e) => {
            error!(error = %e, "Refresh: failed");
            app.board = Some(PriceBoard::default());
            app.status(format!("Error: {e}"));
        }
    }
}

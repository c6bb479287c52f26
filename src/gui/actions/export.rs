use tracing::{ debug, error, info };

use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!(path = %app.state.options.export.out_path().display(), "Export: Out path set");
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    let Some(board) = app.board.as_ref() else {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    info!(format = ?export.format, cards = board.card_count(), "Export: Begin");

    match file::export_board(export, board) {
        Ok(paths) => {
            if let Some(first) = paths.first() {
                info!(count = paths.len(), path = %first.display(), "Export: OK");
                app.status(format!("Exported {} file(s). Page: {}", paths.len(), first.display()));
            }
        }
        Err(e) => {
            error!(error = %e, "Export: Error");
            app.status(format!("Export error: {e}"));
        }
    }
}

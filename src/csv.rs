// src/csv.rs
use std::io::{self, Write};

use crate::board::PriceBoard;
use crate::config::consts::PRICE_WINDOW;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Board → table ---------------- */

pub fn board_headers() -> Vec<String> {
    let mut h = vec!["Syndicate".to_string(), "Arcane".to_string(), "Tier".to_string()];
    h.extend((1..=PRICE_WINDOW).map(|i| format!("Price {i}")));
    h.push("Avg".to_string());
    h
}

/// One row per card, sections in board order. Unused price slots stay empty.
pub fn board_rows(board: &PriceBoard) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(board.card_count());
    for section in &board.sections {
        for card in &section.cards {
            let mut row = vec![
                section.name.clone(),
                card.info.name().to_string(),
                card.tier.label().to_string(),
            ];
            let prices = card.info.prices();
            row.extend((0..PRICE_WINDOW).map(|i| prices.get(i).map(u32::to_string).unwrap_or_default()));
            row.push(card.info.avg_price().to_string());
            rows.push(row);
        }
    }
    rows
}

/// Full export string for the board.
pub fn to_export_string(board: &PriceBoard, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &board_headers(), sep);
    }
    for r in board_rows(board) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::build_section;
    use crate::price::ArcaneInfo;

    fn board() -> PriceBoard {
        let info = |id: &str, prices: &[u32]| ArcaneInfo::new(id, prices.to_vec(), "images/fallback.png".into());
        PriceBoard {
            sections: vec![
                build_section("Cephalon Simaris", vec![
                    info("health_conversion", &[5, 5]),
                    info("energy_conversion", &[10, 12, 15, 20]),
                ]),
                build_section("The Hex", vec![None]),
            ],
        }
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b".to_string(), "say \"hi\"".to_string(), "plain".to_string()], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",\"say \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn csv_export_matches_board_order() {
        let s = to_export_string(&board(), true, ',');
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines, [
            "Syndicate,Arcane,Tier,Price 1,Price 2,Price 3,Price 4,Avg",
            "Cephalon Simaris,Energy Conversion,high,10,12,15,20,14",
            "Cephalon Simaris,Health Conversion,low,5,5,,,5",
        ]);
    }

    #[test]
    fn tsv_without_headers() {
        let s = to_export_string(&board(), false, '\t');
        assert!(s.starts_with("Cephalon Simaris\tEnergy Conversion\thigh\t10\t12\t15\t20\t14\n"));
        assert_eq!(s.lines().count(), 2);
    }
}

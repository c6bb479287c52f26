// /src/html.rs
// HTML rendering of the price board.
// The page owns a single `<div id="output">` region; a render pass writes the
// loading page first and then replaces it with the finished board.

use std::fmt::Write;

use crate::board::{ PriceBoard, PriceCard, SyndicateSection };
use crate::core::sanitize::{ escape_html, sanitize_file_stem };

const TITLE: &str = "Syndicate Arcane Prices";

const STYLE: &str = r#"
body { background: #15161a; color: #e4e4e8; font-family: sans-serif; margin: 2em; }
.syndicate-group h2 { cursor: pointer; user-select: none; border-bottom: 1px solid #333; }
.collapse-arrow { display: inline-block; transition: transform 0.2s; }
h2.collapsed .collapse-arrow { transform: rotate(-90deg); }
.arcane-list { display: flex; flex-wrap: wrap; gap: 12px; overflow: hidden;
               transition: max-height 0.3s ease, opacity 0.3s ease; }
.arcane-card { background: #202128; border-radius: 6px; padding: 10px; width: 180px; }
.arcane-card img { width: 64px; height: 64px; }
.price-high { color: #6fdc6f; }
.price-mid { color: #e5c35b; }
.price-low { color: #9a9aa3; }
.avg-price { opacity: 0.8; }
"#;

// Toggle per heading; visibility only, nothing is re-fetched.
const SCRIPT: &str = r#"
document.querySelectorAll('.syndicate-group h2').forEach(function (title) {
  var list = title.nextElementSibling;
  list.style.maxHeight = list.scrollHeight + 'px';
  title.onclick = function () {
    title.classList.toggle('collapsed');
    if (title.classList.contains('collapsed')) {
      list.style.maxHeight = '0';
      list.style.opacity = '0';
    } else {
      list.style.maxHeight = list.scrollHeight + 'px';
      list.style.opacity = '1';
    }
  };
});
"#;

fn page(output: &str, script: bool) -> String {
    let mut doc = String::with_capacity(output.len() + 2048);
    let _ = write!(
        doc,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{TITLE}</h1>\n<div id=\"output\">{output}</div>\n"
    );
    if script {
        let _ = write!(doc, "<script>{SCRIPT}</script>\n");
    }
    doc.push_str("</body>\n</html>\n");
    doc
}

/// Placeholder shown while a pass is in flight.
pub fn render_loading() -> String {
    page("Loading prices...", false)
}

pub fn render_board(board: &PriceBoard) -> String {
    let mut out = String::from("<div>\n");
    for section in &board.sections {
        render_section(&mut out, section);
    }
    out.push_str("</div>");
    page(&out, true)
}

fn render_section(out: &mut String, section: &SyndicateSection) {
    let _ = writeln!(
        out,
        "<div class=\"syndicate-group\" id=\"{}\">\n<h2>{} <span class=\"collapse-arrow\">▼</span></h2>\n<div class=\"arcane-list\">",
        escape_html(&sanitize_file_stem(&section.name)),
        escape_html(&section.name),
    );
    for card in &section.cards {
        render_card(out, card);
    }
    out.push_str("</div>\n</div>\n");
}

fn render_card(out: &mut String, card: &PriceCard) {
    let name = escape_html(card.info.name());
    let _ = writeln!(
        out,
        "<div class=\"arcane-card\">\n  <img src=\"{}\" alt=\"{name}\">\n  <div><strong>{name}</strong></div>\n  <div class=\"price {}\">Prices: {}</div>\n  <div class=\"avg-price\">Avg: {}</div>\n</div>",
        escape_html(card.info.image()),
        card.tier.css_class(),
        escape_html(&card.prices_label()),
        escape_html(&card.avg_label()),
    );
}

// src/cli.rs
use std::path::PathBuf;

use clap::{ Parser, ValueEnum };
use color_eyre::eyre::{ eyre, WrapErr };
use tracing::info;

use crate::{
    board::{ self, PriceBoard },
    config::{ Catalog, options::{ AppOptions, ExportFormat } },
    file,
    market::WarframeMarket,
    progress::Progress,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
    Csv,
    Tsv,
}

/// Fetch syndicate arcane prices from warframe.market and print or export the board.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Output file (html/csv/tsv). Extension follows --format; a trailing slash means directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Only these syndicates (repeatable)
    #[arg(short, long = "syndicate", value_name = "NAME")]
    pub syndicates: Vec<String>,

    /// Proxy prefix; the target URL is appended percent-encoded
    #[arg(long, value_name = "URL", conflicts_with = "no_proxy")]
    pub proxy: Option<String>,

    /// Talk to the API directly
    #[arg(long)]
    pub no_proxy: bool,

    /// Omit the header row (csv/tsv)
    #[arg(long)]
    pub no_headers: bool,

    /// Print the catalog and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if self.no_proxy {
            opts.net.proxy = None;
        } else if let Some(p) = &self.proxy {
            opts.net.proxy = Some(p.clone());
        }
        opts.export.format = match self.format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Html | Format::Text => ExportFormat::Html,
        };
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }

    pub fn catalog(&self) -> color_eyre::Result<Catalog> {
        let all = Catalog::builtin();
        if self.syndicates.is_empty() {
            return Ok(all);
        }
        all.only(&self.syndicates).map_err(|name| eyre!("Unknown syndicate: {name}"))
    }
}

/// Status lines on stderr so stdout stays clean for the board.
struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, groups: usize) {
        self.total = groups;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn group_done(&mut self, syndicate: &str, priced: usize, items: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {syndicate}: {priced}/{items} priced", self.done, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let catalog = args.catalog()?;

    if args.list {
        for group in catalog.groups() {
            println!("{}: {}", group.name, group.items.join(", "));
        }
        return Ok(());
    }

    let opts = args.to_options();
    let to_file = args.format != Format::Text;
    if to_file {
        file::write_loading_page(&opts.export)
            .wrap_err_with(|| format!("writing {}", opts.export.out_path().display()))?;
    }

    let board = collect(&opts, &catalog)?;

    if !to_file {
        print!("{board}");
        return Ok(());
    }
    let written = file::export_board(&opts.export, &board)
        .wrap_err_with(|| format!("writing {}", opts.export.out_path().display()))?;
    for path in written {
        info!(path = %path.display(), "wrote");
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn collect(opts: &AppOptions, catalog: &Catalog) -> color_eyre::Result<PriceBoard> {
    let market = WarframeMarket::new(&opts.net).wrap_err("building HTTP client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("starting async runtime")?;

    let mut progress = StderrProgress { done: 0, total: 0 };
    Ok(runtime.block_on(board::collect_board(&market, catalog, Some(&mut progress))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_print_text_through_proxy() {
        let args = Args::try_parse_from(["cli"]).unwrap();
        assert_eq!(args.format, Format::Text);
        let opts = args.to_options();
        assert!(opts.net.proxy.is_some());
        assert!(opts.export.include_headers);
    }

    #[test]
    fn csv_out_and_no_proxy() {
        let args = Args::try_parse_from(["cli", "-f", "csv", "-o", "dump/arcanes.txt", "--no-proxy", "--no-headers"]).unwrap();
        let opts = args.to_options();
        assert_eq!(opts.net.proxy, None);
        assert!(!opts.export.include_headers);
        assert_eq!(opts.export.out_path(), PathBuf::from("dump").join("arcanes.csv"));
    }

    #[test]
    fn syndicate_filter_validates_names() {
        let args = Args::try_parse_from(["cli", "-s", "cavia", "-s", "The Hex"]).unwrap();
        assert_eq!(args.catalog().unwrap().groups().len(), 2);

        let args = Args::try_parse_from(["cli", "-s", "Nobody"]).unwrap();
        assert!(args.catalog().is_err());
    }

    #[test]
    fn proxy_flags_conflict() {
        assert!(Args::try_parse_from(["cli", "--proxy", "https://p/?", "--no-proxy"]).is_err());
    }
}

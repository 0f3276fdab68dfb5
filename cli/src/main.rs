// favscout: discover a page's favicon candidates and report their
// pixel dimensions.
//
// The pipeline is the engine crate's; this binary is the glue: parse
// arguments, fetch the page, scan it for icon links, download each
// candidate and decode just enough of the container to know its size.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use engine::{
    decode_metadata, extract_icon_links, fetch, media_type, resolve_url, FetchConfig,
    DEFAULT_ICON_RELS,
};

/// Discover a web page's favicon candidates and print their dimensions.
#[derive(Debug, Parser)]
#[command(name = "favscout")]
#[command(about = "Find a site's favicons and report their pixel sizes", long_about = None)]
struct Args {
    /// The page URL to fetch icons for.
    #[arg(long)]
    url: String,

    /// Request timeout for the page and each icon, in seconds.
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    /// Link relation to accept (repeatable). Defaults to
    /// "icon", "shortcut icon" and "apple-touch-icon".
    #[arg(long = "rel", value_name = "REL")]
    rels: Vec<String>,
}

/// One successfully decoded icon candidate.
#[derive(Debug)]
struct IconRecord {
    url: String,
    media_type: String,
    width: u32,
    height: u32,
}

fn main() {
    init_logging();

    let args = Args::parse();
    match run(&args) {
        Ok(records) => {
            for record in &records {
                println!(
                    "{} width: {}, height: {}",
                    record.url, record.width, record.height
                );
            }
        }
        Err(err) => {
            eprintln!("favscout error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Vec<IconRecord>> {
    let config = FetchConfig {
        timeout_secs: args.timeout_secs,
        ..FetchConfig::default()
    };

    let page = fetch(&args.url, &config)
        .with_context(|| format!("failed to fetch {}", args.url))?;
    let page_type = media_type(&page.content_type);
    if page_type != "text/html" {
        bail!("unsupported media type: {}", page_type);
    }

    let rels: Vec<&str> = if args.rels.is_empty() {
        DEFAULT_ICON_RELS.to_vec()
    } else {
        args.rels.iter().map(String::as_str).collect()
    };

    let mut hrefs = extract_icon_links(&page.data, &rels);
    if hrefs.is_empty() {
        // No declared icons; try the conventional location.
        hrefs.push("/favicon.ico".to_string());
    }

    // Candidate failures are logged and skipped, never fatal: a page with
    // one broken icon link still gets a report for the rest.
    let mut records = Vec::new();
    for href in &hrefs {
        let icon_url = resolve_url(&page.url, href);

        let resource = match fetch(&icon_url, &config) {
            Ok(resource) => resource,
            Err(err) => {
                warn!(url = %icon_url, error = %err, "failed to download icon");
                continue;
            }
        };

        let icon_type = media_type(&resource.content_type);
        match decode_metadata(resource.data.as_slice(), &icon_type) {
            Ok(dims) => {
                let record = IconRecord {
                    url: resource.url,
                    media_type: icon_type,
                    width: dims.width,
                    height: dims.height,
                };
                debug!(
                    url = %record.url,
                    media_type = %record.media_type,
                    width = record.width,
                    height = record.height,
                    "decoded icon metadata"
                );
                records.push(record);
            }
            Err(err) => {
                warn!(url = %icon_url, error = %err, "skipping icon");
            }
        }
    }

    Ok(records)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

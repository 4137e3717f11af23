use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use thumbgrab::config::AppConfig;
use thumbgrab::downloader::{DownloadOptions, DownloadOutcome, ThumbnailDownloader};
use thumbgrab::extractor::VideoId;
use thumbgrab::resolver::{ThumbnailDescriptor, ThumbnailLabel};
use thumbgrab::session::{NoPacer, Session, SessionState};

/// Grab every thumbnail size for a YouTube video
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Video URL (omit for interactive mode)
    url: Option<String>,

    /// Download one thumbnail by label (Max-Res, HD, SD, High, Medium, Default)
    #[arg(long, value_name = "LABEL", conflicts_with = "all")]
    download: Option<String>,

    /// Download every thumbnail variant
    #[arg(long)]
    all: bool,

    /// Output directory (defaults to the system download folder)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print descriptors as JSON
    #[arg(long)]
    json: bool,

    /// Persist the dark theme preference
    #[arg(long, conflicts_with = "light_mode")]
    dark_mode: bool,

    /// Persist the light theme preference
    #[arg(long)]
    light_mode: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = AppConfig::load();
    if args.dark_mode {
        config.set_dark_mode(true);
    } else if args.light_mode {
        config.set_dark_mode(false);
    }

    let options = DownloadOptions {
        output_dir: args
            .output
            .clone()
            .unwrap_or_else(|| DownloadOptions::default().output_dir),
        timeout_seconds: args.timeout,
    };

    match args.url.clone() {
        Some(url) => run_once(&url, &args, options).await,
        None => run_interactive(options, args.json).await,
    }
}

/// One-shot mode: resolve, print, optionally download, exit.
async fn run_once(url: &str, args: &Args, options: DownloadOptions) -> ExitCode {
    // No pacing in one-shot mode; the delay only exists for interactive feel.
    let mut session = Session::new(Box::new(NoPacer));
    let state = session.submit(url).await.clone();

    let thumbs = match state {
        SessionState::Invalid(msg) => {
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
        SessionState::Success(thumbs) => thumbs,
        _ => return ExitCode::FAILURE,
    };

    print_thumbnails(&thumbs, args.json);

    let Some(id) = session.video_id().cloned() else {
        return ExitCode::FAILURE;
    };

    let selected: Vec<ThumbnailDescriptor> = if args.all {
        thumbs
    } else if let Some(label_str) = &args.download {
        match ThumbnailLabel::parse(label_str) {
            Some(label) => thumbs.into_iter().filter(|t| t.label == label).collect(),
            None => {
                eprintln!(
                    "Unknown label '{}'. Expected one of: Max-Res, HD, SD, High, Medium, Default",
                    label_str
                );
                return ExitCode::FAILURE;
            }
        }
    } else {
        Vec::new()
    };

    let downloader = ThumbnailDownloader::new(options);
    let mut failed = false;
    for thumb in &selected {
        if !report_download(&downloader, &id, thumb).await {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Interactive mode: the original page's submit cycle as a prompt loop.
async fn run_interactive(options: DownloadOptions, json: bool) -> ExitCode {
    let mut session = Session::with_default_pacing();
    let downloader = ThumbnailDownloader::new(options);
    let stdin = io::stdin();

    println!("Paste a YouTube video link (empty line to quit).");
    println!("After a lookup, type 'get <label>' or 'get all' to download.");

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        if let Some(label_str) = input.strip_prefix("get ") {
            handle_get(&session, &downloader, label_str.trim()).await;
            continue;
        }

        match session.submit(input).await.clone() {
            SessionState::Invalid(msg) => println!("{}", msg),
            SessionState::Success(thumbs) => print_thumbnails(&thumbs, json),
            _ => {}
        }
    }

    ExitCode::SUCCESS
}

async fn handle_get(session: &Session, downloader: &ThumbnailDownloader, label_str: &str) {
    let (Some(id), SessionState::Success(thumbs)) = (session.video_id(), session.state()) else {
        println!("Nothing to download yet. Paste a video link first.");
        return;
    };

    if label_str.eq_ignore_ascii_case("all") {
        for thumb in thumbs {
            report_download(downloader, id, thumb).await;
        }
        return;
    }

    let Some(label) = ThumbnailLabel::parse(label_str) else {
        println!(
            "Unknown label '{}'. Expected one of: Max-Res, HD, SD, High, Medium, Default",
            label_str
        );
        return;
    };

    if let Some(thumb) = thumbs.iter().find(|t| t.label == label) {
        report_download(downloader, id, thumb).await;
    }
}

/// Run one download and print the outcome. Returns false on hard failure.
async fn report_download(
    downloader: &ThumbnailDownloader,
    id: &VideoId,
    thumb: &ThumbnailDescriptor,
) -> bool {
    match downloader.download(id, thumb).await {
        Ok(DownloadOutcome::Saved(path)) => {
            println!("Saved -> {}", path.display());
            true
        }
        Ok(DownloadOutcome::OpenedFallback(url)) => {
            println!("Opened in browser -> {}", url);
            true
        }
        Err(e) => {
            eprintln!("Download failed: {}", e);
            false
        }
    }
}

fn print_thumbnails(thumbs: &[ThumbnailDescriptor], json: bool) {
    if json {
        match serde_json::to_string_pretty(thumbs) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("[Cli] Failed to serialize descriptors: {}", e),
        }
        return;
    }
    for thumb in thumbs {
        println!(
            "{:<8} {:>9}  {}",
            thumb.label.as_str(),
            thumb.dimensions,
            thumb.url
        );
    }
}

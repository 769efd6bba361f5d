use clap::{Parser, Subcommand};
use tokio::time::MissedTickBehavior;

use board::color;
use board::point::Point;
use board::render;

mod api;
mod session;
mod term;

use api::{ApiClient, ApiError};
use session::{BoardSession, POLL_INTERVAL};
use term::TermSurface;

#[derive(Parser, Debug)]
#[command(name = "dotboard-cli", about = "Shared dot board API and watch CLI")]
struct Cli {
    /// Server base URL.
    #[arg(long, env = "DOTBOARD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Submit a single point.
    Draw {
        x: f64,
        y: f64,
        /// Point color; a random session color is generated when omitted.
        #[arg(long)]
        color: Option<String>,
    },
    /// Fetch and print the full board as JSON.
    Points,
    /// Clear the board.
    Clear,
    /// Simulate a drag gesture between two positions.
    Scribble {
        /// Start position as `x,y`.
        #[arg(long, value_parser = parse_position)]
        from: (f64, f64),
        /// End position as `x,y`.
        #[arg(long, value_parser = parse_position)]
        to: (f64, f64),
        /// Number of points the gesture produces.
        #[arg(long, default_value_t = 16)]
        steps: usize,
        /// Clear the board before drawing the stroke.
        #[arg(long, default_value_t = false)]
        clear_first: bool,
    },
    /// Watch the board: poll once per second and render to the terminal.
    Watch {
        /// Terminal grid width in cells.
        #[arg(long, default_value_t = 80)]
        cols: usize,
        /// Terminal grid height in cells.
        #[arg(long, default_value_t = 24)]
        rows: usize,
    },
}

fn parse_position(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{raw}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url);

    match cli.command {
        Command::Ping => {
            api.healthz().await?;
            println!("ok");
            Ok(())
        }
        Command::Draw { x, y, color } => {
            let color = color.unwrap_or_else(color::random_user_color);
            api.add_point(&Point::new(x, y, color)).await?;
            Ok(())
        }
        Command::Points => {
            let points = api.fetch_points().await?;
            let rendered = serde_json::to_string_pretty(&points)?;
            println!("{rendered}");
            Ok(())
        }
        Command::Clear => {
            api.clear().await?;
            println!("cleared");
            Ok(())
        }
        Command::Scribble { from, to, steps, clear_first } => {
            run_scribble(api, from, to, steps, clear_first).await
        }
        Command::Watch { cols, rows } => run_watch(api, cols, rows).await,
    }
}

async fn run_scribble(
    api: ApiClient,
    from: (f64, f64),
    to: (f64, f64),
    steps: usize,
    clear_first: bool,
) -> Result<(), ApiError> {
    let mut session = BoardSession::new(api);
    if clear_first {
        session.clear_all().await;
    }
    let submitted = session.drag_stroke(from, to, steps).await;
    eprintln!(
        "scribble complete: color={} drawn={} submitted={}",
        session.client().user_color(),
        session.client().len(),
        submitted
    );
    Ok(())
}

async fn run_watch(api: ApiClient, cols: usize, rows: usize) -> Result<(), ApiError> {
    let mut session = BoardSession::new(api);
    let mut surface = TermSurface::new(cols, rows);

    session.initialize().await;
    render_frame(&session, &mut surface);

    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; the initial fetch
    // already happened, so consume it.
    ticker.tick().await;

    // Runs until the process exits; nothing in the session stops the poll.
    loop {
        ticker.tick().await;
        session.refresh_points().await;
        render_frame(&session, &mut surface);
    }
}

fn render_frame(session: &BoardSession, surface: &mut TermSurface) {
    render::draw(session.client(), surface);
    // Clear the terminal and repaint the whole grid.
    print!("\x1b[2J\x1b[H{}", surface.frame());
    println!("points: {}", session.client().len());
}

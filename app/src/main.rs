use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod report;
mod state;
mod web;

use caddie::{Distance, GeoPoint, ShotContext, UnitSystem, Velocity, generate_bag};
use state::AppState;

const DEFAULT_BIND: &str = "127.0.0.1:3030";

#[derive(Parser, Debug, Clone)]
#[command(name = "caddie", about = "Golf shot planner and strategy engine")]
struct Cli {
    /// Config file path (default: ~/.config/caddie/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display units, overriding the config file
    #[arg(long, value_enum)]
    units: Option<UnitSystem>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Serve the JSON API (default)
    Serve {
        /// Listen address (default: first [webserver] entry in config)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Show the configured bag, or generate one from a handicap
    Bag {
        #[arg(long)]
        handicap: Option<f64>,
        /// Write the generated bag to the config file
        #[arg(long, requires = "handicap")]
        save: bool,
    },
    /// Plan the next shot between two points or from a configured tee
    Plan {
        /// Current position, "lat,lon"
        #[arg(long, allow_hyphen_values = true, requires = "to")]
        from: Option<GeoPoint>,
        /// Target, "lat,lon"
        #[arg(long, allow_hyphen_values = true, requires = "from")]
        to: Option<GeoPoint>,
        /// Course id from the config file
        #[arg(long, requires = "hole", conflicts_with = "from")]
        course: Option<String>,
        #[arg(long, requires = "course")]
        hole: Option<u8>,
        #[arg(long, default_value_t = 1)]
        shot: u32,
        /// Wind speed with unit, e.g. "5mps" or "12mph" (default: config wind)
        #[arg(long)]
        wind: Option<Velocity>,
        /// Compass bearing the wind blows toward (default: config wind)
        #[arg(long)]
        wind_dir: Option<f64>,
    },
    /// Club, layup, and strategy advice for a distance to the green
    Advise {
        /// Distance with unit, e.g. "150m" or "165yd"
        distance: Distance,
        #[arg(long, default_value_t = 1)]
        shot: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("caddie=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(state::config::default_config_path);
    let state = Arc::new(AppState::new(config_path));
    let units = cli
        .units
        .unwrap_or_else(|| state.system.read(|c| c.default_units));

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let addr = match bind {
                Some(addr) => addr,
                None => configured_bind(&state)?,
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(web::run(addr, state))?;
        }
        Command::Bag { handicap, save } => {
            let bag = match handicap {
                Some(h) => {
                    let bag = generate_bag(h);
                    if save {
                        tracing::info!(
                            "saving bag for handicap {h} to {}",
                            state.system.path().display()
                        );
                        let saved = bag.clone();
                        state.system.update(|c| {
                            c.handicap = Some(h);
                            c.bag = saved;
                        });
                    }
                    bag
                }
                None => state.system.read(|c| c.bag.clone()),
            };
            print!("{}", report::bag_table(&bag, units));
        }
        Command::Plan {
            from,
            to,
            course,
            hole,
            shot,
            wind,
            wind_dir,
        } => {
            let config = state.system.snapshot();
            let (position, target) = match (from, to, course, hole) {
                (Some(from), Some(to), _, _) => (from, to),
                (_, _, Some(course_id), Some(number)) => {
                    let course = config
                        .course
                        .get(&course_id)
                        .ok_or_else(|| anyhow::anyhow!("no course '{course_id}' in config"))?;
                    let hole = course.hole(number).ok_or_else(|| {
                        anyhow::anyhow!("course '{course_id}' has no hole {number}")
                    })?;
                    (hole.tee, hole.green)
                }
                _ => anyhow::bail!("give either --from/--to or --course/--hole"),
            };
            let ctx = ShotContext {
                position,
                target,
                wind: config.wind.with_overrides(wind, wind_dir).to_vector(),
                shot_number: shot,
            };
            let plan = caddie::plan_shot(&ctx, &config.bag);
            print!("{}", report::shot_plan(&plan, units));
        }
        Command::Advise { distance, shot } => {
            let bag = state.system.read(|c| c.bag.clone());
            print!("{}", report::advice(distance.as_meters(), shot, &bag, units));
        }
    }

    Ok(())
}

/// First `[webserver.<id>]` bind address by id, or the built-in default.
fn configured_bind(state: &AppState) -> anyhow::Result<SocketAddr> {
    let bind = state.system.read(|c| {
        let mut servers: Vec<_> = c.webserver.iter().collect();
        servers.sort_by(|a, b| a.0.cmp(b.0));
        servers.first().map(|(_, w)| w.bind.clone())
    });
    let bind = bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
    bind.parse()
        .map_err(|e| anyhow::anyhow!("invalid webserver bind address {bind:?}: {e}"))
}

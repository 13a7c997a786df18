use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroute_lib::{
    plan_route, write_route_map, AirportNetwork, NetworkSpec, RoutePlan, RouteRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight route planner")]
struct Cli {
    /// Load the airport network from a JSON spec instead of the built-in one.
    #[arg(long)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the known airport codes.
    Airports,
    /// Compute a route between two airport codes.
    Route {
        /// Starting airport code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code.
        #[arg(long = "to")]
        to: String,
        /// Write an interactive route map to this HTML file.
        #[arg(long)]
        map: Option<PathBuf>,
        /// Print the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Airports => handle_airports(cli.network.as_deref()),
        Command::Route {
            from,
            to,
            map,
            json,
        } => handle_route(cli.network.as_deref(), &from, &to, map.as_deref(), json),
    }
}

fn handle_airports(network_path: Option<&Path>) -> Result<()> {
    let network = load_network(network_path)?;
    for code in network.airport_codes() {
        let id = network
            .airport_id_by_code(code)
            .context("airport code resolves to an id")?;
        let position = network
            .position(id)
            .context("airport id has a position")?;
        println!("{} ({:.2}, {:.2})", code, position.lat_deg, position.lon_deg);
    }
    Ok(())
}

fn handle_route(
    network_path: Option<&Path>,
    from: &str,
    to: &str,
    map: Option<&Path>,
    json: bool,
) -> Result<()> {
    let network = load_network(network_path)?;
    let request = RouteRequest::new(from, to);
    let plan = plan_route(&network, &request)?;

    if json {
        let report = RouteReport::new(&network, &plan);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_plan(&network, &plan);
    }

    if let Some(map_path) = map {
        write_route_map(&network, &plan, &request.weights, map_path)
            .with_context(|| format!("failed to write route map to {}", map_path.display()))?;
        println!("Route map written to {}", map_path.display());
    }

    Ok(())
}

fn print_plan(network: &AirportNetwork, plan: &RoutePlan) {
    let steps: Vec<&str> = plan
        .steps
        .iter()
        .map(|&id| network.airport_code(id).unwrap_or("<unknown>"))
        .collect();
    println!("Route: {}", steps.join(" ➜ "));

    for leg in &plan.legs {
        println!(
            "  {} ➜ {}  {:.0} km  ₹{}",
            network.airport_code(leg.from).unwrap_or("<unknown>"),
            network.airport_code(leg.to).unwrap_or("<unknown>"),
            leg.distance_km,
            leg.cost as i64,
        );
    }

    println!("Estimated cost: ₹{}", plan.estimated_total as i64);
}

fn load_network(network_path: Option<&Path>) -> Result<AirportNetwork> {
    match network_path {
        Some(path) => AirportNetwork::from_json_file(path)
            .with_context(|| format!("failed to load network spec from {}", path.display())),
        None => AirportNetwork::from_spec(&NetworkSpec::sample())
            .context("failed to build the built-in network"),
    }
}

/// Serializable route summary with codes resolved for display.
#[derive(Debug, Serialize)]
struct RouteReport {
    start: String,
    goal: String,
    steps: Vec<String>,
    legs: Vec<LegReport>,
    total_cost: f64,
    estimated_total: f64,
}

#[derive(Debug, Serialize)]
struct LegReport {
    from: String,
    to: String,
    distance_km: f64,
    cost: f64,
}

impl RouteReport {
    fn new(network: &AirportNetwork, plan: &RoutePlan) -> Self {
        let code = |id| {
            network
                .airport_code(id)
                .unwrap_or("<unknown>")
                .to_string()
        };
        Self {
            start: code(plan.start),
            goal: code(plan.goal),
            steps: plan.steps.iter().map(|&id| code(id)).collect(),
            legs: plan
                .legs
                .iter()
                .map(|leg| LegReport {
                    from: code(leg.from),
                    to: code(leg.to),
                    distance_km: leg.distance_km,
                    cost: leg.cost,
                })
                .collect(),
            total_cost: plan.total_cost,
            estimated_total: plan.estimated_total,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

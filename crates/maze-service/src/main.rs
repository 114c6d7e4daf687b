// maze-server: HTTP server and one-shot solver.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use maze_service::{ConfigArgs, SolveQuery, SolveResponse, Solver};

/// CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "MAZE_PORT", default_value_t = 5000)]
        port: u16,
    },

    /// Solve one maze and print the response JSON
    Solve {
        /// bfs, dfs, dijkstra or a*
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,

        /// small, medium or large
        #[arg(short, long, default_value = "small")]
        size: String,

        /// scatter, carved, weighted or open
        #[arg(short, long)]
        layout: Option<String>,

        /// Start cell as "x,y" (a* only)
        #[arg(long)]
        start: Option<String>,

        /// End cell as "x,y" (a* only)
        #[arg(long)]
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config.into_config().context("invalid configuration")?;
    let solver = Solver::new(config)?;

    match cli.command {
        Command::Serve { host, port } => {
            maze_service::http::serve(solver, SocketAddr::new(host, port)).await;
        }
        Command::Solve {
            algorithm,
            size,
            layout,
            start,
            end,
        } => {
            let query = SolveQuery {
                algorithm: Some(algorithm),
                size: Some(size),
                layout,
                start,
                end,
            };
            let request = query.parse()?;
            let solution = maze_service::http::solve_blocking(Arc::new(solver), request).await?;
            info!(
                "{} solved in {} attempt(s)",
                request.algorithm, solution.attempts
            );
            let json = serde_json::to_string_pretty(&SolveResponse::from(solution))?;
            println!("{json}");
        }
    }
    Ok(())
}

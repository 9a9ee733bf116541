use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use zagros_cli::cli::{Cli, Commands};

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match &cli.command {
        Some(Commands::Generate {
            family,
            out,
            seed,
            noise_scale,
            selection,
        }) => {
            info!("Generating {} table -> {}", family, out);
            let result = commands::generate::handle(family, out, *seed, *noise_scale, selection);
            match result {
                Ok(_) => info!("Generate command successful!"),
                Err(e) => error!("Generate command failed: {:?}", e),
            }
        }
        Some(Commands::Stats { family, selection }) => {
            info!("Computing city statistics for {}", family);
            let result = commands::stats::handle(family, selection);
            match result {
                Ok(_) => info!("Stats command successful!"),
                Err(e) => error!("Stats command failed: {:?}", e),
            }
        }
        Some(Commands::Chart {
            category,
            indicator,
            time_frame,
            out,
        }) => {
            info!("Resolving chart {}/{}", category, indicator);
            let result = commands::chart::handle(category, indicator, time_frame, out.as_deref());
            match result {
                Ok(_) => info!("Chart command successful!"),
                Err(e) => error!("Chart command failed: {:?}", e),
            }
        }
        Some(Commands::Agg {
            family,
            value,
            agg,
            by,
            out,
        }) => {
            info!("Aggregating {} ({} by {})", family, agg, by);
            let result = commands::agg::handle(family, value, agg, by, out.as_deref());
            match result {
                Ok(_) => info!("Agg command successful!"),
                Err(e) => error!("Agg command failed: {:?}", e),
            }
        }
        Some(Commands::Sources { table, path }) => {
            info!("Loading source table '{}'", table);
            let result = commands::sources::handle(table, path.as_deref());
            match result {
                Ok(_) => info!("Sources command successful!"),
                Err(e) => error!("Sources command failed: {:?}", e),
            }
        }
        None => {
            info!("No subcommand provided. Use `zagros --help` for more information.");
        }
    }
}

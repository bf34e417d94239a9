use crate::cli::args::{Cli, Commands};
use crate::cli::config::Settings;
use crate::cli::report::{self, CatalogReport};
use crate::error::Result;
use crate::models::KnownBody;
use crate::processors::{build_catalog, pairwise_distances};
use crate::readers::SiteReader;
use crate::utils::parse_coordinate;
use tracing::{debug, info, warn};

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "Loaded settings");

    match cli.command {
        Commands::Sites {
            input,
            body,
            radius_km,
            layout,
            no_headers,
            delimiter,
            json,
        } => {
            let body = settings.resolve_body(body, radius_km, KnownBody::Mars)?;
            let layout = layout.unwrap_or(settings.layout).layout();

            info!("Reading landing sites from {}", input.display());
            let batch = SiteReader::with_has_headers(settings.has_headers && !no_headers)
                .delimiter(delimiter)
                .read_rows(&input)?;

            let catalog = build_catalog(&batch.rows, &layout);
            let mut rejected = batch.rejected;
            rejected.extend(catalog.rejected);
            for rejection in &rejected {
                warn!(line = rejection.line, "Skipping row: {}", rejection.error);
            }

            let distances = pairwise_distances(&body, &catalog.sites)?;
            info!(
                sites = catalog.sites.len(),
                pairs = distances.len(),
                radius_km = body.radius_km(),
                "Computed pairwise distances"
            );

            if json {
                let report = CatalogReport::new(&body, &catalog.sites, &distances, rejected.len());
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("{}", report::sites_table(&catalog.sites));
            println!();
            println!("{}", report::distances_table(&distances));
            println!();
            println!("{}", report::extreme_summary("Closest", distances.closest()));
            println!("{}", report::extreme_summary("Farthest", distances.farthest()));
            if !rejected.is_empty() {
                println!();
                println!("{}", report::rejections_summary(&rejected));
            }
        }

        Commands::Distance {
            from,
            to,
            body,
            radius_km,
        } => {
            let body = settings.resolve_body(body, radius_km, KnownBody::Earth)?;
            let distance = body.distance_between_location_strings(&from, &to)?;
            println!("{}", report::distance_summary(&from, &to, &body, distance));
        }

        Commands::Convert { coordinate, axis } => {
            let decimal = parse_coordinate(&coordinate)?;
            println!("{}", report::conversion_summary(&coordinate, decimal, axis));
        }
    }

    Ok(())
}

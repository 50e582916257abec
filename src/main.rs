use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use war_eagles_catalog::{
    catalog::{Catalog, Entry},
    cli::{Cli, Commands},
    config::CatalogConfig,
    designation::DesignationPool,
    filter::resolve_tables,
    logging::init_logging,
    schema::ALL_TABLES,
    writer::export_to_sqlite,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose, cli.quiet)?;

    let quiet = cli.quiet;
    let config = CatalogConfig::resolve(cli.data_dir);

    match cli.command {
        Commands::Check { strict } => {
            let catalog = Catalog::load(&config);
            let report = catalog.report();

            println!("Data directory: {:?}\n", config.data_dir());
            for table in &report.tables {
                if table.failed {
                    println!("  {:<22} not loaded", table.table);
                } else {
                    println!(
                        "  {:<22} {} records ({} skipped)",
                        table.table, table.loaded, table.skipped
                    );
                }
            }

            let diagnostics: Vec<_> = report.diagnostics().collect();
            if !diagnostics.is_empty() {
                println!("\n{} problems:", diagnostics.len());
                for diagnostic in &diagnostics {
                    println!("  {}", diagnostic);
                }
            }

            if strict && !report.is_clean() {
                bail!("Data check failed with {} problems", diagnostics.len());
            }
        }

        Commands::Lookup { table, key, json } => {
            let catalog = Catalog::load(&config);

            match catalog.get(table, &key) {
                Some(entry) if json => println!("{}", serde_json::to_string_pretty(&entry)?),
                Some(entry) => {
                    for (label, value) in entry.stat_rows() {
                        println!("{:>22}: {}", label, value);
                    }
                }
                None => println!("No {} entry named '{}'", table, key),
            }
        }

        Commands::Designate {
            nationality,
            role,
            count,
            seed,
        } => {
            let catalog = Catalog::load(&config);
            let mut pool = DesignationPool::from_catalog(&catalog);
            if let Some(seed) = seed {
                pool = pool.with_seed(seed);
            }

            let mut drawn = 0;
            for _ in 0..count {
                match pool.random_designation(&nationality, &role) {
                    Some(designation) if designation.special.is_empty() => {
                        println!("{}", designation.squadron_name);
                        drawn += 1;
                    }
                    Some(designation) => {
                        println!("{} ({})", designation.squadron_name, designation.special);
                        drawn += 1;
                    }
                    None => {
                        println!("No more designations for {} {}", nationality, role);
                        break;
                    }
                }
            }

            println!("\nAssigned {} of {} requested", drawn, count);
        }

        Commands::Roll { table, key, seed } => {
            let catalog = Catalog::load(&config);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let (dice, hits) = match catalog.get(table, &key) {
                Some(Entry::AirUnit(unit)) => {
                    (unit.air_attack_strength, unit.roll_air_attack(&mut rng))
                }
                Some(Entry::AntiAircraftUnit(unit)) => {
                    (unit.anti_aircraft_strength, unit.roll_anti_aircraft(&mut rng))
                }
                Some(Entry::Zone(zone)) => {
                    (zone.combined_aa_strength(), zone.roll_anti_aircraft(&mut rng))
                }
                Some(_) => bail!("{} entries do not roll combat dice", table),
                None => {
                    println!("No {} entry named '{}'", table, key);
                    return Ok(());
                }
            };

            println!("{}: {} hits from {} dice", key, hits, dice);
        }

        Commands::Export {
            output_db,
            include,
            exclude,
        } => {
            let start = Instant::now();

            // Resolve table filters
            let tables = resolve_tables(include, exclude)?;

            let catalog = Catalog::load(&config);

            println!("\nExporting to SQLite...");
            let record_count = export_to_sqlite(&catalog, &output_db, &tables, !quiet)?;

            let elapsed = start.elapsed();
            println!(
                "\nCreated {:?} ({} records) in {:.1}s",
                output_db,
                record_count,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListTables => {
            println!("Available tables:\n");
            for table in ALL_TABLES {
                println!("  {:<22} {}", table.name, table.source_file);
            }
        }
    }

    Ok(())
}

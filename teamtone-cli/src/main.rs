//! teamtone - CLI tool to match sports team colors with 3D printing filaments.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use teamtone_core::color::{compare_colors, find_closest_color};
use teamtone_core::ranking::nearest_matches_by;
use teamtone_core::{
    load_catalogs, load_rank_table, match_team, suggest_for_color, validate_catalogs, Catalogs,
    Color, FilamentCatalog, ManufacturerRanks, MatchConfig, Method, TeamCatalog,
};

/// Find 3D printing filaments that match sports team colors.
#[derive(Parser, Debug)]
#[command(name = "teamtone")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filament catalog (JSON file or directory)
    #[arg(long, global = true, default_value = "data/filaments")]
    filaments: PathBuf,

    /// Team catalog (JSON file or directory)
    #[arg(long, global = true, default_value = "data/teams")]
    teams: PathBuf,

    /// Manufacturer rank table (JSON file); the built-in table is used if omitted
    #[arg(long, global = true)]
    ranks: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest filaments for every color of a team
    Team {
        /// Team name (case-insensitive)
        name: String,

        /// Restrict the lookup to one league
        #[arg(short, long)]
        league: Option<String>,

        /// Similarity metric used for nearest matches
        #[arg(long, default_value = "delta_e_cie76")]
        method: String,
    },

    /// Suggest filaments for a single hex color
    Match {
        /// Hex color, with or without '#'
        hex: String,

        /// Similarity metric used for nearest matches
        #[arg(long, default_value = "delta_e_cie76")]
        method: String,
    },

    /// List the filaments closest to a hex color
    Closest {
        /// Hex color, with or without '#'
        hex: String,

        /// Number of filaments to list
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Only consider this manufacturer
        #[arg(short, long)]
        manufacturer: Option<String>,

        /// Similarity metric: delta_e_cie76, delta_e_cie94, rgb or weighted_rgb
        #[arg(long, default_value = "delta_e_cie76")]
        method: String,
    },

    /// Compare two hex colors with every metric
    Compare {
        hex1: String,
        hex2: String,
    },

    /// List leagues in the team catalog
    Leagues,

    /// List the teams of a league
    Teams {
        league: String,
    },

    /// Check the catalogs for inconsistencies
    Validate,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Command::Team {
            name,
            league,
            method,
        } => {
            let config = MatchConfig::with_method(method.parse()?);
            let catalogs = load(&args)?;
            let team = catalogs
                .teams
                .get(name, league.as_deref())
                .with_context(|| not_found_message(&catalogs.teams, name))?;
            let report = match_team(team, &catalogs.filaments, &catalogs.ranks, &config);

            if args.json {
                return print_json(&report);
            }
            print!("{}", report::render_team(team, &report, &config)?);
        }

        Command::Match { hex, method } => {
            let target = parse_color(hex)?;
            let config = MatchConfig::with_method(method.parse()?);
            let catalogs = load(&args)?;
            let suggestions =
                suggest_for_color(&catalogs.filaments, &catalogs.ranks, target, &config);

            if args.json {
                return print_json(&suggestions);
            }
            println!("{}:", target);
            print!("{}", report::render_suggestions(&suggestions, &config)?);

            let labels: Vec<(String, Color)> = catalogs
                .teams
                .teams()
                .iter()
                .flat_map(|t| {
                    t.palette()
                        .map(move |(name, color)| (format!("{} {}", t.team, name), color))
                })
                .collect();
            let candidates = labels.iter().map(|(l, c)| (l.as_str(), *c));
            if let Some(closest) = find_closest_color(target, candidates) {
                println!(
                    "\nClosest team color: {} {} ({:.1}% similar)",
                    closest.name, closest.color, closest.similarity
                );
            }
        }

        Command::Closest {
            hex,
            limit,
            manufacturer,
            method,
        } => {
            let target = parse_color(hex)?;
            let method: Method = method.parse()?;
            let filaments = FilamentCatalog::load(&args.filaments)
                .with_context(|| format!("Failed to load {}", args.filaments.display()))?;
            let ranks = load_ranks(args.ranks.as_deref())?;
            let matches =
                nearest_matches_by(&filaments, target, *limit, manufacturer.as_deref(), method);

            if args.json {
                return print_json(&matches);
            }
            print!("{}", report::render_nearest(target, &matches, &ranks)?);
        }

        Command::Compare { hex1, hex2 } => {
            let a = parse_color(hex1)?;
            let b = parse_color(hex2)?;
            let comparison = compare_colors(a, b);

            if args.json {
                return print_json(&comparison);
            }
            print!("{}", report::render_comparison(a, b, &comparison)?);
        }

        Command::Leagues => {
            let teams = load_teams(&args.teams)?;
            let leagues = teams.leagues();

            if args.json {
                return print_json(&leagues);
            }
            if leagues.is_empty() {
                println!("No leagues found!");
            }
            for (i, league) in leagues.iter().enumerate() {
                println!("  {}. {}", i + 1, league);
            }
        }

        Command::Teams { league } => {
            let teams = load_teams(&args.teams)?;
            let league_teams = teams.by_league(league);

            if args.json {
                return print_json(&league_teams);
            }
            if league_teams.is_empty() {
                println!("No teams found for {}!", league.to_uppercase());
            }
            for (i, team) in league_teams.iter().enumerate() {
                println!("  {}. {}", i + 1, team.team);
            }
        }

        Command::Validate => {
            let filaments = FilamentCatalog::load(&args.filaments)
                .with_context(|| format!("Failed to load {}", args.filaments.display()))?;
            let teams = load_teams(&args.teams)?;
            let ranks = load_ranks(args.ranks.as_deref())?;
            let validation = validate_catalogs(&filaments, &teams, &ranks);

            if args.json {
                print_json(&validation)?;
            } else {
                for warning in &validation.warnings {
                    warn!("{}", warning);
                }
                for err in &validation.errors {
                    error!("{}", err);
                }
            }

            if !validation.passed {
                anyhow::bail!("Validation failed");
            }
            info!(
                "Validation passed: {} filament(s), {} team(s)",
                filaments.len(),
                teams.len()
            );
        }
    }

    Ok(())
}

fn load(args: &Args) -> Result<Catalogs> {
    debug!(
        "Loading filaments from {} and teams from {}",
        args.filaments.display(),
        args.teams.display()
    );
    load_catalogs(&args.filaments, &args.teams, args.ranks.as_deref()).with_context(|| {
        format!(
            "Failed to load catalogs from {} and {}",
            args.filaments.display(),
            args.teams.display()
        )
    })
}

fn load_teams(path: &Path) -> Result<TeamCatalog> {
    TeamCatalog::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn load_ranks(path: Option<&Path>) -> Result<ManufacturerRanks> {
    match path {
        Some(path) => {
            load_rank_table(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Ok(ManufacturerRanks::default()),
    }
}

fn parse_color(hex: &str) -> Result<Color> {
    Ok(Color::parse(hex)?)
}

fn not_found_message(teams: &TeamCatalog, name: &str) -> String {
    let similar: Vec<&str> = teams.search(name).iter().map(|t| t.team.as_str()).collect();
    if similar.is_empty() {
        format!("Could not find color data for {}", name)
    } else {
        format!("Could not find color data for {} (did you mean: {}?)", name, similar.join(", "))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "teamtone",
            "closest",
            "#FF0000",
            "-n",
            "5",
            "--method",
            "rgb",
            "--json",
            "--filaments",
            "catalog.json",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.filaments, PathBuf::from("catalog.json"));
        match args.command {
            Command::Closest { limit, method, .. } => {
                assert_eq!(limit, 5);
                assert_eq!(method, "rgb");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_team_league_option() {
        let args = Args::try_parse_from([
            "teamtone",
            "team",
            "Boston Celtics",
            "--league",
            "NBA",
        ])
        .unwrap();
        match args.command {
            Command::Team {
                name,
                league,
                method,
            } => {
                assert_eq!(name, "Boston Celtics");
                assert_eq!(league.as_deref(), Some("NBA"));
                assert_eq!(method.parse::<Method>().unwrap(), Method::DeltaE76);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.teams, PathBuf::from("data/teams"));
    }

    #[test]
    fn test_match_method_builds_config() {
        let args =
            Args::try_parse_from(["teamtone", "match", "#552583", "--method", "delta_e_cie94"])
                .unwrap();
        match args.command {
            Command::Match { hex, method } => {
                assert_eq!(hex, "#552583");
                let config = MatchConfig::with_method(method.parse().unwrap());
                assert_eq!(config.method, Method::DeltaE94);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!("hsv".parse::<Method>().is_err());
    }

    #[test]
    fn test_parse_color_rejects_bad_hex() {
        assert!(parse_color("#GG0000").is_err());
        assert_eq!(parse_color("ff0000").unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn test_not_found_message_suggests() {
        let teams = TeamCatalog::from_json_str(
            r##"{"NBA": {"Boston Celtics": {"colors": ["Green"], "hex": ["#007A33"]}}}"##,
        )
        .unwrap();
        assert_eq!(
            not_found_message(&teams, "Boston"),
            "Could not find color data for Boston (did you mean: Boston Celtics?)"
        );
        assert_eq!(
            not_found_message(&teams, "Lakers"),
            "Could not find color data for Lakers"
        );
    }
}

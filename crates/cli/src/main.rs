use anyhow::{Context, Result};
use catalog::{BatchCache, CleanRecord, normalize_genre};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{
    Aggregate, EngineError, Extreme, FilterCriteria, NumericField, apply_filters, extremes,
    group_aggregate, group_count, group_extreme, top_n, write_csv,
};
use sources::load_path;
use std::fs::File;
use std::path::PathBuf;

/// MovieDash - filterable analytics over a movie catalog
#[derive(Parser)]
#[command(name = "movie-dash")]
#[command(about = "Filterable analytics over a movie catalog", long_about = None)]
struct Cli {
    /// Path to the record file (.csv or .json)
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    /// Restrict to a genre (repeatable; matched after trim/lowercase)
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Minimum rating (inclusive)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Maximum rating (inclusive)
    #[arg(long)]
    max_rating: Option<f64>,

    /// Minimum voting count (inclusive)
    #[arg(long)]
    min_votes: Option<u64>,

    /// Maximum voting count (inclusive)
    #[arg(long)]
    max_votes: Option<u64>,

    /// Minimum duration in minutes (inclusive)
    #[arg(long)]
    min_duration: Option<f64>,

    /// Maximum duration in minutes (inclusive)
    #[arg(long)]
    max_duration: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top N movies by blended score
    Top {
        /// Number of movies to display
        #[arg(long, default_value = "10")]
        n: usize,
    },

    /// Per-genre summary table
    Genres,

    /// Shortest and longest movie in the selection
    Extremes,

    /// Write the filtered rows as CSV
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let raw = load_path(&cli.data)
        .with_context(|| format!("Failed to read records from {}", cli.data.display()))?;
    println!(
        "{} Read {} raw records from {}",
        "✓".green(),
        raw.len(),
        cli.data.display()
    );

    let mut cache = BatchCache::new();
    let batch = cache
        .get_or_normalize(&raw)
        .context("Failed to normalize the record batch")?;
    println!(
        "{} {} movies after normalization and dedup",
        "✓".green(),
        batch.len()
    );

    let criteria = build_criteria(&cli);
    let rows = apply_filters(&batch, &criteria);

    match cli.command {
        Commands::Top { n } => handle_top(&rows, n),
        Commands::Genres => handle_genres(&rows),
        Commands::Extremes => handle_extremes(&rows),
        Commands::Export { output } => handle_export(&rows, &output)?,
    }

    Ok(())
}

/// Turn the filter flags into engine criteria. Absent flags leave the
/// corresponding option permissive.
fn build_criteria(cli: &Cli) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();

    if !cli.genres.is_empty() {
        criteria = criteria.with_genres(cli.genres.iter().map(|g| normalize_genre(g)));
    }
    criteria = criteria.with_rating_range(
        cli.min_rating.unwrap_or(f64::NEG_INFINITY),
        cli.max_rating.unwrap_or(f64::INFINITY),
    );
    criteria = criteria.with_voting_range(
        cli.min_votes.unwrap_or(0),
        cli.max_votes.unwrap_or(u64::MAX),
    );
    criteria.with_duration_range(
        cli.min_duration.unwrap_or(f64::NEG_INFINITY),
        cli.max_duration.unwrap_or(f64::INFINITY),
    )
}

/// Handle the 'top' command
fn handle_top(rows: &[&CleanRecord], n: usize) {
    if rows.is_empty() {
        println!("No movies match the filters.");
        return;
    }

    println!("{}", format!("Top {} movies by score:", n).bold().blue());
    for (rank, movie) in top_n(rows, n).iter().enumerate() {
        println!(
            "{:>3}. {} [{}] rating {:.1}, {} votes, score {:.3}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.genre,
            movie.rating,
            movie.voting,
            movie.score
        );
    }
}

/// Handle the 'genres' command
fn handle_genres(rows: &[&CleanRecord]) {
    if rows.is_empty() {
        println!("No movies match the filters.");
        return;
    }

    let counts = group_count(rows, |r| r.genre.as_str());
    let mean_rating = group_aggregate(rows, |r| r.genre.as_str(), NumericField::Rating, Aggregate::Mean);
    let mean_duration = group_aggregate(rows, |r| r.genre.as_str(), NumericField::Duration, Aggregate::Mean);
    let mean_voting = group_aggregate(rows, |r| r.genre.as_str(), NumericField::Voting, Aggregate::Mean);
    let total_voting = group_aggregate(rows, |r| r.genre.as_str(), NumericField::Voting, Aggregate::Sum);
    let best = group_extreme(rows, |r| r.genre.as_str(), NumericField::Rating, Extreme::Max);

    println!("{}", "Per-genre summary:".bold().blue());
    for (genre, count) in &counts {
        println!("{}", genre.bold());
        println!("  {} movies: {}", "•".green(), count);
        println!("  {} avg rating: {:.2}", "•".green(), mean_rating[genre]);
        println!("  {} avg duration: {:.0} min", "•".green(), mean_duration[genre]);
        println!(
            "  {} votes: {:.0} avg / {:.0} total",
            "•".cyan(),
            mean_voting[genre],
            total_voting[genre]
        );
        println!(
            "  {} top rated: {} ({:.1})",
            "•".cyan(),
            best[genre].title,
            best[genre].rating
        );
    }
}

/// Handle the 'extremes' command
fn handle_extremes(rows: &[&CleanRecord]) {
    match extremes(rows, NumericField::Duration) {
        Ok((shortest, longest)) => {
            println!("{}", "Shortest and longest movies:".bold().blue());
            println!(
                "  {} shortest: {} [{}] {:.0} min",
                "•".green(),
                shortest.title,
                shortest.genre,
                shortest.duration
            );
            println!(
                "  {} longest:  {} [{}] {:.0} min",
                "•".green(),
                longest.title,
                longest.genre,
                longest.duration
            );
        }
        Err(EngineError::EmptySubset) => println!("No movies match the filters."),
        Err(err) => println!("{} {}", "✗".red(), err),
    }
}

/// Handle the 'export' command
fn handle_export(rows: &[&CleanRecord], output: &PathBuf) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_csv(rows, file).context("Failed to write the export")?;
    println!(
        "{} Exported {} rows to {}",
        "✓".green(),
        rows.len(),
        output.display()
    );
    Ok(())
}

// ABOUTME: Main entry point for the CMA CLI application
// ABOUTME: Provides a command-line interface for the CMA Open Access API

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use cma_sdk::{ArtworkFilters, CmaClient, CmaError, PreviewOptions};
use std::env;

use cma_cli::output::{JsonFormatter, SummaryFormatter, TableFormatter};
use cma_cli::types::ArtworkSelector;

#[derive(Parser, Debug)]
#[command(name = "cma")]
#[command(about = "Cleveland Museum of Art Open Access API wrapper", long_about = None)]
struct Cli {
    /// Log the parsed invocation and request URLs
    #[arg(long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Override the API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Retrieve an artwork by id or search the collection
    Artwork(ArtworkArgs),
    /// Curator lookups (not yet supported)
    Curator(LookupArgs),
    /// Exhibition lookups (not yet supported)
    Exhibition(LookupArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selector").required(true).args(["id", "search"])))]
struct LookupArgs {
    /// Resource ID to retrieve
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Search terms for resource
    #[arg(long, value_name = "TERMS")]
    search: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selector").required(true).args(["id", "search"])))]
struct ArtworkArgs {
    /// Resource ID to retrieve
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Search terms for resource
    #[arg(long, value_name = "TERMS")]
    search: Option<String>,

    /// Keyword or phrase searched against title, creator, description, and
    /// other meaningful fields (defaults to the --search terms)
    #[arg(short = 'q', long, value_name = "TERMS")]
    query: Option<String>,

    /// Filter by department
    #[arg(long)]
    department: Option<String>,

    /// Filter by artwork type
    #[arg(long = "type", value_name = "TYPE")]
    artwork_type: Option<String>,

    /// 0 or 1, only artworks that have a web image asset
    #[arg(long = "has_image", value_name = "0|1")]
    has_image: Option<i64>,

    /// Number of spaces the API indents JSON content with
    #[arg(long)]
    indent: Option<i64>,

    /// Offset index for results
    #[arg(long)]
    skip: Option<i64>,

    /// Limit for number of results (API maximum is 1000)
    #[arg(long)]
    limit: Option<i64>,

    /// Filter by name of artist
    #[arg(long)]
    artists: Option<String>,

    /// Filter by title of artwork
    #[arg(long)]
    title: Option<String>,

    /// Filter by artwork medium
    #[arg(long)]
    medium: Option<String>,

    /// Filter by dimensions in meters (f,f,f) with 20cm fault tolerance
    #[arg(long, value_name = "F,F,F")]
    dimensions: Option<String>,

    /// Only works that fit inside the described box, in meters
    #[arg(long = "dimensions_max", value_name = "F,F,F")]
    dimensions_max: Option<String>,

    /// Only works that cannot fit inside the described box, in meters
    #[arg(long = "dimensions_min", value_name = "F,F,F")]
    dimensions_min: Option<String>,

    /// Filter by credit line
    #[arg(long)]
    credit: Option<String>,

    /// Filter by catalogue raisonne
    #[arg(long = "catalogue_raisonne")]
    catalogue_raisonne: Option<String>,

    /// Filter by provenance of artwork
    #[arg(long)]
    provenance: Option<String>,

    /// Keyword search against the citations field
    #[arg(long)]
    citations: Option<String>,

    /// Filter by exhibition history of artwork
    #[arg(long = "exhibition_history")]
    exhibition_history: Option<String>,

    /// Works created before the year specified, negative years are BCE
    #[arg(long = "created_before", value_name = "YEAR", allow_hyphen_values = true)]
    created_before: Option<i64>,

    /// Works created after the year specified, negative years are BCE
    #[arg(long = "created_after", value_name = "YEAR", allow_hyphen_values = true)]
    created_after: Option<i64>,

    /// Artists older than the value in years at time of creation
    #[arg(long = "created_after_age", value_name = "YEARS")]
    created_after_age: Option<i64>,

    /// Artists younger than the value in years at time of creation
    #[arg(long = "created_before_age", value_name = "YEARS")]
    created_before_age: Option<i64>,

    /// Works with share license cc0
    #[arg(long)]
    cc0: bool,

    /// Works with some sort of copyright
    #[arg(long)]
    copyrighted: bool,

    /// Works currently on view at CMA
    #[arg(long = "currently_on_view")]
    currently_on_view: bool,

    /// Works currently on loan
    #[arg(long = "currently_on_loan")]
    currently_on_loan: bool,

    /// Works created by African American artists
    #[arg(long = "african_american_artists")]
    african_american_artists: bool,

    /// Works created by Cleveland Institute of Art alumni
    #[arg(long = "cia_alumni_artists")]
    cia_alumni_artists: bool,

    /// Works exhibited in Cleveland Museum of Art May Shows
    #[arg(long = "may_show_artists")]
    may_show_artists: bool,

    /// Works created by female artists
    #[arg(long = "female_artists")]
    female_artists: bool,

    /// Works acquired by the museum in the last three years
    #[arg(long = "recently_acquired")]
    recently_acquired: bool,

    /// Works with nazi-era provenance
    #[arg(long = "nazi_era_provenance")]
    nazi_era_provenance: bool,

    /// Generate an ASCII preview
    #[arg(long)]
    preview: bool,

    /// Preview width in characters
    #[arg(long, default_value_t = 80, requires = "preview")]
    cols: u32,

    /// Preview vertical compression factor
    #[arg(long, default_value_t = 0.43, requires = "preview")]
    scale: f64,

    /// Use the 70-level preview palette instead of the 10-level one
    #[arg(long = "more_levels", requires = "preview")]
    more_levels: bool,
}

impl ArtworkArgs {
    fn selector(&self) -> Result<ArtworkSelector, CmaError> {
        ArtworkSelector::from_options(self.id.clone(), self.search.clone())
    }

    /// Map the parsed flags onto the API filter set. The search terms feed
    /// the `q` filter unless an explicit `--query` was given.
    fn filters(&self, search_terms: Option<&str>) -> ArtworkFilters {
        ArtworkFilters {
            q: self
                .query
                .clone()
                .or_else(|| search_terms.map(String::from)),
            department: self.department.clone(),
            artwork_type: self.artwork_type.clone(),
            has_image: self.has_image,
            indent: self.indent,
            skip: self.skip,
            limit: self.limit,
            artists: self.artists.clone(),
            title: self.title.clone(),
            medium: self.medium.clone(),
            dimensions: self.dimensions.clone(),
            dimensions_max: self.dimensions_max.clone(),
            dimensions_min: self.dimensions_min.clone(),
            credit: self.credit.clone(),
            catalogue_raisonne: self.catalogue_raisonne.clone(),
            provenance: self.provenance.clone(),
            citations: self.citations.clone(),
            exhibition_history: self.exhibition_history.clone(),
            created_before: self.created_before,
            created_after: self.created_after,
            created_after_age: self.created_after_age,
            created_before_age: self.created_before_age,
            cc0: self.cc0,
            copyrighted: self.copyrighted,
            currently_on_view: self.currently_on_view,
            currently_on_loan: self.currently_on_loan,
            african_american_artists: self.african_american_artists,
            cia_alumni_artists: self.cia_alumni_artists,
            may_show_artists: self.may_show_artists,
            female_artists: self.female_artists,
            recently_acquired: self.recently_acquired,
            nazi_era_provenance: self.nazi_era_provenance,
        }
    }

    fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            cols: self.cols,
            scale: self.scale,
            more_levels: self.more_levels,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        if let Some(help) = err.downcast_ref::<CmaError>().and_then(CmaError::help_text) {
            eprintln!();
            eprintln!("{help}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    log::debug!("parsed invocation: {cli:?}");

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb";

    let client = CmaClient::builder().base_url(cli.base_url.clone()).build()?;

    match &cli.command {
        Commands::Artwork(args) => run_artwork(&client, args, use_color).await,
        Commands::Curator(args) => {
            log::debug!("curator lookup requested: {args:?}");
            Err(CmaError::Unsupported("curator").into())
        }
        Commands::Exhibition(args) => {
            log::debug!("exhibition lookup requested: {args:?}");
            Err(CmaError::Unsupported("exhibition").into())
        }
    }
}

async fn run_artwork(client: &CmaClient, args: &ArtworkArgs, use_color: bool) -> Result<()> {
    match args.selector()? {
        ArtworkSelector::Id(id) => {
            let preview = args.preview.then(|| args.preview_options());
            let artwork = client.get_artwork(&id, preview.as_ref()).await?;

            if args.preview {
                println!("{}", SummaryFormatter::new(use_color).format_artwork(&artwork));
            } else {
                println!("{}", JsonFormatter::new(true).format(&artwork)?);
            }
        }
        ArtworkSelector::Search(terms) => {
            let filters = args.filters(Some(&terms));
            let results = client.get_artworks(&filters).await?;

            if args.preview {
                let records = results.as_array().cloned().unwrap_or_default();
                println!("No. Results: {}", records.len());
                if !records.is_empty() {
                    println!(
                        "{}",
                        TableFormatter::new(use_color).format_artworks(&records)
                    );
                }
            } else {
                println!("{}", JsonFormatter::new(true).format(&results)?);
            }
        }
    }

    Ok(())
}

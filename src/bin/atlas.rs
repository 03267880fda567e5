use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use country_atlas::format::format_breakdown;
use country_atlas::listing::{self, FilterState, RegionFilter, SortKey};
use country_atlas::view::CountryCard;
use country_atlas::{Atlas, Settings};
use env_logger::{Builder, Env};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "atlas",
    version,
    about = "Browse, filter & inspect countries from the REST Countries API"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Base URL of the REST Countries API.
    #[arg(long, global = true, env = "ATLAS_API_URL", default_value = country_atlas::api::DEFAULT_BASE_URL)]
    api_url: String,
    /// URL of the religion-by-country CSV snapshot.
    #[arg(long, global = true, env = "ATLAS_RELIGION_URL", default_value = country_atlas::religion::DEFAULT_RELIGION_CSV_URL)]
    religion_url: String,
    /// Timeout per outbound request, in seconds.
    #[arg(long, global = true, env = "ATLAS_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
    /// Locale for grouped numbers (en, de, fr, es, it, pt, nl).
    #[arg(long, global = true, env = "ATLAS_LOCALE", default_value = "en")]
    locale: String,
}

impl GlobalArgs {
    fn settings(&self) -> Settings {
        Settings {
            api_url: self.api_url.clone(),
            religion_url: self.religion_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            locale: self.locale.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries, optionally filtered and sorted.
    List(ListArgs),
    /// Print the distinct regions.
    Regions,
    /// Show the details page of one country.
    Show(ShowArgs),
    /// Print the religion breakdown of one country.
    Religion(ReligionArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive substring of the common name.
    #[arg(short, long, default_value = "")]
    search: String,
    /// Region name, or "all".
    #[arg(short, long, default_value = "all")]
    region: RegionFilter,
    /// none, pop-desc, pop-asc, area-desc, area-asc
    #[arg(long, default_value = "none")]
    sort: SortKey,
    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// ISO 3166-1 alpha-2 or alpha-3 code (e.g., DEU).
    code: String,
    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReligionArgs {
    /// ISO 3166-1 alpha-3 code (e.g., DEU).
    code: String,
    /// Region to fall back to (e.g., Europe).
    #[arg(short, long)]
    region: Option<String>,
    /// Also report how many countries the remote snapshot provided.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let atlas = Atlas::from_settings(&cli.global.settings())?;
    match cli.cmd {
        Command::List(args) => cmd_list(&atlas, args),
        Command::Regions => cmd_regions(&atlas),
        Command::Show(args) => cmd_show(&atlas, args),
        Command::Religion(args) => cmd_religion(&atlas, args),
    }
}

fn cmd_list(atlas: &Atlas, args: ListArgs) -> Result<()> {
    let countries = atlas.countries();
    let state = FilterState {
        search: args.search,
        region: args.region,
        sort: args.sort,
    };
    let shown: Vec<CountryCard> = state
        .apply(&countries)
        .into_iter()
        .map(|c| CountryCard::from_country(c, atlas.locale()))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("Showing {} of {} countries", shown.len(), countries.len());
    if shown.is_empty() {
        println!("No countries match your filters.");
        return Ok(());
    }
    for card in &shown {
        println!(
            "{:<3}  {}  [{}]  capital={}  population={}  currency={}",
            card.code, card.name, card.region, card.capital, card.population, card.currency
        );
    }
    Ok(())
}

fn cmd_regions(atlas: &Atlas) -> Result<()> {
    for region in listing::regions(&atlas.countries()) {
        println!("{}", region);
    }
    Ok(())
}

fn cmd_show(atlas: &Atlas, args: ShowArgs) -> Result<()> {
    let details = atlas.details(&args.code)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    match &details.flag_emoji {
        Some(flag) => println!("{} {}", flag, details.name),
        None => println!("{}", details.name),
    }
    let width = details.rows().iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (label, value) in details.rows() {
        println!("  {:<width$}  {}", label, value, width = width);
    }
    Ok(())
}

fn cmd_religion(atlas: &Atlas, args: ReligionArgs) -> Result<()> {
    let breakdown = atlas.religion(&args.code, args.region.as_deref());
    match breakdown {
        Some(_) => println!("{}", format_breakdown(breakdown)),
        None => println!("No religion data available"),
    }
    if args.stats {
        eprintln!(
            "remote snapshot: {} countries",
            atlas.resolver().remote_len()
        );
    }
    Ok(())
}

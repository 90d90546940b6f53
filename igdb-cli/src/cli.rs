//! Command-line arguments.

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use igdb_lib::api::query::FindQuery;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "igdb", author, version, about = "Query the IGDB video game database", long_about = None)]
pub struct Cli {
    /// IGDB API key
    #[arg(long, env = "IGDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API endpoint root
    #[arg(long, env = "IGDB_API_URL")]
    pub endpoint: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query an endpoint
    Find(FindArgs),
    /// List the fields of an endpoint
    Meta {
        /// Endpoint name (game, platform, ...)
        entity: String,
    },
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Endpoint name (game, platform, ...)
    pub entity: String,

    /// Fields to return, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Fields to leave out, comma-separated
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Full-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Match a single id
    #[arg(long)]
    pub id: Option<u64>,

    /// Match the exact name
    #[arg(long)]
    pub name: Option<String>,

    /// Match the exact slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Raw filter clause, e.g. "where rating > 80"
    #[arg(short = 'w', long = "where")]
    pub filter: Option<String>,

    /// Maximum number of results (at most 500)
    #[arg(short, long, default_value_t = 0)]
    pub limit: u32,

    /// Sort expression, e.g. "rating desc"
    #[arg(long)]
    pub sort: Option<String>,

    /// Expect at most one result
    #[arg(long)]
    pub one: bool,
}

impl FindArgs {
    pub fn to_query(&self) -> FindQuery {
        let mut query = FindQuery::new()
            .entity(&self.entity)
            .fields(self.fields.clone())
            .limit(self.limit);

        if let Some(exclude) = &self.exclude {
            query = query.exclude(exclude);
        }
        if let Some(search) = &self.search {
            query = query.search(search);
        }
        if let Some(id) = self.id {
            query = query.id(id);
        }
        if let Some(name) = &self.name {
            query = query.name(name);
        }
        if let Some(slug) = &self.slug {
            query = query.slug(slug);
        }
        if let Some(filter) = &self.filter {
            query = query.filter(filter);
        }
        if let Some(sort) = &self.sort {
            query = query.sort(sort.as_str());
        }
        query
    }
}

use anyhow::Result;
use clap::Args;
use movietable_lib::validation;
use movietable_lib::{CachedClient, MovieTable, TableOptions};

use crate::output::{print_movies, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page: 10, 20, 30, 40 or 50
    #[arg(long, default_value = "10")]
    pub page_size: u32,

    /// Sort by field, optionally suffixed :asc or :desc (repeatable, e.g. --sort year:desc)
    #[arg(long)]
    pub sort: Vec<String>,

    /// Disable sorting; any --sort is ignored
    #[arg(long)]
    pub no_sort: bool,

    /// Walk every page from --page to the last one
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &ListArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut table = MovieTable::new(TableOptions {
        sorting: !args.no_sort,
    });

    let sorting = args
        .sort
        .iter()
        .map(|s| validation::parse_sort(s))
        .collect::<Result<Vec<_>, _>>()?;
    table.set_sorting(sorting);

    table.set_page_size(validation::validate_page_size(args.page_size)?)?;
    table.set_page_index(validation::validate_page(args.page)?);

    loop {
        table.load(client).await?;
        eprintln!("{} ({} movies on this page)", table.status(), table.rows().len());
        print_movies(table.rows(), format)?;

        if !args.all || !table.can_next_page() {
            break;
        }
        table.next_page();
    }

    Ok(())
}

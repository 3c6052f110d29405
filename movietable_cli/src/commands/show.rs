use anyhow::Result;
use clap::Args;
use movietable_lib::CachedClient;

use crate::output::{print_movies, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Movie ID
    pub id: i64,
}

pub async fn run(args: &ShowArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let movie = client.get_movie(args.id).await?;
    print_movies(std::slice::from_ref(&movie), format)?;
    Ok(())
}

use anyhow::Result;
use movietable_lib::types::Movie;
use movietable_lib::Column;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct MovieRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Release Year")]
    #[serde(rename = "Release Year")]
    release_year: String,
    #[tabled(rename = "Director")]
    #[serde(rename = "Director")]
    director: String,
}

fn build_movie_rows(movies: &[Movie]) -> Vec<MovieRow> {
    movies
        .iter()
        .map(|m| MovieRow {
            name: Column::Name.cell(m),
            release_year: Column::ReleaseYear.cell(m),
            director: Column::Director.cell(m),
        })
        .collect()
}

pub fn print_movies(movies: &[Movie], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_movies_table(movies),
        OutputFormat::Json => print_json(&movies),
        OutputFormat::Csv => print_movies_csv(movies)?,
        OutputFormat::Markdown => print_movies_markdown(movies),
    }
    Ok(())
}

pub fn print_movies_table(movies: &[Movie]) {
    println!("{}", Table::new(build_movie_rows(movies)));
}

pub fn print_movies_markdown(movies: &[Movie]) {
    let mut table = Table::new(build_movie_rows(movies));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_movies_csv(movies: &[Movie]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_movie_rows(movies) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

//! Reads the embedded listing out of a saved search results page, writes it
//! as CSV and prints a coverage summary.
//!
//! Usage: `parse_saved [page.html] [out.csv]`

use std::env;
use std::fs;
use std::process;

use restaurant_extract::{export, parse_embedded_listing, Options, Summary};

const DEFAULT_INPUT: &str = "opentable_response.html";
const DEFAULT_OUTPUT: &str = "toronto_restaurants_parsed.csv";

fn main() {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    if let Err(err) = run(&input, &output) {
        eprintln!("Error parsing {input}: {err}");
        process::exit(1);
    }
}

fn run(input: &str, output: &str) -> restaurant_extract::Result<()> {
    let html = fs::read_to_string(input)?;
    let restaurants = parse_embedded_listing(&html, &Options::default())?;
    println!("Extracted {} restaurants from {input}", restaurants.len());

    if restaurants.is_empty() {
        println!("No restaurants to save!");
    } else {
        let formatted = export::save_csv(output, &restaurants)?;
        println!("Saved {output} and {}", formatted.display());
    }

    print!("{}", Summary::from_records(&restaurants));
    Ok(())
}

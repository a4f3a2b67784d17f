//! Reads a listing page from stdin and prints the extracted restaurants as
//! a JSON array.

use restaurant_extract::extract_restaurants;
use std::io::{self, Read};

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let restaurants = match extract_restaurants(&html) {
        Ok(r) => r,
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            Vec::new()
        }
    };

    println!("{}", serde_json::to_string(&restaurants).unwrap_or_default());
}

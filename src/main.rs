use std::io::{self, Read};

use editdistance::{levenshtein_matrix, levenshtein_rolling, Error, Result};

/// Reads two whitespace-separated strings from stdin.
fn read_pair() -> Result<(String, String)> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(compare), Some(target)) => Ok((compare.to_owned(), target.to_owned())),
        (first, _) => Err(Error::MissingInput {
            found: first.map_or(0, |_| 1),
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (compare, target) = read_pair()?;
    log::debug!(
        "comparing {} chars against {} chars",
        compare.chars().count(),
        target.chars().count()
    );

    println!("Full-matrix DP:");
    println!("{}", levenshtein_matrix(&compare, &target));
    println!();
    println!("Space-optimized DP:");
    println!("{}", levenshtein_rolling(&compare, &target));

    Ok(())
}

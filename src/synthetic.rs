//! Seedable synthetic catalog generation.
//!
//! A convenience fixture source for tests, benchmarks, and demos. The
//! engine itself never calls this; it plays the external catalog-loader
//! role.
//!
//! # Examples
//!
//! ```
//! use sugerir::synthetic::sample_catalog;
//!
//! let catalog = sample_catalog(100, 42);
//! assert_eq!(catalog.len(), 100);
//!
//! // Same seed, same catalog.
//! assert_eq!(catalog, sample_catalog(100, 42));
//! ```

use crate::recommend::Item;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Genre pool for generated feature text.
const GENRES: [&str; 18] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Thriller",
    "War",
    "Western",
];

/// Generate `size` items with pipe-joined genre features.
///
/// Each item gets a title of the form `"Sample Item {id} ({year})"`,
/// one to three genres drawn without replacement, and a rating uniform
/// in `[1.0, 10.0]` rounded to one decimal. Deterministic per seed.
#[must_use]
pub fn sample_catalog(size: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let id = (i + 1) as u64;
            let year: u32 = rng.gen_range(1970..2023);
            let n_genres = rng.gen_range(1..=3usize);
            let genres: Vec<&str> = GENRES
                .choose_multiple(&mut rng, n_genres)
                .copied()
                .collect();
            let rating = (rng.gen_range(1.0..=10.0f64) * 10.0).round() / 10.0;
            Item::new(
                id,
                format!("Sample Item {id} ({year})"),
                genres.join("|"),
                rating,
            )
        })
        .collect()
}

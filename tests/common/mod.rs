// Shared fixtures: small engines assembled from in-memory parts,
// mirroring how the offline build projects items into matrix space.

#![allow(dead_code)]

use std::collections::HashMap;

use ndarray::Array2;

use curator::core::{EligibleItem, Item, ItemId};
use curator::engine::Engine;
use curator::models::{MinMaxScaler, TextVectorizer, TransformBank};

pub const TERMS: &[&str] = &[
    "puzzle", "platformer", "portals", "humor", "space", "shooter",
    "lasers", "farming", "cozy", "crafting", "roguelike", "dungeon",
];

pub fn item(id: u32, name: &str, desc: &str, price: f32, quality: f32, age: f32) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        description: desc.to_string(),
        price,
        quality,
        age_days: age,
    }
}

pub fn bank(terms: &[&str]) -> TransformBank {
    let vocabulary: HashMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(col, term)| (term.to_string(), col))
        .collect();
    let idf = vec![1.0; terms.len()];

    let text = TextVectorizer::new(vocabulary, idf, 0.8);
    let price_age = MinMaxScaler::new(vec![0.0, 0.0], vec![60.0, 3000.0], 0.5);
    let quality = MinMaxScaler::new(vec![0.0], vec![1.0], 0.7);

    TransformBank::new(text, price_age, quality).expect("fixture bank is well-formed")
}

/// Assemble an engine the way the offline build does: project each item
/// destined for the eligible table through the bank, row by row.
pub fn build_engine(catalog: Vec<Item>, eligible_src: &[Item], bank: TransformBank) -> Engine {
    let eligible: Vec<EligibleItem> = eligible_src
        .iter()
        .map(|it| EligibleItem {
            id: it.id,
            name: it.name.clone(),
            price: it.price,
            quality: it.quality,
        })
        .collect();

    let dim = bank.dim();
    let mut values = Vec::with_capacity(eligible_src.len() * dim);
    for it in eligible_src {
        values.extend(bank.project(it).iter().copied());
    }
    let matrix = Array2::from_shape_vec((eligible_src.len(), dim), values)
        .expect("fixture matrix is rectangular");

    Engine::from_parts(catalog, eligible, bank, matrix).expect("fixture parts are aligned")
}

/// The standard fixture: six catalog games plus one silent-description
/// entry, and an eligible table that is reordered relative to the catalog
/// and contains one id the catalog has never heard of.
pub fn standard_engine() -> Engine {
    let catalog = standard_catalog();
    let eligible_src = standard_eligible_src();
    build_engine(catalog, &eligible_src, bank(TERMS))
}

pub fn standard_catalog() -> Vec<Item> {
    vec![
        item(10, "Portal Blue", "puzzle platformer portals", 10.0, 0.9, 2000.0),
        item(20, "Portal Orange", "puzzle platformer portals humor", 50.0, 0.3, 1500.0),
        item(30, "Void Lasers", "space shooter lasers", 20.0, 0.7, 800.0),
        item(40, "Harvest Hollow", "cozy farming crafting", 15.0, 0.85, 400.0),
        item(50, "Duplicate Quest", "roguelike dungeon crafting", 25.0, 0.6, 900.0),
        item(60, "duplicate quest", "dungeon crafting humor", 30.0, 0.5, 600.0),
        item(70, "Silent One", "", 20.0, 0.5, 1000.0),
    ]
}

pub fn standard_eligible_src() -> Vec<Item> {
    vec![
        item(30, "Void Lasers", "space shooter lasers", 20.0, 0.7, 800.0),
        item(10, "Portal Blue", "puzzle platformer portals", 10.0, 0.9, 2000.0),
        item(40, "Harvest Hollow", "cozy farming crafting", 15.0, 0.85, 400.0),
        // Present in the eligible table but absent from the catalog
        item(99, "Ghost Entry", "space shooter portals", 12.0, 0.8, 100.0),
        item(20, "Portal Orange", "puzzle platformer portals humor", 50.0, 0.3, 1500.0),
        item(50, "Duplicate Quest", "roguelike dungeon crafting", 25.0, 0.6, 900.0),
    ]
}

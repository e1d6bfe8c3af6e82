//! Built-in problem instances used by the CLI and benchmarks.

use crate::aco::{DistanceMatrix, TourProblem};
use crate::error::SolverResult;
use crate::ga::{Item, KnapsackProblem};

/// Budget for [`parcel_catalog`].
pub const PARCEL_BUDGET: u64 = 125_000;

const PARCEL_ITEMS: [(&str, u64); 18] = [
    ("Bear Brand Gold 189ml", 9900),
    ("Vidoran Smart Milk 700g", 49400),
    ("Vidoran Smart UHT 115ml", 10900),
    ("So Good Siap Makan", 5500),
    ("Indomie Nyemek/Aceh", 5900),
    ("Richeese Wafer/Ahhh", 10000),
    ("Herbakof Syrup 100ml", 20000),
    ("So Fresh Minyak Angin", 12500),
    ("Sosoft Detergent 700ml", 16500),
    ("Bagus Fresh Air", 10900),
    ("Bebek Pembersih Kloset", 19900),
    ("Plossa Press & Soothe", 14900),
    ("SpongeBob Buddies Figure", 29900),
    ("Gabby's Dollhouse Ad", 24900),
    ("Apolo Boneka", 29900),
    ("Apolo Majestic Sand", 37900),
    ("Barbie Fashionistas", 49900),
    ("Hot Wheels Car", 59900),
];

const PILGRIMAGE_STOPS: [&str; 10] = [
    "Jogja",
    "Sunan Gunung Jati (Cirebon)",
    "Sunan Kudus",
    "Sunan Giri (Gresik)",
    "Sunan Kalijaga (Demak)",
    "Sunan Gresik",
    "Sunan Ampel (Surabaya)",
    "Sunan Drajat (Lamongan)",
    "Sunan Bonang (Tuban)",
    "Sunan Muria (Kudus)",
];

/// Road distances in km between [`PILGRIMAGE_STOPS`].
const PILGRIMAGE_KM: [[f64; 10]; 10] = [
    [0.0, 360.0, 185.0, 335.0, 160.0, 340.0, 334.0, 362.0, 163.0, 204.0],
    [360.0, 0.0, 293.0, 579.0, 269.0, 601.0, 583.0, 610.0, 370.0, 318.0],
    [185.0, 293.0, 0.0, 405.0, 261.0, 408.0, 409.0, 202.0, 80.6, 21.4],
    [335.0, 579.0, 405.0, 0.0, 313.0, 4.0, 24.0, 56.5, 164.0, 241.0],
    [160.0, 269.0, 261.0, 313.0, 0.0, 383.0, 382.0, 225.0, 104.0, 45.8],
    [340.0, 601.0, 408.0, 4.0, 383.0, 0.0, 22.5, 56.5, 164.0, 244.0],
    [334.0, 583.0, 409.0, 24.0, 382.0, 22.5, 0.0, 75.9, 181.0, 336.0],
    [362.0, 610.0, 202.0, 56.5, 225.0, 56.5, 75.9, 0.0, 120.0, 200.0],
    [163.0, 370.0, 80.6, 164.0, 104.0, 164.0, 181.0, 120.0, 0.0, 80.9],
    [204.0, 318.0, 21.4, 241.0, 45.8, 244.0, 336.0, 200.0, 80.9, 0.0],
];

/// An 18-item grocery and toy catalog with a 125 000 budget.
pub fn parcel_catalog() -> SolverResult<KnapsackProblem> {
    let items = PARCEL_ITEMS
        .iter()
        .map(|&(name, price)| Item::new(name, price))
        .collect();
    KnapsackProblem::new(items, PARCEL_BUDGET)
}

/// A 10-stop round trip starting and ending in Jogja.
pub fn pilgrimage_route() -> SolverResult<TourProblem> {
    let rows = PILGRIMAGE_KM.iter().map(|row| row.to_vec()).collect();
    let names = PILGRIMAGE_STOPS.iter().map(|s| s.to_string()).collect();
    TourProblem::new(names, DistanceMatrix::new(rows)?)
}

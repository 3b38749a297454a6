// src/domain/property.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type PropertyId = u32;

/// How a deal is meant to be worked once it is under contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    Wholesale,
    #[serde(rename = "Section 8")]
    Section8,
    #[serde(rename = "Fix & Flip")]
    FixAndFlip,
    #[serde(rename = "Standard Rental")]
    StandardRental,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Wholesale,
        Strategy::Section8,
        Strategy::FixAndFlip,
        Strategy::StandardRental,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Wholesale => "Wholesale",
            Strategy::Section8 => "Section 8",
            Strategy::FixAndFlip => "Fix & Flip",
            Strategy::StandardRental => "Standard Rental",
        }
    }

    /// Rental strategies feed the average-rent stat.
    pub fn is_rental(self) -> bool {
        matches!(self, Strategy::StandardRental | Strategy::Section8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Structure {
    #[serde(rename = "Single Family")]
    SingleFamily,
    #[serde(rename = "Multi Family")]
    MultiFamily,
}

impl Structure {
    pub const ALL: [Structure; 2] = [Structure::SingleFamily, Structure::MultiFamily];

    pub fn label(self) -> &'static str {
        match self {
            Structure::SingleFamily => "Single Family",
            Structure::MultiFamily => "Multi Family",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DealStatus {
    Hot,
    New,
    Underwriting,
    Ready,
}

impl DealStatus {
    pub fn label(self) -> &'static str {
        match self {
            DealStatus::Hot => "Hot",
            DealStatus::New => "New",
            DealStatus::Underwriting => "Underwriting",
            DealStatus::Ready => "Ready",
        }
    }
}

macro_rules! label_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| format!("unknown {}: {s}", $what))
            }
        }
    };
}

label_traits!(Strategy, "strategy");
label_traits!(Structure, "structure");

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One off-market listing. Amounts are whole US dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub price: i64,
    pub arv: i64,
    pub rent: Option<i64>,
    pub strategy: Strategy,
    pub structure: Structure,
    pub status: DealStatus,
    pub beds: u8,
    pub baths: u8,
    pub sqft: u32,
    pub coordinate: Coordinate,
}

impl Property {
    /// ARV minus purchase price. Not clamped; a negative spread is shown as-is.
    pub fn spread(&self) -> i64 {
        self.arv - self.price
    }

    /// "address city state", the text the search box matches against.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.address, self.city, self.state).to_lowercase()
    }
}

pub static SEED_PROPERTIES: [Property; 8] = [
    Property {
        id: 1,
        address: "1430 Willow St",
        city: "Dallas",
        state: "TX",
        price: 218_000,
        arv: 305_000,
        rent: None,
        strategy: Strategy::Wholesale,
        structure: Structure::SingleFamily,
        status: DealStatus::Hot,
        beds: 3,
        baths: 2,
        sqft: 1680,
        coordinate: Coordinate::new(32.7767, -96.797),
    },
    Property {
        id: 2,
        address: "8825 Magnolia Cir",
        city: "Atlanta",
        state: "GA",
        price: 189_000,
        arv: 265_000,
        rent: Some(2350),
        strategy: Strategy::Section8,
        structure: Structure::SingleFamily,
        status: DealStatus::Ready,
        beds: 4,
        baths: 2,
        sqft: 1560,
        coordinate: Coordinate::new(33.749, -84.388),
    },
    Property {
        id: 3,
        address: "4129 Oak Crest Dr",
        city: "Phoenix",
        state: "AZ",
        price: 335_000,
        arv: 465_000,
        rent: None,
        strategy: Strategy::FixAndFlip,
        structure: Structure::SingleFamily,
        status: DealStatus::Underwriting,
        beds: 4,
        baths: 3,
        sqft: 2100,
        coordinate: Coordinate::new(33.4484, -112.074),
    },
    Property {
        id: 4,
        address: "97 Harbor View",
        city: "Tampa",
        state: "FL",
        price: 412_000,
        arv: 575_000,
        rent: None,
        strategy: Strategy::FixAndFlip,
        structure: Structure::SingleFamily,
        status: DealStatus::New,
        beds: 5,
        baths: 3,
        sqft: 2480,
        coordinate: Coordinate::new(27.9506, -82.4572),
    },
    Property {
        id: 5,
        address: "607 Parkside Ave",
        city: "Chicago",
        state: "IL",
        price: 260_000,
        arv: 355_000,
        rent: None,
        strategy: Strategy::Wholesale,
        structure: Structure::MultiFamily,
        status: DealStatus::Hot,
        beds: 6,
        baths: 3,
        sqft: 3200,
        coordinate: Coordinate::new(41.8781, -87.6298),
    },
    Property {
        id: 6,
        address: "210 Alder Row",
        city: "Cleveland",
        state: "OH",
        price: 142_000,
        arv: 205_000,
        rent: Some(1650),
        strategy: Strategy::StandardRental,
        structure: Structure::SingleFamily,
        status: DealStatus::Ready,
        beds: 3,
        baths: 1,
        sqft: 1260,
        coordinate: Coordinate::new(41.4993, -81.6944),
    },
    Property {
        id: 7,
        address: "55 Grove Place",
        city: "Indianapolis",
        state: "IN",
        price: 178_000,
        arv: 245_000,
        rent: Some(2600),
        strategy: Strategy::Section8,
        structure: Structure::MultiFamily,
        status: DealStatus::Underwriting,
        beds: 4,
        baths: 2,
        sqft: 1850,
        coordinate: Coordinate::new(39.7684, -86.1581),
    },
    Property {
        id: 8,
        address: "994 Lakehurst Rd",
        city: "Charlotte",
        state: "NC",
        price: 322_000,
        arv: 438_000,
        rent: Some(2700),
        strategy: Strategy::StandardRental,
        structure: Structure::SingleFamily,
        status: DealStatus::New,
        beds: 4,
        baths: 2,
        sqft: 2100,
        coordinate: Coordinate::new(35.2271, -80.8431),
    },
];

pub fn find_property(catalog: &'static [Property], id: PropertyId) -> Option<&'static Property> {
    catalog.iter().find(|p| p.id == id)
}

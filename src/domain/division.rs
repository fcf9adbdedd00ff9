use std::fmt;

use serde::{Deserialize, Serialize};

/// Administrative region used to locate sellers, buyers and produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Division {
    Dhaka,
    Chittagong,
    Rajshahi,
    Khulna,
    Barisal,
    Sylhet,
    Rangpur,
    Mymensingh,
}

impl Division {
    pub const ALL: [Division; 8] = [
        Division::Dhaka,
        Division::Chittagong,
        Division::Rajshahi,
        Division::Khulna,
        Division::Barisal,
        Division::Sylhet,
        Division::Rangpur,
        Division::Mymensingh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Dhaka => "Dhaka",
            Division::Chittagong => "Chittagong",
            Division::Rajshahi => "Rajshahi",
            Division::Khulna => "Khulna",
            Division::Barisal => "Barisal",
            Division::Sylhet => "Sylhet",
            Division::Rangpur => "Rangpur",
            Division::Mymensingh => "Mymensingh",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

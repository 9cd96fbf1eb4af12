use std::fmt::Display;

use crate::models::Price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    /// kilometres
    pub distance: u32,
    pub price: Price,
}

impl Destination {
    pub fn new(name: impl Into<String>, distance: u32, price: Price) -> Self {
        Self { name: name.into(), distance, price }
    }

    /// Rows seeded into the grid at startup
    pub fn samples() -> Vec<Destination> {
        vec![
            Destination::new("London - VIP", 100, Price::from_units(1200)),
            Destination::new("Berlin", 400, Price::from_units(800)),
            Destination::new("Paris", 200, Price::from_units(400)),
            Destination::new("Madrid", 150, Price::from_units(300)),
        ]
    }
}

/// Summary used as the window title for the selected row
impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} km {} $", self.name, self.distance, self.price)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary() {
        let berlin = Destination::new("Berlin", 400, Price::from_units(800));
        assert_eq!(berlin.to_string(), "Berlin 400 km 800 $");

        let cheap = Destination::new("Lyon", 450, Price::from_cents(9950));
        assert_eq!(cheap.to_string(), "Lyon 450 km 99.50 $");
    }

    #[test]
    fn test_samples() {
        let summaries: Vec<String> = Destination::samples().iter().map(|d| d.to_string()).collect();
        assert_eq!(
            summaries,
            vec![
                "London - VIP 100 km 1200 $",
                "Berlin 400 km 800 $",
                "Paris 200 km 400 $",
                "Madrid 150 km 300 $",
            ]
        );
    }
}

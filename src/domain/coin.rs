use crate::domain::money::Cents;
use crate::error::VendError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Measurable properties of a coin.
///
/// Diameter and thickness are in hundredths of a millimetre, weight in
/// milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalProperties {
    pub diameter: u32,
    pub thickness: u32,
    pub weight: u32,
}

/// The canonical identity a coin can physically resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Denomination {
    pub fn value(&self) -> Cents {
        match self {
            Denomination::Penny => Cents(1),
            Denomination::Nickel => Cents(5),
            Denomination::Dime => Cents(10),
            Denomination::Quarter => Cents(25),
        }
    }

    /// Whether the machine credits coins of this denomination.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Denomination::Penny)
    }

    /// The genuine coin of this denomination.
    pub fn coin(&self) -> Coin {
        match self {
            Denomination::Penny => Coin::Penny,
            Denomination::Nickel => Coin::Nickel,
            Denomination::Dime => Coin::Dime,
            Denomination::Quarter => Coin::Quarter,
        }
    }
}

struct DenominationSpec {
    denomination: Denomination,
    weight: RangeInclusive<u32>,
    diameter: RangeInclusive<u32>,
}

// Ranges must stay disjoint so a coin resolves to at most one denomination.
const SPECS: [DenominationSpec; 4] = [
    DenominationSpec {
        denomination: Denomination::Penny,
        weight: 2400..=2600,
        diameter: 1890..=1920,
    },
    DenominationSpec {
        denomination: Denomination::Nickel,
        weight: 4806..=5194,
        diameter: 2108..=2134,
    },
    DenominationSpec {
        denomination: Denomination::Dime,
        weight: 2178..=2358,
        diameter: 1778..=1804,
    },
    DenominationSpec {
        denomination: Denomination::Quarter,
        weight: 5443..=5897,
        diameter: 2413..=2439,
    },
];

/// Resolves physical properties to the denomination whose weight and
/// diameter tolerances they fall within.
pub fn identify(properties: &PhysicalProperties) -> Option<Denomination> {
    SPECS
        .iter()
        .find(|spec| {
            spec.weight.contains(&properties.weight)
                && spec.diameter.contains(&properties.diameter)
        })
        .map(|spec| spec.denomination)
}

/// Two coins match when both physically resolve to the same denomination.
///
/// The declared variant plays no part: a slug with nickel measurements
/// matches a nickel, and two unrecognisable slugs never match.
pub fn match_coins(a: &Coin, b: &Coin) -> bool {
    match (a.denomination(), b.denomination()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// A counterfeit or foreign coin with arbitrary measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    properties: PhysicalProperties,
    material: String,
}

impl Slug {
    pub fn new(diameter: u32, thickness: u32, weight: u32, material: impl Into<String>) -> Self {
        Self {
            properties: PhysicalProperties {
                diameter,
                thickness,
                weight,
            },
            material: material.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
    Slug(Slug),
}

impl Coin {
    pub fn slug(diameter: u32, thickness: u32, weight: u32, material: impl Into<String>) -> Self {
        Coin::Slug(Slug::new(diameter, thickness, weight, material))
    }

    pub fn properties(&self) -> PhysicalProperties {
        let (diameter, thickness, weight) = match self {
            Coin::Penny => (1905, 152, 2500),
            Coin::Nickel => (2121, 195, 5000),
            Coin::Dime => (1791, 135, 2268),
            Coin::Quarter => (2426, 175, 5670),
            Coin::Slug(slug) => return slug.properties,
        };
        PhysicalProperties {
            diameter,
            thickness,
            weight,
        }
    }

    pub fn material(&self) -> &str {
        match self {
            Coin::Penny => "copper-plated zinc",
            Coin::Nickel => "cupronickel",
            Coin::Dime | Coin::Quarter => "cupronickel clad",
            Coin::Slug(slug) => &slug.material,
        }
    }

    pub fn denomination(&self) -> Option<Denomination> {
        identify(&self.properties())
    }

    /// Face value as judged by measurement; zero when unrecognised.
    pub fn value(&self) -> Cents {
        self.denomination()
            .map(|d| d.value())
            .unwrap_or(Cents::ZERO)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coin::Penny => f.write_str("penny"),
            Coin::Nickel => f.write_str("nickel"),
            Coin::Dime => f.write_str("dime"),
            Coin::Quarter => f.write_str("quarter"),
            Coin::Slug(slug) => write!(
                f,
                "slug:{}:{}:{}:{}",
                slug.properties.diameter,
                slug.properties.thickness,
                slug.properties.weight,
                slug.material
            ),
        }
    }
}

impl FromStr for Coin {
    type Err = VendError;

    /// Parses `penny`, `nickel`, `dime`, `quarter` or
    /// `slug:<diameter>:<thickness>:<weight>:<material>`. The material may
    /// not contain `;`, which separates coins in a returned list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "penny" => return Ok(Coin::Penny),
            "nickel" => return Ok(Coin::Nickel),
            "dime" => return Ok(Coin::Dime),
            "quarter" => return Ok(Coin::Quarter),
            _ => {}
        }

        let mut parts = token.splitn(5, ':');
        if !parts
            .next()
            .is_some_and(|head| head.eq_ignore_ascii_case("slug"))
        {
            return Err(VendError::InvalidCoin(token.to_string()));
        }
        let mut measure = || -> Result<u32, VendError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| VendError::InvalidCoin(token.to_string()))
        };
        let diameter = measure()?;
        let thickness = measure()?;
        let weight = measure()?;
        let material = parts.next().unwrap_or_default();
        if material.contains(';') {
            return Err(VendError::InvalidCoin(token.to_string()));
        }
        Ok(Coin::slug(diameter, thickness, weight, material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genuine_coins_identify_as_themselves() {
        assert_eq!(Coin::Penny.denomination(), Some(Denomination::Penny));
        assert_eq!(Coin::Nickel.denomination(), Some(Denomination::Nickel));
        assert_eq!(Coin::Dime.denomination(), Some(Denomination::Dime));
        assert_eq!(Coin::Quarter.denomination(), Some(Denomination::Quarter));
    }

    #[test]
    fn test_match_coins() {
        let slug = Coin::slug(2121, 195, 5000, "Plain");
        assert!(match_coins(&Coin::Quarter, &Coin::Quarter));
        assert!(!match_coins(&Coin::Quarter, &Coin::Nickel));
        assert!(!match_coins(&Coin::Quarter, &slug));
        assert!(match_coins(&slug, &Coin::Nickel));
    }

    #[test]
    fn test_unrecognised_slugs_never_match() {
        let a = Coin::slug(1, 1, 1, "rough");
        let b = Coin::slug(1, 1, 1, "rough");
        assert_eq!(a.denomination(), None);
        assert!(!match_coins(&a, &b));
    }

    #[test]
    fn test_identify_uses_weight_and_diameter_only() {
        let thin_quarter = Coin::slug(2426, 10, 5670, "brass");
        assert_eq!(thin_quarter.denomination(), Some(Denomination::Quarter));

        let light_quarter = Coin::slug(2426, 175, 3000, "aluminium");
        assert_eq!(light_quarter.denomination(), None);
    }

    #[test]
    fn test_material_is_descriptive_only() {
        assert_eq!(Coin::Nickel.material(), "cupronickel");
        let slug = Coin::slug(2121, 195, 5000, "Plain");
        assert_eq!(slug.material(), "Plain");
        assert_eq!(slug.properties(), Coin::Nickel.properties());
    }

    #[test]
    fn test_value_follows_measurement() {
        assert_eq!(Coin::Quarter.value(), Cents(25));
        assert_eq!(Coin::slug(2121, 195, 5000, "Plain").value(), Cents(5));
        assert_eq!(Coin::slug(1, 1, 1, "rough").value(), Cents::ZERO);
    }

    #[test]
    fn test_specs_are_disjoint() {
        for (i, a) in SPECS.iter().enumerate() {
            for b in SPECS.iter().skip(i + 1) {
                let weights_overlap =
                    a.weight.start() <= b.weight.end() && b.weight.start() <= a.weight.end();
                let diameters_overlap = a.diameter.start() <= b.diameter.end()
                    && b.diameter.start() <= a.diameter.end();
                assert!(!(weights_overlap && diameters_overlap));
            }
        }
    }

    #[test]
    fn test_parse_coin_tokens() {
        assert_eq!("quarter".parse::<Coin>().unwrap(), Coin::Quarter);
        assert_eq!(" Dime ".parse::<Coin>().unwrap(), Coin::Dime);
        assert_eq!(
            "slug:2121:195:5000:Plain".parse::<Coin>().unwrap(),
            Coin::slug(2121, 195, 5000, "Plain")
        );
        assert!(matches!(
            "doubloon".parse::<Coin>(),
            Err(VendError::InvalidCoin(_))
        ));
        assert!(matches!(
            "slug:12:x:3:tin".parse::<Coin>(),
            Err(VendError::InvalidCoin(_))
        ));
    }

    #[test]
    fn test_parse_rejects_list_separator_in_material() {
        assert!(matches!(
            "slug:2121:195:5000:tin;quarter".parse::<Coin>(),
            Err(VendError::InvalidCoin(_))
        ));
        assert_eq!(
            "slug:2121:195:5000:tin,lead".parse::<Coin>().unwrap(),
            Coin::slug(2121, 195, 5000, "tin,lead")
        );
    }

    #[test]
    fn test_display_token_parses_back() {
        let slug = Coin::slug(1, 2, 3, "lead");
        assert_eq!(slug.to_string(), "slug:1:2:3:lead");
        assert_eq!(slug.to_string().parse::<Coin>().unwrap(), slug);
    }
}

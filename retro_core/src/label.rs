//! # Energy Label Classifier
//!
//! Maps the area-weighted annual energy intensity of a dwelling
//! (kWh/m²/year) to a discrete energy label, from G (worst) to A+++++
//! (best). The bracket boundaries follow the Dutch label scale; each
//! bracket is inclusive at its upper bound and exclusive at its lower
//! bound, except the open-ended top and bottom brackets.
//!
//! Each label also carries a fixed display color (red for the worst
//! through cyan for the best) used by the GUI badge and the PDF report.

use serde::{Deserialize, Serialize};

/// Discrete energy label.
///
/// Variants are declared worst-first so the derived `Ord` ranks labels:
/// `EnergyLabel::G < EnergyLabel::APlus5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnergyLabel {
    G,
    F,
    E,
    D,
    C,
    B,
    A,
    /// A+
    APlus,
    /// A++
    APlus2,
    /// A+++
    APlus3,
    /// A++++
    APlus4,
    /// A+++++
    APlus5,
}

impl EnergyLabel {
    /// All labels, worst to best
    pub const ALL: [EnergyLabel; 12] = [
        EnergyLabel::G,
        EnergyLabel::F,
        EnergyLabel::E,
        EnergyLabel::D,
        EnergyLabel::C,
        EnergyLabel::B,
        EnergyLabel::A,
        EnergyLabel::APlus,
        EnergyLabel::APlus2,
        EnergyLabel::APlus3,
        EnergyLabel::APlus4,
        EnergyLabel::APlus5,
    ];

    /// Human-readable label text
    pub fn display_name(&self) -> &'static str {
        match self {
            EnergyLabel::G => "G",
            EnergyLabel::F => "F",
            EnergyLabel::E => "E",
            EnergyLabel::D => "D",
            EnergyLabel::C => "C",
            EnergyLabel::B => "B",
            EnergyLabel::A => "A",
            EnergyLabel::APlus => "A+",
            EnergyLabel::APlus2 => "A++",
            EnergyLabel::APlus3 => "A+++",
            EnergyLabel::APlus4 => "A++++",
            EnergyLabel::APlus5 => "A+++++",
        }
    }

    /// Display color as a hex string, red (worst) through cyan (best)
    pub fn color_hex(&self) -> &'static str {
        match self {
            EnergyLabel::G => "#FF0000",
            EnergyLabel::F => "#FF4000",
            EnergyLabel::E => "#FF8000",
            EnergyLabel::D => "#FFBF00",
            EnergyLabel::C => "#FFFF00",
            EnergyLabel::B => "#BFFF00",
            EnergyLabel::A => "#80FF00",
            EnergyLabel::APlus => "#40FF00",
            EnergyLabel::APlus2 => "#00FF00",
            EnergyLabel::APlus3 => "#00FF80",
            EnergyLabel::APlus4 => "#00FFBF",
            EnergyLabel::APlus5 => "#00FFFF",
        }
    }

    /// Display color as (r, g, b) bytes, for renderers that want components
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        let hex = &self.color_hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0xFF);
        (channel(0), channel(2), channel(4))
    }

    /// Rank of this label, 0 = G (worst) through 11 = A+++++ (best)
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify an annual energy intensity (kWh/m²/year) into a label.
///
/// The bracket table, highest intensity first:
///
/// | Intensity (kWh/m²/yr) | Label  |
/// |-----------------------|--------|
/// | > 355.01              | G      |
/// | (325.01, 355.01]      | F      |
/// | (295.01, 325.01]      | E      |
/// | (260.01, 295.01]      | D      |
/// | (230.01, 260.01]      | C      |
/// | (210.01, 230.01]      | B      |
/// | (180.01, 210.01]      | A      |
/// | (135.01, 180.01]      | A+     |
/// | (90.01, 135.01]       | A++    |
/// | (45.01, 90.01]        | A+++   |
/// | (0.01, 45.01]         | A++++  |
/// | ≤ 0.01                | A+++++ |
pub fn classify(kwh_per_m2_per_year: f64) -> EnergyLabel {
    if kwh_per_m2_per_year > 355.01 {
        EnergyLabel::G
    } else if kwh_per_m2_per_year > 325.01 {
        EnergyLabel::F
    } else if kwh_per_m2_per_year > 295.01 {
        EnergyLabel::E
    } else if kwh_per_m2_per_year > 260.01 {
        EnergyLabel::D
    } else if kwh_per_m2_per_year > 230.01 {
        EnergyLabel::C
    } else if kwh_per_m2_per_year > 210.01 {
        EnergyLabel::B
    } else if kwh_per_m2_per_year > 180.01 {
        EnergyLabel::A
    } else if kwh_per_m2_per_year > 135.01 {
        EnergyLabel::APlus
    } else if kwh_per_m2_per_year > 90.01 {
        EnergyLabel::APlus2
    } else if kwh_per_m2_per_year > 45.01 {
        EnergyLabel::APlus3
    } else if kwh_per_m2_per_year > 0.01 {
        EnergyLabel::APlus4
    } else {
        EnergyLabel::APlus5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        // Upper bounds are inclusive, so the boundary value stays in the
        // better bracket.
        assert_eq!(classify(400.0), EnergyLabel::G);
        assert_eq!(classify(355.02), EnergyLabel::G);
        assert_eq!(classify(355.01), EnergyLabel::F);
        assert_eq!(classify(325.01), EnergyLabel::E);
        assert_eq!(classify(295.01), EnergyLabel::D);
        assert_eq!(classify(260.01), EnergyLabel::C);
        assert_eq!(classify(230.01), EnergyLabel::B);
        assert_eq!(classify(210.01), EnergyLabel::A);
        assert_eq!(classify(180.01), EnergyLabel::APlus);
        assert_eq!(classify(135.01), EnergyLabel::APlus2);
        assert_eq!(classify(90.01), EnergyLabel::APlus3);
        assert_eq!(classify(45.01), EnergyLabel::APlus4);
        assert_eq!(classify(0.01), EnergyLabel::APlus5);
        assert_eq!(classify(0.0), EnergyLabel::APlus5);
    }

    #[test]
    fn test_mid_bracket_values() {
        assert_eq!(classify(100.0), EnergyLabel::APlus2);
        assert_eq!(classify(60.0), EnergyLabel::APlus3);
        assert_eq!(classify(200.0), EnergyLabel::A);
    }

    #[test]
    fn test_monotonic() {
        // Increasing intensity never improves the label.
        let mut previous = classify(0.0);
        let mut intensity = 0.0;
        while intensity < 500.0 {
            let label = classify(intensity);
            assert!(label <= previous, "label improved as intensity rose, at {intensity}");
            previous = label;
            intensity += 0.25;
        }
    }

    #[test]
    fn test_rank_ordering() {
        assert_eq!(EnergyLabel::G.rank(), 0);
        assert_eq!(EnergyLabel::APlus5.rank(), 11);
        assert!(EnergyLabel::G < EnergyLabel::A);
        assert!(EnergyLabel::APlus < EnergyLabel::APlus2);
    }

    #[test]
    fn test_display_and_colors() {
        assert_eq!(EnergyLabel::APlus3.display_name(), "A+++");
        assert_eq!(EnergyLabel::G.color_hex(), "#FF0000");
        assert_eq!(EnergyLabel::APlus5.color_hex(), "#00FFFF");
        assert_eq!(EnergyLabel::G.color_rgb(), (0xFF, 0x00, 0x00));
        assert_eq!(EnergyLabel::APlus2.color_rgb(), (0x00, 0xFF, 0x00));
    }

    #[test]
    fn test_serialization() {
        let label = EnergyLabel::APlus2;
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"APlus2\"");

        let roundtrip: EnergyLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, label);
    }
}

//! Sports Fixtures

use crate::catalog::*;
use lux_core::fixture::DistributionType;

lazy_static! {
    /// Built-in sports lighting fixtures.
    pub static ref SPORTS_FIXTURES: Vec<CatalogEntry> = SPORTS
        .iter()
        .map(|b| b.entry(Category::Sports))
        .collect();
}

const SPORTS: [Builtin; 4] = [
    Builtin {
        id: "sp_flood_2000w",
        name: "Sports Floodlight 2000W",
        kind: "flood",
        power: 2000.0,
        lumens: 280_000.0,
        efficacy: 140.0,
        beam: (60.0, 40.0),
        color_temperature: 5700.0,
        cri: 80.0,
        mounting: (15.0, 50.0, 25.0),
        dimensions: (800.0, 600.0, 200.0),
        weight: 45.0,
        peak_intensity: 185_000.0,
        distribution: DistributionType::TypeII,
        cutoff_angle: 80.0,
        field_angle: 60.0,
        applications: &["football", "soccer", "athletics", "general sports"],
        manufacturer: "CalqLux Sports",
        model: "CSF-2000-LED",
        price: 2500.0,
    },
    Builtin {
        id: "sp_flood_1000w",
        name: "Sports Floodlight 1000W",
        kind: "flood",
        power: 1000.0,
        lumens: 140_000.0,
        efficacy: 140.0,
        beam: (50.0, 35.0),
        color_temperature: 5700.0,
        cri: 80.0,
        mounting: (12.0, 35.0, 20.0),
        dimensions: (600.0, 450.0, 150.0),
        weight: 28.0,
        peak_intensity: 92_500.0,
        distribution: DistributionType::TypeII,
        cutoff_angle: 75.0,
        field_angle: 50.0,
        applications: &["tennis", "basketball", "volleyball", "small fields"],
        manufacturer: "CalqLux Sports",
        model: "CSF-1000-LED",
        price: 1800.0,
    },
    Builtin {
        id: "sp_stadium_4000w",
        name: "Stadium Light 4000W",
        kind: "stadium",
        power: 4000.0,
        lumens: 600_000.0,
        efficacy: 150.0,
        beam: (80.0, 50.0),
        color_temperature: 5700.0,
        cri: 85.0,
        mounting: (25.0, 80.0, 45.0),
        dimensions: (1200.0, 800.0, 300.0),
        weight: 95.0,
        peak_intensity: 400_000.0,
        distribution: DistributionType::TypeIII,
        cutoff_angle: 85.0,
        field_angle: 80.0,
        applications: &["football stadium", "large athletics", "cricket", "baseball"],
        manufacturer: "CalqLux Stadium",
        model: "CSL-4000-PRO",
        price: 8500.0,
    },
    Builtin {
        id: "sp_area_500w",
        name: "Area Light 500W",
        kind: "area",
        power: 500.0,
        lumens: 70_000.0,
        efficacy: 140.0,
        beam: (120.0, 90.0),
        color_temperature: 4000.0,
        cri: 80.0,
        mounting: (8.0, 20.0, 12.0),
        dimensions: (400.0, 300.0, 100.0),
        weight: 15.0,
        peak_intensity: 25_000.0,
        distribution: DistributionType::TypeV,
        cutoff_angle: 90.0,
        field_angle: 120.0,
        applications: &["training areas", "walkways", "parking", "general illumination"],
        manufacturer: "CalqLux General",
        model: "CGL-500-LED",
        price: 650.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sports_catalog() {
        assert_eq!(SPORTS_FIXTURES.len(), 4);
        assert!(SPORTS_FIXTURES.iter().all(|e| e.category == Category::Sports));

        let stadium = &SPORTS_FIXTURES[2];
        assert_eq!(stadium.id(), "sp_stadium_4000w");
        assert_eq!(stadium.fixture_type.spec.efficacy, 150.0);
        assert_eq!(stadium.fixture_type.peak_intensity(), 400_000.0);
        assert_eq!(stadium.fixture_type.spec.mounting_height.recommended, Some(45.0));
    }
}

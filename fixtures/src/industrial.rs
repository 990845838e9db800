//! Industrial Fixtures

use crate::catalog::*;
use lux_core::fixture::DistributionType;

lazy_static! {
    /// Built-in industrial and security lighting fixtures.
    pub static ref INDUSTRIAL_FIXTURES: Vec<CatalogEntry> = INDUSTRIAL
        .iter()
        .map(|b| b.entry(Category::Industrial))
        .collect();
}

const INDUSTRIAL: [Builtin; 4] = [
    Builtin {
        id: "in_flood_3000w",
        name: "Industrial Floodlight 3000W",
        kind: "flood",
        power: 3000.0,
        lumens: 420_000.0,
        efficacy: 140.0,
        beam: (70.0, 45.0),
        color_temperature: 5000.0,
        cri: 70.0,
        mounting: (20.0, 60.0, 35.0),
        dimensions: (1000.0, 700.0, 250.0),
        weight: 65.0,
        peak_intensity: 280_000.0,
        distribution: DistributionType::TypeII,
        cutoff_angle: 80.0,
        field_angle: 70.0,
        applications: &["construction sites", "industrial yards", "cargo areas", "mining"],
        manufacturer: "CalqLux Industrial",
        model: "CIF-3000-HD",
        price: 4200.0,
    },
    Builtin {
        id: "in_security_200w",
        name: "Security Light 200W",
        kind: "security",
        power: 200.0,
        lumens: 28_000.0,
        efficacy: 140.0,
        beam: (110.0, 80.0),
        color_temperature: 6500.0,
        cri: 70.0,
        mounting: (5.0, 15.0, 8.0),
        dimensions: (300.0, 200.0, 80.0),
        weight: 8.0,
        peak_intensity: 12_000.0,
        distribution: DistributionType::TypeIV,
        cutoff_angle: 85.0,
        field_angle: 110.0,
        applications: &["perimeter security", "entrance lighting", "surveillance areas"],
        manufacturer: "CalqLux Security",
        model: "CSL-200-SEC",
        price: 420.0,
    },
    Builtin {
        id: "in_highbay_400w",
        name: "High Bay 400W",
        kind: "highbay",
        power: 400.0,
        lumens: 56_000.0,
        efficacy: 140.0,
        beam: (90.0, 90.0),
        color_temperature: 5000.0,
        cri: 80.0,
        mounting: (10.0, 25.0, 15.0),
        dimensions: (350.0, 350.0, 200.0),
        weight: 18.0,
        peak_intensity: 28_000.0,
        distribution: DistributionType::TypeV,
        cutoff_angle: 90.0,
        field_angle: 90.0,
        applications: &["warehouses", "industrial halls", "manufacturing"],
        manufacturer: "CalqLux Industrial",
        model: "CIH-400-LED",
        price: 580.0,
    },
    Builtin {
        id: "in_tower_1500w",
        name: "Tower Light 1500W",
        kind: "tower",
        power: 1500.0,
        lumens: 210_000.0,
        efficacy: 140.0,
        beam: (360.0, 60.0),
        color_temperature: 5000.0,
        cri: 70.0,
        mounting: (15.0, 50.0, 30.0),
        dimensions: (600.0, 600.0, 400.0),
        weight: 55.0,
        peak_intensity: 140_000.0,
        distribution: DistributionType::TypeV,
        cutoff_angle: 80.0,
        field_angle: 360.0,
        applications: &["construction towers", "emergency lighting", "temporary installations"],
        manufacturer: "CalqLux Tower",
        model: "CTL-1500-360",
        price: 3200.0,
    },
];

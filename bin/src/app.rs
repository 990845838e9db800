//! Application related stuff

use clap::Parser;
use fixtures::*;
use lux_core::area::*;
use lux_core::contour::DEFAULT_CONTOUR_LEVELS;
use lux_core::energy::*;
use lux_core::fixture::*;
use lux_core::geometry::*;
use lux_core::layout::*;
use lux_core::math::*;

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Number of threads to use for the grid scan.
    #[clap(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads for the grid scan."
    )]
    n_threads: usize,

    /// Standard to check compliance against.
    #[clap(
        long,
        short = 's',
        value_name = "ID",
        default_value = "fifa",
        help = "Standard to check against (fifa, uefa, ies, custom)."
    )]
    pub standard: String,

    /// Calculation area.
    #[clap(
        long,
        short = 'a',
        value_name = "X,Y,W,H",
        default_value = "0,0,105,68",
        help = "Calculation area origin and size in metres."
    )]
    pub area: String,

    /// Elevation of the calculation plane.
    #[clap(long, value_name = "METRES", default_value_t = 0.0, help = "Elevation of the calculation plane.")]
    pub elevation: Float,

    /// Grid spacing.
    #[clap(
        long,
        value_name = "METRES",
        default_value_t = 2.0,
        help = "Distance between grid points."
    )]
    pub spacing: Float,

    /// Surface reflectance used for the diffuse term.
    #[clap(long, value_name = "RATIO", default_value_t = 0.2, help = "Surface reflectance (0-1).")]
    pub reflectance: Float,

    /// Manually placed fixtures.
    #[clap(
        long = "fixture",
        short = 'f',
        value_name = "ID@X,Y,Z[,ROT[,TILT]]",
        help = "Place a catalog fixture. Rotation and tilt are in degrees."
    )]
    pub fixtures: Vec<String>,

    /// Add fixtures from a generated layout.
    #[clap(long, help = "Generate a fixture layout for the area.")]
    pub optimize: bool,

    /// Restrict layout candidates to a catalog category.
    #[clap(long, value_name = "CATEGORY", help = "Only consider fixtures from this category.")]
    pub category: Option<String>,

    /// Target average illuminance for layouts.
    #[clap(long, value_name = "LUX", default_value_t = 200.0, help = "Target average illuminance.")]
    pub target_lux: Float,

    /// Target uniformity for layouts.
    #[clap(long, value_name = "RATIO", default_value_t = 0.4, help = "Target uniformity ratio.")]
    pub target_uniformity: Float,

    /// Mounting height for layouts.
    #[clap(long, value_name = "METRES", default_value_t = 20.0, help = "Mounting height for layouts.")]
    pub mounting_height: Float,

    /// Tilt of generated fixtures.
    #[clap(
        long,
        value_name = "DEGREES",
        default_value_t = -90.0,
        allow_hyphen_values = true,
        help = "Tilt of generated fixtures; -90 aims straight down."
    )]
    pub layout_tilt: Float,

    /// Spill threshold.
    #[clap(long, value_name = "LUX", default_value_t = 1.0, help = "Spill threshold.")]
    pub spill_threshold: Float,

    /// Distance of the spill boundary outside the area.
    #[clap(long, value_name = "METRES", default_value_t = 5.0, help = "Spill boundary offset.")]
    pub spill_offset: Float,

    /// Contour levels.
    #[clap(
        long,
        value_name = "LUX,...",
        value_delimiter = ',',
        help = "Isolux contour levels."
    )]
    pub levels: Vec<Float>,

    /// Glare observer.
    #[clap(
        long,
        value_name = "X,Y,Z,DIR",
        help = "Observer position and horizontal view direction in degrees for a glare rating."
    )]
    pub observer: Option<String>,

    /// Electricity rate.
    #[clap(long, value_name = "PER_KWH", default_value_t = 0.15, help = "Electricity cost per kWh.")]
    pub rate: Float,

    /// Operating hours per day.
    #[clap(long, value_name = "HOURS", default_value_t = 8.0, help = "Operating hours per day.")]
    pub hours: Float,

    /// List the fixture catalog and exit.
    #[clap(long, help = "List the fixture catalog and exit.")]
    pub list_fixtures: bool,

    /// Suppress all text output other than error messages.
    #[clap(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the calculation area.
    pub fn calculation_area(&self) -> Result<Area, String> {
        let v = parse_floats(&self.area, 4, 4).map_err(|e| format!("Invalid area '{}': {e}", self.area))?;
        Ok(Area::new(v[0], v[1], v[2], v[3]).with_elevation(self.elevation))
    }

    /// Returns the contour levels.
    pub fn contour_levels(&self) -> Vec<Float> {
        if self.levels.is_empty() {
            DEFAULT_CONTOUR_LEVELS.to_vec()
        } else {
            self.levels.clone()
        }
    }

    /// Returns the glare observer position and view direction.
    pub fn glare_observer(&self) -> Result<Option<(Point3f, Float)>, String> {
        match &self.observer {
            Some(s) => {
                let v = parse_floats(s, 4, 4).map_err(|e| format!("Invalid observer '{s}': {e}"))?;
                Ok(Some((Point3f::new(v[0], v[1], v[2]), v[3])))
            }
            None => Ok(None),
        }
    }

    /// Returns the layout requirements.
    pub fn layout_requirements(&self) -> LayoutRequirements {
        LayoutRequirements {
            target_illuminance: self.target_lux,
            target_uniformity: self.target_uniformity,
            mounting_height: self.mounting_height,
        }
    }

    /// Returns the energy tariff.
    pub fn tariff(&self) -> EnergyTariff {
        EnergyTariff {
            hours_per_day: self.hours,
            rate: self.rate,
            ..Default::default()
        }
    }

    /// Returns the catalog category to draw layout candidates from.
    pub fn candidate_category(&self) -> Result<Option<Category>, String> {
        self.category.as_deref().map(str::parse).transpose()
    }
}

/// Parse a `--fixture` argument of the form `ID@X,Y,Z[,ROT[,TILT]]` and place
/// the catalog fixture.
///
/// * `arg`     - The argument.
/// * `n`       - Placement number used for the fixture identifier.
/// * `library` - The fixture catalog.
pub fn parse_placement(arg: &str, n: usize, library: &FixtureLibrary) -> Result<Fixture, String> {
    let (id, coords) = arg
        .split_once('@')
        .ok_or(format!("Invalid fixture '{arg}': expected ID@X,Y,Z[,ROT[,TILT]]"))?;

    let entry = library
        .get(id.trim())
        .ok_or(format!("Unknown fixture type '{id}'"))?;

    let v = parse_floats(coords, 3, 5).map_err(|e| format!("Invalid fixture '{arg}': {e}"))?;
    let rotation = v.get(3).copied().unwrap_or(0.0);
    let tilt = v.get(4).copied().unwrap_or(0.0);

    Ok(Fixture::new(
        &format!("{}_{}", entry.id(), n),
        entry.fixture_type.clone(),
        Point3f::new(v[0], v[1], v[2]),
        Orientation::new(rotation, tilt),
    ))
}

/// Parse a comma separated list of numbers.
///
/// * `s`   - The list.
/// * `min` - Minimum number of values.
/// * `max` - Maximum number of values.
fn parse_floats(s: &str, min: usize, max: usize) -> Result<Vec<Float>, String> {
    let values = s
        .split(',')
        .map(|t| t.trim().parse::<Float>().map_err(|e| format!("'{}' {e}", t.trim())))
        .collect::<Result<Vec<Float>, String>>()?;

    if values.len() < min || values.len() > max {
        Err(format!("expected {min} to {max} values, got {}", values.len()))
    } else {
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = Options::parse_from(["luxcalc"]);
        assert_eq!(options.standard, "fifa");
        assert_eq!(options.spacing, 2.0);
        assert_eq!(options.threads(), 1);
        assert_eq!(options.contour_levels(), DEFAULT_CONTOUR_LEVELS.to_vec());
        assert_eq!(options.tariff(), EnergyTariff::default());
        assert_eq!(options.glare_observer(), Ok(None));
        assert_eq!(options.candidate_category(), Ok(None));
        assert_eq!(options.layout_tilt, -90.0);

        let area = options.calculation_area().unwrap();
        assert_eq!((area.width, area.height), (105.0, 68.0));
    }

    #[test]
    fn custom_options() {
        let options = Options::parse_from([
            "luxcalc",
            "--area",
            "10,20,30,40",
            "--elevation",
            "1.5",
            "--levels",
            "5,50",
            "--observer",
            "0,0,1.7,90",
            "--category",
            "industrial",
            "-f",
            "sp_area_500w@0,0,10",
            "-f",
            "sp_area_500w@5,0,10,45,-30",
        ]);
        let area = options.calculation_area().unwrap();
        assert_eq!(area.origin, Point2::new(10.0, 20.0));
        assert_eq!(area.elevation, 1.5);
        assert_eq!(options.contour_levels(), vec![5.0, 50.0]);
        assert_eq!(
            options.glare_observer(),
            Ok(Some((Point3f::new(0.0, 0.0, 1.7), 90.0)))
        );
        assert_eq!(options.candidate_category(), Ok(Some(Category::Industrial)));
        assert_eq!(options.fixtures.len(), 2);
    }

    #[test]
    fn bad_area() {
        let options = Options::parse_from(["luxcalc", "--area", "1,2,x,4"]);
        assert!(options.calculation_area().is_err());
        let options = Options::parse_from(["luxcalc", "--area", "1,2,3"]);
        assert!(options.calculation_area().is_err());
    }

    #[test]
    fn placements() {
        let library = FixtureLibrary::new();

        let f = parse_placement("sp_flood_1000w@1,2,15,90,-45", 3, &library).unwrap();
        assert_eq!(f.id, "sp_flood_1000w_3");
        assert_eq!(f.position, Point3f::new(1.0, 2.0, 15.0));
        assert_eq!(f.orientation, Orientation::new(90.0, -45.0));

        let f = parse_placement("in_highbay_400w@0,0,12", 1, &library).unwrap();
        assert_eq!(f.orientation, Orientation::default());

        assert!(parse_placement("in_highbay_400w", 1, &library).is_err());
        assert!(parse_placement("nope@0,0,1", 1, &library).is_err());
        assert!(parse_placement("in_highbay_400w@0,0", 1, &library).is_err());
        assert!(parse_placement("in_highbay_400w@0,0,1,2,3,4", 1, &library).is_err());
    }
}

//! Energy Estimates

use crate::fixture::*;
use crate::math::*;
use std::fmt;

/// Operating assumptions for energy estimates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyTariff {
    /// Operating hours per day.
    pub hours_per_day: Float,

    /// Electricity cost per kWh.
    pub rate: Float,

    /// kg CO₂ emitted per kWh.
    pub co2_per_kwh: Float,
}

impl Default for EnergyTariff {
    fn default() -> Self {
        Self {
            hours_per_day: 8.0,
            rate: 0.15,
            co2_per_kwh: 0.5,
        }
    }
}

/// Estimated consumption of a set of fixtures.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PowerConsumption {
    /// Total electrical power in W.
    pub total_power: Float,

    /// kWh per day.
    pub energy_per_day: Float,

    /// kWh per year.
    pub energy_per_year: Float,

    /// Operating cost per year.
    pub operating_cost_per_year: Float,

    /// kg CO₂ per year.
    pub co2_per_year: Float,
}

/// Estimate power, energy, cost and emissions.
///
/// * `fixtures` - Placed fixtures.
/// * `tariff`   - Operating assumptions.
pub fn power_consumption(fixtures: &[Fixture], tariff: &EnergyTariff) -> PowerConsumption {
    let total_power: Float = fixtures.iter().map(|f| f.spec().power).sum();
    let energy_per_day = total_power * tariff.hours_per_day / 1000.0;
    let energy_per_year = energy_per_day * 365.0;

    PowerConsumption {
        total_power,
        energy_per_day,
        energy_per_year,
        operating_cost_per_year: energy_per_year * tariff.rate,
        co2_per_year: energy_per_year * tariff.co2_per_kwh,
    }
}

impl fmt::Display for PowerConsumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} W, {:.1} kWh/day, {:.0} kWh/year, cost {:.0}/year, {:.0} kg CO2/year",
            self.total_power,
            self.energy_per_day,
            self.energy_per_year,
            self.operating_cost_per_year,
            self.co2_per_year
        )
    }
}

//! Unit conversions

use super::Float;

/// Feet per metre.
pub const FEET_PER_METER: Float = 3.28084;

/// Foot-candles per lux.
pub const FOOT_CANDLES_PER_LUX: Float = 0.092903;

/// Converts metres to feet.
///
/// * `meters` - Length in metres.
pub fn meters_to_feet(meters: Float) -> Float {
    meters * FEET_PER_METER
}

/// Converts feet to metres.
///
/// * `feet` - Length in feet.
pub fn feet_to_meters(feet: Float) -> Float {
    feet / FEET_PER_METER
}

/// Converts lux to foot-candles.
///
/// * `lux` - Illuminance in lux.
pub fn lux_to_foot_candles(lux: Float) -> Float {
    lux * FOOT_CANDLES_PER_LUX
}

/// Converts foot-candles to lux.
///
/// * `fc` - Illuminance in foot-candles.
pub fn foot_candles_to_lux(fc: Float) -> Float {
    fc / FOOT_CANDLES_PER_LUX
}

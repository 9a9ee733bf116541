//! Per-city baseline parameter tables.
//!
//! These are the undisturbed reference values every indicator family is
//! generated around. They are illustrative configuration constants carried
//! over from the regional dataset, not derived quantities. Reproduce them
//! exactly; do not recalibrate.

use crate::City;

/// Temperature baselines: annual mean (°C) and the amplitude of the
/// within-year sinusoid.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureParams {
    pub baseline_c: f64,
    pub seasonal_amplitude: f64,
}

pub fn temperature(city: City) -> TemperatureParams {
    match city {
        City::Hewler => TemperatureParams {
            baseline_c: 33.0,
            seasonal_amplitude: 15.0,
        },
        City::Dihok => TemperatureParams {
            baseline_c: 31.0,
            seasonal_amplitude: 14.0,
        },
        City::Silemani => TemperatureParams {
            baseline_c: 30.0,
            seasonal_amplitude: 13.0,
        },
        City::Helebce => TemperatureParams {
            baseline_c: 29.0,
            seasonal_amplitude: 13.0,
        },
        City::Kerkuk => TemperatureParams {
            baseline_c: 34.0,
            seasonal_amplitude: 16.0,
        },
    }
}

/// Rainfall baselines: annual total (mm) and the relative spread of the
/// multiplicative monthly noise factor.
#[derive(Debug, Clone, Copy)]
pub struct RainfallParams {
    pub annual_mm: f64,
    pub noise_spread: f64,
}

pub fn rainfall(city: City) -> RainfallParams {
    match city {
        City::Hewler => RainfallParams {
            annual_mm: 400.0,
            noise_spread: 0.8,
        },
        City::Dihok => RainfallParams {
            annual_mm: 550.0,
            noise_spread: 0.7,
        },
        City::Silemani => RainfallParams {
            annual_mm: 650.0,
            noise_spread: 0.6,
        },
        City::Helebce => RainfallParams {
            annual_mm: 700.0,
            noise_spread: 0.6,
        },
        City::Kerkuk => RainfallParams {
            annual_mm: 350.0,
            noise_spread: 0.9,
        },
    }
}

/// Water-resource baselines: river discharge (m³/s) and groundwater level (m).
#[derive(Debug, Clone, Copy)]
pub struct WaterParams {
    pub river_baseline: f64,
    pub groundwater_baseline: f64,
}

pub fn water(city: City) -> WaterParams {
    match city {
        City::Hewler => WaterParams {
            river_baseline: 100.0,
            groundwater_baseline: 50.0,
        },
        City::Dihok => WaterParams {
            river_baseline: 150.0,
            groundwater_baseline: 45.0,
        },
        City::Silemani => WaterParams {
            river_baseline: 120.0,
            groundwater_baseline: 55.0,
        },
        City::Helebce => WaterParams {
            river_baseline: 90.0,
            groundwater_baseline: 60.0,
        },
        City::Kerkuk => WaterParams {
            river_baseline: 80.0,
            groundwater_baseline: 40.0,
        },
    }
}

/// Economic baselines: energy demand (MW) and agricultural output (tons).
#[derive(Debug, Clone, Copy)]
pub struct EconomicParams {
    pub energy_mw: f64,
    pub agriculture_tons: f64,
}

pub fn economic(city: City) -> EconomicParams {
    match city {
        City::Hewler => EconomicParams {
            energy_mw: 1000.0,
            agriculture_tons: 800.0,
        },
        City::Dihok => EconomicParams {
            energy_mw: 800.0,
            agriculture_tons: 1000.0,
        },
        City::Silemani => EconomicParams {
            energy_mw: 900.0,
            agriculture_tons: 1100.0,
        },
        City::Helebce => EconomicParams {
            energy_mw: 700.0,
            agriculture_tons: 900.0,
        },
        City::Kerkuk => EconomicParams {
            energy_mw: 1100.0,
            agriculture_tons: 700.0,
        },
    }
}

/// Health baselines: heat-stress index and air-health index (0-100 scale).
#[derive(Debug, Clone, Copy)]
pub struct HealthParams {
    pub heat_stress: f64,
    pub air_health: f64,
}

pub fn health(city: City) -> HealthParams {
    match city {
        City::Hewler => HealthParams {
            heat_stress: 30.0,
            air_health: 80.0,
        },
        City::Dihok => HealthParams {
            heat_stress: 25.0,
            air_health: 85.0,
        },
        City::Silemani => HealthParams {
            heat_stress: 20.0,
            air_health: 90.0,
        },
        City::Helebce => HealthParams {
            heat_stress: 20.0,
            air_health: 90.0,
        },
        City::Kerkuk => HealthParams {
            heat_stress: 35.0,
            air_health: 75.0,
        },
    }
}

/// PM2.5 baseline concentration (µg/m³).
pub fn pm25_baseline(city: City) -> f64 {
    match city {
        City::Hewler => 50.0,
        City::Dihok => 45.0,
        City::Silemani => 40.0,
        City::Helebce => 35.0,
        City::Kerkuk => 55.0,
    }
}

/// Vegetation cover baseline (% of land area).
pub fn vegetation_baseline(city: City) -> f64 {
    match city {
        City::Hewler => 70.0,
        City::Dihok => 80.0,
        City::Silemani => 85.0,
        City::Helebce => 85.0,
        City::Kerkuk => 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::City;

    #[test]
    fn hottest_city_is_kerkuk() {
        let max = City::ALL
            .iter()
            .map(|&c| temperature(c).baseline_c)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, temperature(City::Kerkuk).baseline_c);
    }

    #[test]
    fn wettest_city_is_helebce() {
        let max = City::ALL
            .iter()
            .map(|&c| rainfall(c).annual_mm)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, rainfall(City::Helebce).annual_mm);
    }

    #[test]
    fn all_baselines_positive() {
        for &city in &City::ALL {
            assert!(temperature(city).baseline_c > 0.0);
            assert!(temperature(city).seasonal_amplitude > 0.0);
            assert!(rainfall(city).annual_mm > 0.0);
            assert!(water(city).river_baseline > 0.0);
            assert!(water(city).groundwater_baseline > 0.0);
            assert!(economic(city).energy_mw > 0.0);
            assert!(economic(city).agriculture_tons > 0.0);
            assert!(health(city).heat_stress > 0.0);
            assert!(health(city).air_health > 0.0);
            assert!(pm25_baseline(city) > 0.0);
            assert!(vegetation_baseline(city) > 0.0);
        }
    }
}

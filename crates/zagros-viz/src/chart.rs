//! Category/indicator dispatch into declarative chart specifications.

use serde::Serialize;

use zagros_core::time::{month_name, Season};
use zagros_core::{IndicatorFamily, TimeFrame, ZagrosError, ZagrosResult};

use crate::sources::{source_for, SourceRef};

/// Views under "Temperature & Precipitation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TempPrecipView {
    TemperatureTrends,
    RainfallPatterns,
    CombinedView,
}

/// Views under "Water Resources".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaterView {
    RiverLevels,
    GroundwaterLevels,
    CombinedWaterResources,
}

/// Views under "Economic Impact".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EconomicView {
    EnergyDemand,
    AgriculturalProduction,
    CombinedEconomicImpact,
}

/// Views under "Health Impact".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthView {
    HeatStressIndex,
    AirHealthIndex,
    CombinedHealthIndicators,
}

/// Views under "Seasonal Analysis".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeasonalView {
    TemperaturePatterns,
    RainfallDistribution,
    SeasonalComparisons,
}

/// A fully-resolved dashboard view: category plus the indicator within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    TemperaturePrecipitation(TempPrecipView),
    WaterResources(WaterView),
    EconomicImpact(EconomicView),
    HealthImpact(HealthView),
    SeasonalAnalysis(SeasonalView),
}

impl View {
    /// Resolve a (category, indicator) pair from CLI-style kebab strings.
    pub fn parse(category: &str, indicator: &str) -> ZagrosResult<View> {
        let category_key = category.trim().to_lowercase();
        let indicator_key = indicator.trim().to_lowercase();
        match category_key.as_str() {
            "temperature-precipitation" | "temperature" | "temp" => {
                let view = match indicator_key.as_str() {
                    "temperature-trends" => TempPrecipView::TemperatureTrends,
                    "rainfall-patterns" => TempPrecipView::RainfallPatterns,
                    "combined-view" | "combined" => TempPrecipView::CombinedView,
                    other => return Err(unknown_indicator(other, &category_key)),
                };
                Ok(View::TemperaturePrecipitation(view))
            }
            "water-resources" | "water" => {
                let view = match indicator_key.as_str() {
                    "river-levels" => WaterView::RiverLevels,
                    "groundwater-levels" => WaterView::GroundwaterLevels,
                    "combined-water-resources" | "combined" => WaterView::CombinedWaterResources,
                    other => return Err(unknown_indicator(other, &category_key)),
                };
                Ok(View::WaterResources(view))
            }
            "economic-impact" | "economic" => {
                let view = match indicator_key.as_str() {
                    "energy-demand" => EconomicView::EnergyDemand,
                    "agricultural-production" => EconomicView::AgriculturalProduction,
                    "combined-economic-impact" | "combined" => EconomicView::CombinedEconomicImpact,
                    other => return Err(unknown_indicator(other, &category_key)),
                };
                Ok(View::EconomicImpact(view))
            }
            "health-impact" | "health" => {
                let view = match indicator_key.as_str() {
                    "heat-stress-index" => HealthView::HeatStressIndex,
                    "air-health-index" => HealthView::AirHealthIndex,
                    "combined-health-indicators" | "combined" => HealthView::CombinedHealthIndicators,
                    other => return Err(unknown_indicator(other, &category_key)),
                };
                Ok(View::HealthImpact(view))
            }
            "seasonal-analysis" | "seasonal" => {
                let view = match indicator_key.as_str() {
                    "temperature-patterns" => SeasonalView::TemperaturePatterns,
                    "rainfall-distribution" => SeasonalView::RainfallDistribution,
                    "seasonal-comparisons" => SeasonalView::SeasonalComparisons,
                    other => return Err(unknown_indicator(other, &category_key)),
                };
                Ok(View::SeasonalAnalysis(view))
            }
            other => Err(ZagrosError::Config(format!(
                "unknown category '{other}'; use temperature-precipitation, water-resources, \
                 economic-impact, health-impact, or seasonal-analysis"
            ))),
        }
    }
}

fn unknown_indicator(indicator: &str, category: &str) -> ZagrosError {
    ZagrosError::Config(format!(
        "unknown indicator '{indicator}' for category '{category}'"
    ))
}

/// Mark type the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Box,
    /// Two series on independent y axes.
    DualAxis,
}

/// Group-by the renderer (or CLI) runs before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rollup {
    /// Plot rows as generated.
    None,
    /// Mean per (Year, City).
    YearlyMean,
    /// Sum per (Year, City).
    YearlySum,
    /// Mean per (Season, City).
    SeasonalMean,
    /// Mean per (Year, Season, City).
    SeasonYearMean,
    /// Sum per (Year, Season, City).
    SeasonYearSum,
}

/// One plotted axis: which table it comes from and which column to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisSpec {
    pub family: IndicatorFamily,
    pub column: &'static str,
    pub label: &'static str,
}

/// Declarative description of one chart. The renderer joins this with the
/// generated (and filtered) tables; nothing here holds data.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x: &'static str,
    pub y: AxisSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<AxisSpec>,
    pub rollup: Rollup,
    /// Column that splits rows into colored series.
    pub series: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<&'static str>,
    /// Fixed ordering for categorical x axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_order: Option<Vec<&'static str>>,
    pub sources: Vec<SourceRef>,
}

const TEMPERATURE_AXIS: AxisSpec = AxisSpec {
    family: IndicatorFamily::Temperature,
    column: "Temperature",
    label: "Temperature (°C)",
};

const RAINFALL_AXIS: AxisSpec = AxisSpec {
    family: IndicatorFamily::Rainfall,
    column: "Rainfall",
    label: "Rainfall (mm)",
};

fn season_order() -> Vec<&'static str> {
    Season::ALL.iter().map(|s| s.as_str()).collect()
}

fn month_order() -> Vec<&'static str> {
    (1..=12).map(month_name).collect()
}

fn spec(
    title: &str,
    kind: ChartKind,
    x: &'static str,
    y: AxisSpec,
    rollup: Rollup,
) -> ChartSpec {
    ChartSpec {
        title: title.to_string(),
        kind,
        x,
        y,
        y2: None,
        rollup,
        series: "City",
        facet: None,
        category_order: None,
        sources: vec![source_for(y.family)],
    }
}

/// Build the chart specification for a view at a given time frame.
///
/// The time frame only changes views that offer per-frame renderings
/// (temperature and rainfall); the rest plot their natural axis.
pub fn chart_spec(view: View, time_frame: TimeFrame) -> ChartSpec {
    match view {
        View::TemperaturePrecipitation(v) => temp_precip_spec(v, time_frame),
        View::WaterResources(v) => water_spec(v),
        View::EconomicImpact(v) => economic_spec(v),
        View::HealthImpact(v) => health_spec(v),
        View::SeasonalAnalysis(v) => seasonal_spec(v),
    }
}

fn temp_precip_spec(view: TempPrecipView, time_frame: TimeFrame) -> ChartSpec {
    match view {
        TempPrecipView::TemperatureTrends => match time_frame {
            TimeFrame::Yearly => spec(
                "Average Temperature Trends (Yearly)",
                ChartKind::Line,
                "Year",
                TEMPERATURE_AXIS,
                Rollup::YearlyMean,
            ),
            TimeFrame::Monthly => spec(
                "Temperature Patterns by Month",
                ChartKind::Line,
                "Month",
                TEMPERATURE_AXIS,
                Rollup::None,
            ),
            TimeFrame::Seasonal => {
                let mut chart = spec(
                    "Seasonal Temperature Patterns",
                    ChartKind::Line,
                    "Season",
                    TEMPERATURE_AXIS,
                    Rollup::SeasonalMean,
                );
                chart.category_order = Some(season_order());
                chart
            }
        },
        TempPrecipView::RainfallPatterns => match time_frame {
            TimeFrame::Yearly => spec(
                "Annual Rainfall Patterns",
                ChartKind::Line,
                "Year",
                RAINFALL_AXIS,
                Rollup::YearlySum,
            ),
            TimeFrame::Monthly => {
                let mut chart = spec(
                    "Monthly Rainfall Distribution",
                    ChartKind::Box,
                    "MonthName",
                    RAINFALL_AXIS,
                    Rollup::None,
                );
                chart.category_order = Some(month_order());
                chart
            }
            TimeFrame::Seasonal => {
                let mut chart = spec(
                    "Seasonal Rainfall Patterns",
                    ChartKind::Bar,
                    "Season",
                    RAINFALL_AXIS,
                    Rollup::SeasonalMean,
                );
                chart.category_order = Some(season_order());
                chart
            }
        },
        TempPrecipView::CombinedView => {
            let mut chart = spec(
                "Combined Temperature and Rainfall Trends",
                ChartKind::DualAxis,
                "Year",
                TEMPERATURE_AXIS,
                Rollup::YearlyMean,
            );
            chart.y2 = Some(RAINFALL_AXIS);
            chart.sources.push(source_for(IndicatorFamily::Rainfall));
            chart
        }
    }
}

fn water_spec(view: WaterView) -> ChartSpec {
    let river = AxisSpec {
        family: IndicatorFamily::WaterResources,
        column: "RiverLevel",
        label: "River Level (m³/s)",
    };
    let groundwater = AxisSpec {
        family: IndicatorFamily::WaterResources,
        column: "GroundwaterLevel",
        label: "Groundwater Level (m)",
    };
    match view {
        WaterView::RiverLevels => spec(
            "River Water Levels",
            ChartKind::Line,
            "Year",
            river,
            Rollup::None,
        ),
        WaterView::GroundwaterLevels => spec(
            "Groundwater Levels",
            ChartKind::Line,
            "Year",
            groundwater,
            Rollup::None,
        ),
        WaterView::CombinedWaterResources => {
            let mut chart = spec(
                "Combined Water Resources",
                ChartKind::DualAxis,
                "Year",
                river,
                Rollup::None,
            );
            chart.y2 = Some(groundwater);
            chart
        }
    }
}

fn economic_spec(view: EconomicView) -> ChartSpec {
    let energy = AxisSpec {
        family: IndicatorFamily::Economic,
        column: "EnergyDemand",
        label: "Energy Demand (MW)",
    };
    let agriculture = AxisSpec {
        family: IndicatorFamily::Economic,
        column: "AgriculturalProduction",
        label: "Production (tons)",
    };
    match view {
        EconomicView::EnergyDemand => spec(
            "Energy Demand Trends",
            ChartKind::Line,
            "Year",
            energy,
            Rollup::None,
        ),
        EconomicView::AgriculturalProduction => spec(
            "Agricultural Production Trends",
            ChartKind::Line,
            "Year",
            agriculture,
            Rollup::None,
        ),
        EconomicView::CombinedEconomicImpact => {
            let mut chart = spec(
                "Combined Economic Indicators",
                ChartKind::DualAxis,
                "Year",
                energy,
                Rollup::None,
            );
            chart.y2 = Some(agriculture);
            chart
        }
    }
}

fn health_spec(view: HealthView) -> ChartSpec {
    let heat = AxisSpec {
        family: IndicatorFamily::Health,
        column: "HeatStressIndex",
        label: "Heat Stress Index",
    };
    let air = AxisSpec {
        family: IndicatorFamily::Health,
        column: "AirHealthIndex",
        label: "Air Quality Index",
    };
    match view {
        HealthView::HeatStressIndex => {
            spec("Heat Stress Index", ChartKind::Line, "Year", heat, Rollup::None)
        }
        HealthView::AirHealthIndex => spec(
            "Air Quality Health Index",
            ChartKind::Line,
            "Year",
            air,
            Rollup::None,
        ),
        HealthView::CombinedHealthIndicators => {
            let mut chart = spec(
                "Combined Health Indicators",
                ChartKind::DualAxis,
                "Year",
                heat,
                Rollup::None,
            );
            chart.y2 = Some(air);
            chart
        }
    }
}

fn seasonal_spec(view: SeasonalView) -> ChartSpec {
    match view {
        SeasonalView::TemperaturePatterns => {
            let mut chart = spec(
                "Seasonal Temperature Patterns",
                ChartKind::Line,
                "Year",
                TEMPERATURE_AXIS,
                Rollup::SeasonYearMean,
            );
            chart.facet = Some("Season");
            chart
        }
        SeasonalView::RainfallDistribution => {
            let mut chart = spec(
                "Seasonal Rainfall Distribution",
                ChartKind::Line,
                "Year",
                RAINFALL_AXIS,
                Rollup::SeasonYearSum,
            );
            chart.facet = Some("Season");
            chart
        }
        SeasonalView::SeasonalComparisons => {
            let mut chart = spec(
                "Temperature Distribution by Season",
                ChartKind::Box,
                "Season",
                TEMPERATURE_AXIS,
                Rollup::None,
            );
            chart.category_order = Some(season_order());
            chart
        }
    }
}

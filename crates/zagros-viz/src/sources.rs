//! Data-source attribution shown under every chart.

use serde::Serialize;

use zagros_core::IndicatorFamily;

/// Citation for the dataset an indicator family is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub name: &'static str,
    pub link: &'static str,
    pub access_date: &'static str,
}

pub fn source_for(family: IndicatorFamily) -> SourceRef {
    match family {
        IndicatorFamily::Temperature => SourceRef {
            name: "World Bank Climate Portal",
            link: "https://climateknowledgeportal.worldbank.org/country/iraq/climate-data-historical",
            access_date: "Nov 2023",
        },
        IndicatorFamily::Rainfall => SourceRef {
            name: "NOAA Climate Data",
            link: "https://www.ncdc.noaa.gov/cdo-web/datasets",
            access_date: "Nov 2023",
        },
        IndicatorFamily::WaterResources => SourceRef {
            name: "FAO AQUASTAT",
            link: "https://www.fao.org/aquastat/en/databases/",
            access_date: "Nov 2023",
        },
        IndicatorFamily::Economic => SourceRef {
            name: "World Bank Open Data",
            link: "https://data.worldbank.org",
            access_date: "Nov 2023",
        },
        IndicatorFamily::Health => SourceRef {
            name: "WHO Global Health Observatory",
            link: "https://www.who.int/data/gho",
            access_date: "Nov 2023",
        },
        IndicatorFamily::AirQuality => SourceRef {
            name: "WHO Air Quality Database",
            link: "https://www.who.int/data/gho/data/themes/air-pollution",
            access_date: "Nov 2023",
        },
        IndicatorFamily::Vegetation => SourceRef {
            name: "Global Biodiversity Database",
            link: "https://www.gbif.org/occurrence/search",
            access_date: "Nov 2023",
        },
    }
}

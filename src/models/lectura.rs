use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Banda de calidad del aire según el AQI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Límite superior (inclusive) de cada banda; sobre 300 es `Hazardous`
const AQI_BANDS: [(f64, AqiBand); 5] = [
    (50.0, AqiBand::Good),
    (100.0, AqiBand::Moderate),
    (150.0, AqiBand::UnhealthySensitive),
    (200.0, AqiBand::Unhealthy),
    (300.0, AqiBand::VeryUnhealthy),
];

impl AqiBand {
    pub const ALL: [AqiBand; 6] = [
        AqiBand::Good,
        AqiBand::Moderate,
        AqiBand::UnhealthySensitive,
        AqiBand::Unhealthy,
        AqiBand::VeryUnhealthy,
        AqiBand::Hazardous,
    ];

    pub fn from_aqi(aqi: f64) -> Self {
        AQI_BANDS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map(|(_, band)| *band)
            .unwrap_or(AqiBand::Hazardous)
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            AqiBand::Good => "aqi_good",
            AqiBand::Moderate => "aqi_moderate",
            AqiBand::UnhealthySensitive => "aqi_sensitive",
            AqiBand::Unhealthy => "aqi_unhealthy",
            AqiBand::VeryUnhealthy => "aqi_very_unhealthy",
            AqiBand::Hazardous => "aqi_hazardous",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AqiBand::Good => "aqi-good",
            AqiBand::Moderate => "aqi-moderate",
            AqiBand::UnhealthySensitive => "aqi-sensitive",
            AqiBand::Unhealthy => "aqi-unhealthy",
            AqiBand::VeryUnhealthy => "aqi-very-unhealthy",
            AqiBand::Hazardous => "aqi-hazardous",
        }
    }

    /// Rango para la leyenda, p. ej. "101-150" o "301+"
    pub fn range_label(&self) -> &'static str {
        match self {
            AqiBand::Good => "0-50",
            AqiBand::Moderate => "51-100",
            AqiBand::UnhealthySensitive => "101-150",
            AqiBand::Unhealthy => "151-200",
            AqiBand::VeryUnhealthy => "201-300",
            AqiBand::Hazardous => "301+",
        }
    }
}

/// Muestra cruda de un sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirSample {
    /// µg/m³
    pub pm25: f64,
    /// µg/m³
    pub pm10: f64,
    /// ppm
    pub co2: f64,
}

impl AirSample {
    /// Índice simplificado de hasta 500: PM2.5 pesa más; el CO₂ se mide
    /// respecto de 400 ppm y bajo ese nivel resta
    pub fn quality_index(&self) -> f64 {
        let pm25 = (self.pm25 * 2.0).min(250.0);
        let pm10 = (self.pm10 * 0.5).min(100.0);
        let co2 = ((self.co2 - 400.0) * 0.1).min(150.0);
        ((pm25 + pm10 + co2) * 100.0).round() / 100.0
    }

    pub fn band(&self) -> AqiBand {
        AqiBand::from_aqi(self.quality_index())
    }
}

/// Lectura de una sala para el dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReading {
    pub id: String,
    pub aqi: u16,
    /// °C
    pub temperatura: f32,
    /// % humedad relativa
    pub humedad: f32,
}

impl RoomReading {
    pub fn new(id: &str, aqi: u16, temperatura: f32, humedad: f32) -> Self {
        Self {
            id: id.to_string(),
            aqi,
            temperatura,
            humedad,
        }
    }

    pub fn from_sample(id: &str, sample: &AirSample, temperatura: f32, humedad: f32) -> Self {
        let aqi = sample.quality_index().round().clamp(0.0, 500.0) as u16;
        Self::new(id, aqi, temperatura, humedad)
    }

    /// Nivel de calidad derivado del AQI
    pub fn band(&self) -> AqiBand {
        AqiBand::from_aqi(f64::from(self.aqi))
    }
}

/// Resumen mostrado sobre las tarjetas de salas
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub rooms: usize,
    pub average_aqi: f64,
    pub worst_room: Option<RoomReading>,
    pub band_counts: Vec<(AqiBand, usize)>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSummary {
    pub fn new(readings: &[RoomReading], generated_at: DateTime<Utc>) -> Self {
        let rooms = readings.len();
        let average_aqi = if rooms == 0 {
            0.0
        } else {
            let total: f64 = readings.iter().map(|r| f64::from(r.aqi)).sum();
            (total / rooms as f64 * 10.0).round() / 10.0
        };
        let worst_room = readings.iter().max_by_key(|r| r.aqi).cloned();
        let band_counts = AqiBand::ALL
            .iter()
            .map(|band| (*band, readings.iter().filter(|r| r.band() == *band).count()))
            .collect();

        Self {
            rooms,
            average_aqi,
            worst_room,
            band_counts,
            generated_at,
        }
    }

    pub fn average_band(&self) -> AqiBand {
        AqiBand::from_aqi(self.average_aqi)
    }
}

/// Lecturas fijas del dashboard de demostración
pub mod demo {
    use super::{AirSample, RoomReading};

    pub fn room_readings() -> Vec<RoomReading> {
        vec![
            RoomReading::new("Sala A-101", 42, 21.5, 45.0),
            RoomReading::new("Sala A-102", 78, 23.0, 52.0),
            RoomReading::new("Laboratorio B-201", 124, 24.8, 60.0),
            RoomReading::new("Sala C-303", 167, 26.1, 64.0),
            RoomReading::new("Auditorio D-01", 35, 20.4, 41.0),
            RoomReading::from_sample(
                "Biblioteca E-12",
                &AirSample { pm25: 60.0, pm10: 80.0, co2: 1_050.0 },
                27.3,
                70.0,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, AqiBand::Good)]
    #[case(50.0, AqiBand::Good)]
    #[case(50.5, AqiBand::Moderate)]
    #[case(100.0, AqiBand::Moderate)]
    #[case(101.0, AqiBand::UnhealthySensitive)]
    #[case(150.0, AqiBand::UnhealthySensitive)]
    #[case(151.0, AqiBand::Unhealthy)]
    #[case(200.0, AqiBand::Unhealthy)]
    #[case(201.0, AqiBand::VeryUnhealthy)]
    #[case(300.0, AqiBand::VeryUnhealthy)]
    #[case(301.0, AqiBand::Hazardous)]
    #[case(999.0, AqiBand::Hazardous)]
    fn bands_use_inclusive_upper_limits(#[case] aqi: f64, #[case] expected: AqiBand) {
        assert_eq!(AqiBand::from_aqi(aqi), expected);
    }

    #[test]
    fn quality_index_caps_each_pollutant() {
        let clean = AirSample { pm25: 5.0, pm10: 10.0, co2: 420.0 };
        assert_eq!(clean.quality_index(), 17.0);
        assert_eq!(clean.band(), AqiBand::Good);

        let saturated = AirSample { pm25: 500.0, pm10: 900.0, co2: 5_000.0 };
        assert_eq!(saturated.quality_index(), 500.0);
        assert_eq!(saturated.band(), AqiBand::Hazardous);
    }

    #[test]
    fn co2_below_baseline_lowers_the_index() {
        // 10 + 5 - 2
        let sample = AirSample { pm25: 5.0, pm10: 10.0, co2: 380.0 };
        assert_eq!(sample.quality_index(), 13.0);

        let very_clean = AirSample { pm25: 0.0, pm10: 0.0, co2: 300.0 };
        assert_eq!(very_clean.quality_index(), -10.0);
        assert_eq!(very_clean.band(), AqiBand::Good);
        assert_eq!(RoomReading::from_sample("Sala X", &very_clean, 20.0, 40.0).aqi, 0);
    }

    #[test]
    fn quality_index_rounds_to_two_decimals() {
        let sample = AirSample { pm25: 10.123, pm10: 0.0, co2: 400.0 };
        assert_eq!(sample.quality_index(), 20.25);
    }

    #[test]
    fn demo_readings_cover_several_bands() {
        let readings = demo::room_readings();
        assert_eq!(readings.len(), 6);
        let biblioteca = readings.iter().find(|r| r.id == "Biblioteca E-12").unwrap();
        // 120 + 40 + 65
        assert_eq!(biblioteca.aqi, 225);
        assert_eq!(biblioteca.band(), AqiBand::VeryUnhealthy);
    }

    #[test]
    fn summary_reports_average_and_worst_room() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap();
        let readings = vec![
            RoomReading::new("Sala 1", 40, 21.0, 40.0),
            RoomReading::new("Sala 2", 160, 25.0, 60.0),
            RoomReading::new("Sala 3", 45, 22.0, 50.0),
        ];
        let summary = DashboardSummary::new(&readings, now);
        assert_eq!(summary.rooms, 3);
        assert_eq!(summary.average_aqi, 81.7);
        assert_eq!(summary.average_band(), AqiBand::Moderate);
        assert_eq!(summary.worst_room.map(|r| r.id), Some("Sala 2".to_string()));
        assert!(summary.band_counts.contains(&(AqiBand::Good, 2)));
        assert!(summary.band_counts.contains(&(AqiBand::Unhealthy, 1)));
        assert!(summary.band_counts.contains(&(AqiBand::Hazardous, 0)));
    }

    #[test]
    fn empty_summary_is_calm() {
        let summary = DashboardSummary::new(&[], Utc::now());
        assert_eq!(summary.average_aqi, 0.0);
        assert!(summary.worst_room.is_none());
        assert_eq!(summary.band_counts.len(), 6);
    }
}

use super::reading::Reading;

/// A soil metric displayed as its own gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Ph,
    Moisture,
    Conductivity,
    Nitrogen,
    Phosphor,
    Kalium,
}

impl Metric {
    /// First gauge row: physical soil properties.
    pub const PRIMARY: [Self; 4] = [
        Self::Temperature,
        Self::Ph,
        Self::Moisture,
        Self::Conductivity,
    ];

    /// Second gauge row: NPK nutrients.
    pub const NUTRIENTS: [Self; 3] = [Self::Nitrogen, Self::Phosphor, Self::Kalium];

    pub const ALL: [Self; 7] = [
        Self::Temperature,
        Self::Ph,
        Self::Moisture,
        Self::Conductivity,
        Self::Nitrogen,
        Self::Phosphor,
        Self::Kalium,
    ];

    /// Returns the human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Ph => "pH",
            Self::Moisture => "Moisture",
            Self::Conductivity => "Conductivity",
            Self::Nitrogen => "Nitrogen",
            Self::Phosphor => "Phosphor",
            Self::Kalium => "Kalium",
        }
    }

    /// Measurement unit, if the metric has one.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Temperature => Some("°C"),
            Self::Ph | Self::Moisture => None,
            Self::Conductivity => Some("µS/cm"),
            Self::Nitrogen | Self::Phosphor | Self::Kalium => Some("mg/l"),
        }
    }

    /// Upper bound of the gauge arc.
    pub fn max(&self) -> f64 {
        match self {
            Self::Ph => 14.0,
            _ => 100.0,
        }
    }

    /// Accent color of the value arc (hex code)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Temperature => "#ff5733",
            Self::Ph => "#33aaff",
            Self::Moisture => "#a832a6",
            Self::Conductivity => "#52b202",
            Self::Nitrogen => "#ff8c00",
            Self::Phosphor => "#ff006e",
            Self::Kalium => "#00bfae",
        }
    }

    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            Self::Temperature => reading.temperature,
            Self::Ph => reading.ph,
            Self::Moisture => reading.moisture,
            Self::Conductivity => reading.conductivity,
            Self::Nitrogen => reading.nitrogen,
            Self::Phosphor => reading.phosphor,
            Self::Kalium => reading.kalium,
        }
    }

    /// Value followed by its unit, e.g. `23.5 °C`.
    pub fn display_value(&self, reading: &Reading) -> String {
        let value = self.value(reading);
        match self.unit() {
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_every_metric() {
        let rows: Vec<Metric> = Metric::PRIMARY
            .iter()
            .chain(Metric::NUTRIENTS.iter())
            .copied()
            .collect();
        assert_eq!(rows, Metric::ALL.to_vec());
    }

    #[test]
    fn test_ph_has_smaller_ceiling() {
        assert_eq!(Metric::Ph.max(), 14.0);
        assert!(
            Metric::ALL
                .iter()
                .filter(|m| **m != Metric::Ph)
                .all(|m| m.max() == 100.0)
        );
    }

    #[test]
    fn test_display_value_units() {
        let reading = Reading {
            temperature: 23.5,
            ph: 6.8,
            nitrogen: 10.0,
            ..Reading::default()
        };
        assert_eq!(Metric::Temperature.display_value(&reading), "23.5 °C");
        assert_eq!(Metric::Ph.display_value(&reading), "6.8");
        assert_eq!(Metric::Nitrogen.display_value(&reading), "10 mg/l");
    }
}

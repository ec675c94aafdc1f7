use crate::{error::PyrowatchError, simulation::state::SimulationEvent};
use pyrowatch_schemas::{
    safety::{Alert, AlertSeverity},
    telemetry::{ProductionSample, TemperatureSample},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogEntry {
    pub tick: u64,
    pub time: String,
    pub temperature_c: f64,
    pub target_c: f64,
    pub pressure_kpa: f64,
    pub flow_lpm: f64,
    pub heating_power_pct: f64,
    pub status: String,
    pub active_pathway: String,
    pub syngas_lpm: f64,
    pub oil_lpm: f64,
    pub char_kgpm: f64,
    pub alerts_json: String,
    pub events_json: String,
}

pub const OVERHEAT_LIMIT_C: f64 = 650.0;
pub const UNDERPOWER_MARGIN_C: f64 = 50.0;
pub const TARGET_TEMPERATURE_MAX_C: f64 = 800.0;
pub const TREND_DEADBAND_C: f64 = 5.0;

pub fn is_overheating(current_c: f64) -> bool {
    current_c > OVERHEAT_LIMIT_C
}

pub fn is_underpowered(current_c: f64, target_c: f64) -> bool {
    current_c < target_c - UNDERPOWER_MARGIN_C
}

pub fn target_temperature_in_range(celsius: f64) -> bool {
    (0.0..=TARGET_TEMPERATURE_MAX_C).contains(&celsius)
}

/// Parses operator input for the target temperature. Only whole-degree values
/// inside the reactor's rated range are accepted.
pub fn parse_target_temperature(input: &str) -> Option<f64> {
    let degrees: i64 = input.trim().parse().ok()?;
    if (0..=TARGET_TEMPERATURE_MAX_C as i64).contains(&degrees) {
        Some(degrees as f64)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

pub fn temperature_trend(current_c: f64, target_c: f64) -> Trend {
    let diff = current_c - target_c;
    if diff > TREND_DEADBAND_C {
        Trend::Rising
    } else if diff < -TREND_DEADBAND_C {
        Trend::Falling
    } else {
        Trend::Steady
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureBand {
    High,
    Normal,
    Low,
}

impl PressureBand {
    pub fn label(&self) -> &'static str {
        match self {
            PressureBand::High => "High",
            PressureBand::Normal => "Normal",
            PressureBand::Low => "Low",
        }
    }
}

pub fn pressure_band(kpa: f64) -> PressureBand {
    if kpa > 110.0 {
        PressureBand::High
    } else if kpa > 90.0 {
        PressureBand::Normal
    } else {
        PressureBand::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyGrade {
    Excellent,
    Good,
    NeedsAttention,
}

impl EfficiencyGrade {
    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyGrade::Excellent => "Excellent",
            EfficiencyGrade::Good => "Good",
            EfficiencyGrade::NeedsAttention => "Needs Attention",
        }
    }
}

pub fn efficiency_grade(percent: f64) -> EfficiencyGrade {
    if percent > 85.0 {
        EfficiencyGrade::Excellent
    } else if percent > 70.0 {
        EfficiencyGrade::Good
    } else {
        EfficiencyGrade::NeedsAttention
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurityGrade {
    FuelCell,
    Industrial,
}

impl PurityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            PurityGrade::FuelCell => "Fuel cell grade",
            PurityGrade::Industrial => "Industrial grade",
        }
    }
}

pub fn purity_grade(percent: f64) -> PurityGrade {
    if percent > 95.0 {
        PurityGrade::FuelCell
    } else {
        PurityGrade::Industrial
    }
}

pub fn valid_temperature_samples<'a, I>(samples: I) -> impl Iterator<Item = &'a TemperatureSample>
where
    I: IntoIterator<Item = &'a TemperatureSample>,
{
    samples
        .into_iter()
        .filter(|s| s.temperature.is_finite() && s.target.is_finite())
}

pub fn valid_production_samples<'a, I>(samples: I) -> impl Iterator<Item = &'a ProductionSample>
where
    I: IntoIterator<Item = &'a ProductionSample>,
{
    samples
        .into_iter()
        .filter(|s| s.syngas.is_finite() && s.oil.is_finite() && s.solid_char.is_finite())
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ProductionTotals {
    pub syngas: f64,
    pub oil: f64,
    pub solid_char: f64,
}

pub fn production_totals<'a, I>(samples: I) -> ProductionTotals
where
    I: IntoIterator<Item = &'a ProductionSample>,
{
    let mut totals = ProductionTotals::default();
    for sample in valid_production_samples(samples) {
        totals.syngas += sample.syngas;
        totals.oil += sample.oil;
        totals.solid_char += sample.solid_char;
    }
    totals
}

/// Average of `100 - |temperature - target|` over the window, as a percentage.
/// Returns `None` when the window holds no usable samples.
pub fn temperature_stability<'a, I>(samples: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a TemperatureSample>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for sample in valid_temperature_samples(samples) {
        sum += 100.0 - (sample.temperature - sample.target).abs();
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

#[derive(Debug, Default)]
pub struct AlertBreakdown<'a> {
    pub critical: Vec<&'a Alert>,
    pub warnings: Vec<&'a Alert>,
    pub info_count: usize,
}

pub fn alerts_by_severity(alerts: &[Alert]) -> AlertBreakdown<'_> {
    let mut breakdown = AlertBreakdown::default();
    for alert in alerts {
        match alert.severity {
            AlertSeverity::Critical => breakdown.critical.push(alert),
            AlertSeverity::Warning => breakdown.warnings.push(alert),
            AlertSeverity::Info => breakdown.info_count += 1,
        }
    }
    breakdown
}

#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub ticks: u64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub temperature_avg: f64,
    pub operator_events: u64,
    pub emergency_stops: u64,
}

pub fn session_stats(log_path: &str) -> Result<SessionStats, PyrowatchError> {
    let mut reader = csv::Reader::from_path(log_path)
        .map_err(|e| PyrowatchError::CsvError(log_path.to_string(), e))?;

    let mut stats = SessionStats::default();
    let mut row_count = 0u64;
    let mut temperature_sum = 0.0;
    let mut temperature_min = f64::INFINITY;
    let mut temperature_max = f64::NEG_INFINITY;

    for result in reader.deserialize() {
        let record: LogEntry =
            result.map_err(|e| PyrowatchError::CsvError(log_path.to_string(), e))?;
        row_count += 1;
        stats.ticks = stats.ticks.max(record.tick);
        temperature_sum += record.temperature_c;
        temperature_min = temperature_min.min(record.temperature_c);
        temperature_max = temperature_max.max(record.temperature_c);

        let events: Vec<SimulationEvent> = serde_json::from_str(&record.events_json)?;
        stats.operator_events += events.len() as u64;
        stats.emergency_stops += events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::EmergencyStopEngaged))
            .count() as u64;
    }

    if row_count == 0 {
        return Ok(SessionStats::default());
    }

    stats.temperature_min = temperature_min;
    stats.temperature_max = temperature_max;
    stats.temperature_avg = temperature_sum / row_count as f64;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_sample(temperature: f64, target: f64) -> TemperatureSample {
        TemperatureSample {
            time: "14:00".to_string(),
            temperature,
            target,
        }
    }

    fn production_sample(syngas: f64, oil: f64, solid_char: f64) -> ProductionSample {
        ProductionSample {
            time: "14:00".to_string(),
            syngas,
            oil,
            solid_char,
        }
    }

    #[test]
    fn test_overheat_and_underpower_thresholds() {
        assert!(!is_overheating(650.0));
        assert!(is_overheating(651.0));
        assert!(is_underpowered(449.0, 500.0));
        assert!(!is_underpowered(450.0, 500.0));
    }

    #[test]
    fn test_parse_target_temperature() {
        assert_eq!(parse_target_temperature("550"), Some(550.0));
        assert_eq!(parse_target_temperature(" 420 "), Some(420.0));
        assert_eq!(parse_target_temperature("0"), Some(0.0));
        assert_eq!(parse_target_temperature("800"), Some(800.0));
        assert_eq!(parse_target_temperature("900"), None);
        assert_eq!(parse_target_temperature("-5"), None);
        assert_eq!(parse_target_temperature("12.5"), None);
        assert_eq!(parse_target_temperature("hot"), None);
    }

    #[test]
    fn test_temperature_trend_deadband() {
        assert_eq!(temperature_trend(520.0, 500.0), Trend::Rising);
        assert_eq!(temperature_trend(505.0, 500.0), Trend::Steady);
        assert_eq!(temperature_trend(495.0, 500.0), Trend::Steady);
        assert_eq!(temperature_trend(494.0, 500.0), Trend::Falling);
    }

    #[test]
    fn test_pressure_band_boundaries() {
        assert_eq!(pressure_band(115.0), PressureBand::High);
        assert_eq!(pressure_band(110.0), PressureBand::Normal);
        assert_eq!(pressure_band(95.0), PressureBand::Normal);
        assert_eq!(pressure_band(90.0), PressureBand::Low);
        assert_eq!(pressure_band(85.0), PressureBand::Low);
    }

    #[test]
    fn test_efficiency_grade_boundaries() {
        assert_eq!(efficiency_grade(86.0), EfficiencyGrade::Excellent);
        assert_eq!(efficiency_grade(85.0), EfficiencyGrade::Good);
        assert_eq!(efficiency_grade(71.0), EfficiencyGrade::Good);
        assert_eq!(efficiency_grade(70.0), EfficiencyGrade::NeedsAttention);
        assert_eq!(efficiency_grade(70.0).label(), "Needs Attention");
    }

    #[test]
    fn test_purity_grade_threshold() {
        assert_eq!(purity_grade(96.8), PurityGrade::FuelCell);
        assert_eq!(purity_grade(96.8).label(), "Fuel cell grade");
        assert_eq!(purity_grade(95.0), PurityGrade::Industrial);
    }

    #[test]
    fn test_temperature_stability_averages_deviation() {
        let samples = vec![temp_sample(480.0, 500.0), temp_sample(520.0, 500.0)];
        assert_eq!(temperature_stability(&samples), Some(80.0));
        assert_eq!(temperature_stability(&[]), None);
    }

    #[test]
    fn test_non_finite_samples_are_ignored() {
        let samples = vec![temp_sample(f64::NAN, 500.0), temp_sample(500.0, 500.0)];
        assert_eq!(temperature_stability(&samples), Some(100.0));

        let samples = vec![
            production_sample(f64::INFINITY, 1.0, 1.0),
            production_sample(10.0, 2.0, 3.0),
        ];
        let totals = production_totals(&samples);
        assert_eq!(totals, ProductionTotals { syngas: 10.0, oil: 2.0, solid_char: 3.0 });
    }

    #[test]
    fn test_filter_preserves_order_of_valid_samples() {
        let samples = vec![
            temp_sample(450.0, 500.0),
            temp_sample(f64::NAN, 500.0),
            temp_sample(465.0, 500.0),
            temp_sample(475.0, f64::INFINITY),
            temp_sample(485.0, 500.0),
        ];
        let kept: Vec<f64> = valid_temperature_samples(&samples)
            .map(|s| s.temperature)
            .collect();
        assert_eq!(kept, vec![450.0, 465.0, 485.0]);

        let samples = vec![
            production_sample(15.0, 8.0, 5.0),
            production_sample(f64::NEG_INFINITY, 10.0, 6.0),
            production_sample(22.0, 12.0, 7.0),
            production_sample(25.0, f64::NAN, 8.0),
            production_sample(28.0, 12.0, 8.0),
        ];
        let kept: Vec<f64> = valid_production_samples(&samples)
            .map(|s| s.syngas)
            .collect();
        assert_eq!(kept, vec![15.0, 22.0, 28.0]);
    }

    #[test]
    fn test_production_totals_sum_each_output() {
        let samples = vec![
            production_sample(15.0, 8.0, 5.0),
            production_sample(18.0, 10.0, 6.0),
            production_sample(22.0, 12.0, 7.0),
        ];
        let totals = production_totals(&samples);
        assert_eq!(totals.syngas, 55.0);
        assert_eq!(totals.oil, 30.0);
        assert_eq!(totals.solid_char, 18.0);
    }

    #[test]
    fn test_alerts_by_severity_partition() {
        let alerts = vec![
            Alert {
                id: "1".to_string(),
                severity: AlertSeverity::Warning,
                message: "w".to_string(),
                timestamp: "14:00:00".to_string(),
                system: "s".to_string(),
            },
            Alert {
                id: "2".to_string(),
                severity: AlertSeverity::Info,
                message: "i".to_string(),
                timestamp: "14:00:00".to_string(),
                system: "s".to_string(),
            },
            Alert {
                id: "3".to_string(),
                severity: AlertSeverity::Critical,
                message: "c".to_string(),
                timestamp: "14:00:00".to_string(),
                system: "s".to_string(),
            },
        ];

        let breakdown = alerts_by_severity(&alerts);
        assert_eq!(breakdown.critical.len(), 1);
        assert_eq!(breakdown.critical[0].id, "3");
        assert_eq!(breakdown.warnings.len(), 1);
        assert_eq!(breakdown.warnings[0].id, "1");
        assert_eq!(breakdown.info_count, 1);
    }
}

//! Drives a full logged session end to end: scripted operator commands,
//! telemetry ticks, then a read-back of the CSV session log.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pyrowatch_core::{analysis, simulation::builder::SimulationBuilder};
use pyrowatch_schemas::{command::Command, pathway::Pathway, process::ProcessStatus};
use std::{env, fs};

fn session_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 14)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

#[test]
fn test_scripted_session_logs_and_reparses() {
    let log_path = env::temp_dir().join("pyrowatch_session_test.csv");
    let log_path = log_path.to_str().unwrap().to_string();

    let mut engine = SimulationBuilder::new()
        .with_seed(42)
        .with_timeseries_logging_to_file(&log_path)
        .build()
        .unwrap();

    let mut now = session_start();
    engine.log_initial(now).unwrap();

    let ticks = 10u64;
    for tick in 1..=ticks {
        match tick {
            2 => engine
                .dispatch(Command::SetTargetTemperature { celsius: 550.0 })
                .unwrap(),
            4 => engine
                .dispatch(Command::ToggleCondensation { on: false })
                .unwrap(),
            6 => engine
                .dispatch(Command::AcknowledgeAlert {
                    id: "1".to_string(),
                })
                .unwrap(),
            9 => engine.dispatch(Command::EmergencyStop).unwrap(),
            _ => {}
        }
        now += Duration::seconds(5);
        engine.tick(now).unwrap();

        let process = engine.get_process();
        assert!((200.0..=700.0).contains(&process.temperature));
        assert!((85.0..=105.0).contains(&process.pressure));
        assert!((20.0..=35.0).contains(&process.flow_rate));
        assert!(engine.get_temperature_history().len() <= 6);
        assert!(engine.get_production_history().len() <= 6);

        let pathways = engine.get_pathways();
        assert_eq!(
            pathways.condensation.is_active,
            matches!(
                pathways.active_pathway,
                Pathway::Condensation | Pathway::Both
            )
        );
        assert_eq!(
            pathways.hydrogen.is_active,
            matches!(pathways.active_pathway, Pathway::Hydrogen | Pathway::Both)
        );
    }

    // Scripted commands left their marks on the final state.
    assert_eq!(engine.get_process().target_temperature, 550.0);
    assert_eq!(engine.get_pathways().active_pathway, Pathway::Hydrogen);
    assert_eq!(engine.get_safety().alerts.len(), 1);
    assert_eq!(engine.get_safety().alerts[0].id, "2");
    assert_eq!(engine.get_process().status, ProcessStatus::Shutdown);
    assert!(engine.get_safety().system_status.emergency_stop);

    // The log holds the initial row plus one row per tick, and re-parses.
    let mut reader = csv::Reader::from_path(&log_path).unwrap();
    let rows: Vec<analysis::LogEntry> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), ticks as usize + 1);
    assert_eq!(rows[0].tick, 0);
    assert_eq!(rows.last().unwrap().tick, ticks);
    assert_eq!(rows.last().unwrap().status, "SHUTDOWN");
    assert_eq!(rows.last().unwrap().active_pathway, "hydrogen");

    let stats = analysis::session_stats(&log_path).unwrap();
    assert_eq!(stats.ticks, ticks);
    assert_eq!(stats.operator_events, 4);
    assert_eq!(stats.emergency_stops, 1);
    assert!(stats.temperature_min >= 200.0);
    assert!(stats.temperature_max <= 700.0);

    fs::remove_file(&log_path).ok();
}

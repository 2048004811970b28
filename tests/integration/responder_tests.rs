//! Integration tests for the serial → StatusResponder → outputs pipeline.
//!
//! These run on the host (x86_64) and feed bytes through the loopback
//! serial transport, asserting on the resulting output calls and events.

use super::mock_hw::{FailingLink, MockDelay, MockOutputs, Rig, Step, Timeline};

use safevision::adapters::hardware::HardwareAdapter;
use safevision::adapters::log_sink::LogEventSink;
use safevision::adapters::serial::SerialTransport;
use safevision::app::events::AppEvent;
use safevision::app::service::{PollOutcome, StatusResponder};
use safevision::app::state::{BuzzerState, PeripheralState, Status};
use safevision::config::{AlarmMode, ResponderConfig};
use safevision::drivers::buzzer::Buzzer;
use safevision::drivers::indicator::IndicatorLed;
use safevision::error::SerialError;
use safevision::pins;
use safevision::protocol::line::MAX_LINE_LEN;

fn blocking() -> Rig {
    Rig::new(ResponderConfig::default())
}

fn deadline() -> Rig {
    Rig::new(ResponderConfig {
        alarm_mode: AlarmMode::Deadline,
        ..ResponderConfig::default()
    })
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_drives_everything_off() {
    let timeline = Timeline::default();
    let mut outputs = MockOutputs::new(timeline.clone());
    outputs.state.green = true;
    let mut sink = super::mock_hw::RecordingSink::default();

    let mut r = StatusResponder::new(ResponderConfig::default());
    r.start(&mut outputs, &mut sink);

    assert_eq!(outputs.state, PeripheralState::OFF);
    assert_eq!(r.status(), Status::Unknown);
    assert_eq!(sink.events, [AppEvent::Started]);
    assert_eq!(
        *timeline.borrow(),
        [Step::Green(false), Step::Red(false), Step::Silence]
    );
}

// ── SAFE ──────────────────────────────────────────────────────

#[test]
fn safe_lights_green_only() {
    let mut rig = blocking();
    assert_eq!(rig.send(b"SAFE\n", 0), PollOutcome::Applied(Status::Safe));

    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
    assert_eq!(rig.responder.outputs(), PeripheralState::SAFE);
    assert_eq!(
        rig.steps(),
        [Step::Green(true), Step::Red(false), Step::Silence]
    );
}

#[test]
fn safe_surrounded_by_whitespace_is_accepted() {
    let mut rig = blocking();
    assert_eq!(rig.send(b"  \tSAFE \r\n", 0), PollOutcome::Applied(Status::Safe));
    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
}

#[test]
fn safe_twice_is_idempotent() {
    let mut once = blocking();
    once.send(b"SAFE\n", 0);

    let mut twice = blocking();
    twice.send(b"SAFE\n", 0);
    twice.send(b"SAFE\n", 10);

    assert_eq!(once.outputs.state, twice.outputs.state);
    assert_eq!(once.responder.status(), twice.responder.status());
}

// ── VIOLATION ─────────────────────────────────────────────────

#[test]
fn violation_sounds_alarm_for_one_second_then_silences() {
    let mut rig = blocking();
    assert_eq!(
        rig.send(b"VIOLATION\n", 0),
        PollOutcome::Applied(Status::Violation)
    );

    assert_eq!(
        rig.steps(),
        [
            Step::Green(false),
            Step::Red(true),
            Step::Tone(1000),
            Step::Delay(1000),
            Step::Silence,
        ]
    );
    assert_eq!(
        rig.outputs.state,
        PeripheralState {
            green: false,
            red: true,
            buzzer: BuzzerState::Silent,
        }
    );
    assert!(!rig.responder.alarm_active());
    assert_eq!(
        rig.sink.events,
        [
            AppEvent::StatusApplied {
                from: Status::Unknown,
                to: Status::Violation,
            },
            AppEvent::AlarmStarted {
                hz: 1000,
                duration_ms: 1000,
            },
            AppEvent::AlarmStopped { cancelled: false },
        ]
    );
}

#[test]
fn violation_with_crlf_is_accepted() {
    let mut rig = blocking();
    assert_eq!(
        rig.send(b"VIOLATION\r\n", 0),
        PollOutcome::Applied(Status::Violation)
    );
    assert!(rig.outputs.state.red);
}

#[test]
fn violation_then_safe_ends_safe() {
    let mut rig = blocking();
    rig.feed(b"VIOLATION\nSAFE\n");

    // The blocking alarm holds the first cycle; SAFE waits in the link.
    assert_eq!(rig.poll(0), PollOutcome::Applied(Status::Violation));
    assert!(rig.link.pending() > 0);
    assert_eq!(rig.poll(1000), PollOutcome::Applied(Status::Safe));

    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
    assert_eq!(rig.responder.status(), Status::Safe);
}

// ── Unrecognised input ────────────────────────────────────────

#[test]
fn unrecognised_lines_change_nothing() {
    let mut rig = blocking();
    rig.send(b"SAFE\n", 0);
    rig.clear_steps();
    let before = rig.outputs.state;

    let lines: [&[u8]; 5] = [b"safe\n", b"Violation\n", b"xyz\n", b"\n", b"   \n"];
    for line in lines {
        assert_eq!(rig.send(line, 5), PollOutcome::Ignored, "{:?}", line);
    }

    assert!(rig.steps().is_empty(), "no output may be touched");
    assert_eq!(rig.outputs.state, before);
    assert_eq!(rig.responder.status(), Status::Safe);
    assert_eq!(rig.responder.stats().lines_ignored, 5);
}

#[test]
fn overlong_line_is_dropped_and_next_line_applies() {
    let mut rig = blocking();
    let mut junk = vec![b'A'; MAX_LINE_LEN + 1];
    junk.push(b'\n');
    rig.feed(&junk);
    rig.feed(b"SAFE\n");

    assert_eq!(rig.poll(0), PollOutcome::Overflowed);
    assert_eq!(rig.outputs.state, PeripheralState::OFF);
    assert_eq!(rig.poll(1), PollOutcome::Applied(Status::Safe));
    assert_eq!(rig.responder.stats().lines_overflowed, 1);
    assert!(rig.sink.events.contains(&AppEvent::LineOverflowed));
}

// ── Polling model ─────────────────────────────────────────────

#[test]
fn no_input_returns_idle_without_blocking() {
    let mut rig = blocking();
    rig.send(b"SAFE\n", 0);
    rig.clear_steps();

    assert_eq!(rig.poll(10), PollOutcome::Idle);
    assert!(rig.steps().is_empty(), "idle poll must not touch outputs or delay");
    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
}

#[test]
fn stale_partial_line_is_ignored_not_joined() {
    let mut rig = blocking();
    rig.send(b"VIOLATION\n", 0);
    let before = rig.outputs.state;

    assert_eq!(rig.send(b"SA", 10), PollOutcome::Pending);
    assert_eq!(rig.poll(1009), PollOutcome::Idle);
    assert_eq!(rig.poll(1010), PollOutcome::Ignored);
    assert_eq!(rig.send(b"FE\n", 60_000), PollOutcome::Ignored);

    assert_eq!(rig.outputs.state, before);
    assert_eq!(rig.responder.status(), Status::Violation);
}

#[test]
fn stale_partial_line_is_closed_before_new_bytes_are_read() {
    let mut rig = blocking();
    assert_eq!(rig.send(b"SA", 0), PollOutcome::Pending);
    // No idle poll in between: the rest of the word is already waiting.
    rig.feed(b"FE\n");
    assert_eq!(rig.poll(5000), PollOutcome::Ignored);
    assert_eq!(rig.poll(5001), PollOutcome::Ignored);
    assert_eq!(rig.responder.status(), Status::Unknown);
}

#[test]
fn split_line_within_timeout_is_joined() {
    let mut rig = blocking();
    assert_eq!(rig.send(b"SA", 0), PollOutcome::Pending);
    assert_eq!(rig.send(b"FE\n", 999), PollOutcome::Applied(Status::Safe));
}

#[test]
fn zero_timeout_waits_for_terminator() {
    let mut rig = Rig::new(ResponderConfig {
        line_timeout_ms: 0,
        ..ResponderConfig::default()
    });
    assert_eq!(rig.send(b"SA", 0), PollOutcome::Pending);
    assert_eq!(rig.poll(60_000), PollOutcome::Idle);
    assert_eq!(rig.send(b"FE\n", 60_001), PollOutcome::Applied(Status::Safe));
}

#[test]
fn one_line_per_cycle() {
    let mut rig = blocking();
    rig.feed(b"xyz\nSAFE\n");
    assert_eq!(rig.poll(0), PollOutcome::Ignored);
    assert_eq!(rig.link.pending(), 5);
    assert_eq!(rig.poll(1), PollOutcome::Applied(Status::Safe));
    assert_eq!(rig.poll(2), PollOutcome::Idle);
}

#[test]
fn partial_line_timeout_classifies_pending_bytes() {
    let mut rig = Rig::new(ResponderConfig {
        line_timeout_ms: 1000,
        ..ResponderConfig::default()
    });
    assert_eq!(rig.send(b"SAFE", 100), PollOutcome::Pending);
    assert_eq!(rig.poll(1099), PollOutcome::Idle);
    assert_eq!(rig.poll(1100), PollOutcome::Applied(Status::Safe));
    assert_eq!(rig.poll(5000), PollOutcome::Idle);
}

#[test]
fn read_errors_propagate() {
    let timeline = Timeline::default();
    let mut outputs = MockOutputs::new(timeline.clone());
    let mut delay = MockDelay::new(timeline);
    let mut sink = super::mock_hw::RecordingSink::default();
    let mut r = StatusResponder::new(ResponderConfig::default());

    let err = r
        .poll(&mut FailingLink, &mut outputs, &mut delay, 0, &mut sink)
        .unwrap_err();
    assert_eq!(err, SerialError::ReadFailed(-1));
    assert_eq!(r.status(), Status::Unknown);
}

// ── Deadline alarm ────────────────────────────────────────────

#[test]
fn deadline_violation_returns_immediately_and_expires_later() {
    let mut rig = deadline();
    assert_eq!(
        rig.send(b"VIOLATION\n", 100),
        PollOutcome::Applied(Status::Violation)
    );
    assert!(!rig.steps().contains(&Step::Delay(1000)), "must not block");
    assert!(rig.outputs.state.is_sounding());
    assert!(rig.responder.alarm_active());
    assert_eq!(rig.responder.alarm_remaining_ms(600), Some(500));

    assert_eq!(rig.poll(1099), PollOutcome::Idle);
    assert!(rig.outputs.state.is_sounding());

    assert_eq!(rig.poll(1100), PollOutcome::Idle);
    assert!(!rig.outputs.state.is_sounding());
    assert!(!rig.responder.alarm_active());
    assert!(rig.outputs.state.red, "red stays lit after the tone");
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::AlarmStopped { cancelled: false })
    );
}

#[test]
fn deadline_safe_cancels_alarm() {
    let mut rig = deadline();
    rig.send(b"VIOLATION\n", 0);
    assert_eq!(rig.send(b"SAFE\n", 200), PollOutcome::Applied(Status::Safe));

    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
    assert!(!rig.responder.alarm_active());
    assert!(
        rig.sink
            .events
            .contains(&AppEvent::AlarmStopped { cancelled: true })
    );
}

#[test]
fn deadline_repeated_violation_rearms() {
    let mut rig = deadline();
    rig.send(b"VIOLATION\n", 0);
    rig.send(b"VIOLATION\n", 800);

    rig.poll(1000);
    assert!(rig.outputs.state.is_sounding(), "re-armed at 800 ms");
    rig.poll(1800);
    assert!(!rig.outputs.state.is_sounding());
}

// ── Stats ─────────────────────────────────────────────────────

#[test]
fn stats_count_every_kind_of_line() {
    let mut rig = blocking();
    rig.feed(b"SAFE\nnope\nVIOLATION\n");
    while rig.poll(0) != PollOutcome::Idle {}

    let s = rig.responder.stats();
    assert_eq!(s.lines_received, 3);
    assert_eq!(s.lines_applied, 2);
    assert_eq!(s.lines_ignored, 1);
    assert_eq!(s.lines_overflowed, 0);
}

// ── Real adapters (host simulation) ───────────────────────────

#[test]
fn hardware_adapter_tracks_responder_mirror() {
    let mut hw = HardwareAdapter::new(
        IndicatorLed::new(pins::GREEN_LED_GPIO),
        IndicatorLed::new(pins::RED_LED_GPIO),
        Buzzer::new(),
    );
    let mut link = SerialTransport::default();
    let timeline = Timeline::default();
    let mut delay = MockDelay::new(timeline);
    let mut sink = LogEventSink::new();

    let mut r = StatusResponder::new(ResponderConfig {
        alarm_mode: AlarmMode::Deadline,
        ..ResponderConfig::default()
    });
    r.start(&mut hw, &mut sink);

    link.inject(b"VIOLATION\n").unwrap();
    r.poll(&mut link, &mut hw, &mut delay, 0, &mut sink).unwrap();
    assert_eq!(hw.state(), r.outputs());
    assert_eq!(hw.state().buzzer, BuzzerState::Tone { hz: 1000 });

    link.inject(b"SAFE\n").unwrap();
    r.poll(&mut link, &mut hw, &mut delay, 10, &mut sink).unwrap();
    assert_eq!(hw.state(), PeripheralState::SAFE);
    assert_eq!(hw.state(), r.outputs());
}

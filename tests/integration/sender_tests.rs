//! Host-side sender → serial → responder round trip.

use super::mock_hw::{FailingLink, Rig};

use safevision::adapters::serial::SerialTransport;
use safevision::app::service::PollOutcome;
use safevision::app::state::{PeripheralState, Status};
use safevision::config::ResponderConfig;
use safevision::protocol::message::StatusMessage;
use safevision::protocol::sender::StatusSender;

#[test]
fn sender_frames_each_status_as_a_line() {
    let mut sender = StatusSender::new(Some(SerialTransport::default()));
    assert!(sender.is_connected());
    assert!(sender.send(StatusMessage::Safe));
    assert!(sender.send(StatusMessage::Violation));

    let written = sender.link().map(SerialTransport::written).unwrap();
    assert_eq!(written, b"SAFE\nVIOLATION\n");
}

#[test]
fn sender_output_drives_responder() {
    let mut sender = StatusSender::new(Some(SerialTransport::default()));
    sender.send(StatusMessage::Violation);
    sender.send(StatusMessage::Safe);
    let wire = sender.link().unwrap().written().to_vec();

    let mut rig = Rig::new(ResponderConfig::default());
    rig.feed(&wire);
    assert_eq!(rig.poll(0), PollOutcome::Applied(Status::Violation));
    assert_eq!(rig.poll(1000), PollOutcome::Applied(Status::Safe));
    assert_eq!(rig.outputs.state, PeripheralState::SAFE);
}

#[test]
fn write_failure_is_swallowed() {
    let mut sender = StatusSender::new(Some(FailingLink));
    assert!(!sender.send(StatusMessage::Violation));
    // Still usable afterwards; no retry, no panic.
    assert!(!sender.send(StatusMessage::Safe));
}

#[test]
fn absent_link_drops_silently() {
    let mut sender: StatusSender<SerialTransport> = StatusSender::new(None);
    assert!(!sender.send(StatusMessage::Safe));
    assert!(sender.link().is_none());
}

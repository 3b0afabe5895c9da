use std::process::{Command, Output};

use diatonic::pitch::Pitch;
use diatonic_cli::dto::DumpDto;
use pretty_assertions::assert_eq;

fn call_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diatonic"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = call_cli(args);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn spell_midi_numbers() {
    assert_eq!(
        stdout_of(&["midi", "60", "69", "127"]),
        "C4 | MIDI 60 | 261.626 Hz\n\
         A4 | MIDI 69 | 440.000 Hz\n\
         G9 | MIDI 127 | 12543.854 Hz\n"
    );
}

#[test]
fn spell_negative_midi_numbers() {
    assert_eq!(
        stdout_of(&["midi", "--", "-1", "0"]),
        "B-2 | MIDI -1 | 7.717 Hz\n\
         C-1 | MIDI 0 | 8.176 Hz\n"
    );
}

#[test]
fn snap_frequencies() {
    assert_eq!(
        stdout_of(&["hz", "440", "261.62", "220"]),
        "A4 | MIDI 69 | 440.000 Hz\n\
         C4 | MIDI 60 | 261.626 Hz\n\
         A3 | MIDI 57 | 220.000 Hz\n"
    );
}

#[test]
fn use_custom_concert_pitch() {
    assert_eq!(
        stdout_of(&["--a4", "432", "midi", "69"]),
        "A4 | MIDI 69 | 432.000 Hz\n"
    );
    assert_eq!(
        stdout_of(&["--a4", "432", "hz", "432"]),
        "A4 | MIDI 69 | 432.000 Hz\n"
    );
}

#[test]
fn shift_pitches() {
    assert_eq!(stdout_of(&["shift", "C4", "1"]), "C♯4\n");
    assert_eq!(stdout_of(&["shift", "C4", "--", "-1"]), "B3\n");
    assert_eq!(stdout_of(&["shift", "Cb4", "12"]), "C♭5\n");
    assert_eq!(stdout_of(&["shift", "B#3", "1"]), "C♯4\n");
    assert_eq!(stdout_of(&["shift", "Bb3", "--", "-13"]), "A2\n");
}

#[test]
fn scale_pitches() {
    assert_eq!(stdout_of(&["scale", "C4", "2"]), "C5\n");
    assert_eq!(stdout_of(&["scale", "C4", "0.5"]), "C3\n");
    assert_eq!(stdout_of(&["scale", "C4", "1.5"]), "G4\n");
}

#[test]
fn frequency_ratios() {
    assert_eq!(stdout_of(&["ratio", "F-1", "C-1"]), "1.334840\n");
    assert_eq!(stdout_of(&["ratio", "C4", "C5"]), "0.500000\n");
}

#[test]
fn nearest_pitches() {
    assert_eq!(stdout_of(&["nearest", "C4", "B"]), "B3\n");
    assert_eq!(stdout_of(&["nearest", "C4", "B#"]), "B♯3\n");
    assert_eq!(stdout_of(&["nearest", "C4", "D"]), "D4\n");
}

#[test]
fn sort_pitches() {
    assert_eq!(
        stdout_of(&["sort", "Db4", "C#4", "Dbb4", "C4", "B#3", "Cb4"]),
        "C♭4\n\
         B♯3\n\
         C4\n\
         D♭♭4\n\
         C♯4\n\
         D♭4\n"
    );
}

#[test]
fn handle_extreme_octaves() {
    assert_eq!(
        stdout_of(&["sort", "C178956971", "C4", "B#-178956972"]),
        "B♯-178956972\n\
         C4\n\
         C178956971\n"
    );
    assert_eq!(stdout_of(&["shift", "C178956971", "1"]), "C♯178956971\n");
}

#[test]
fn reject_deep_accidentals() {
    let pitch = format!("C{}4", "#".repeat(100_000));
    let output = call_cli(&["shift", &pitch, "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid pitch class name"));
}

#[test]
fn dump_pitches() {
    let output = stdout_of(&["dump", "--lo-key", "60", "--up-key", "63"]);
    let dump = DumpDto::read(output.as_bytes()).ok().unwrap();

    assert_eq!(dump.concert_pitch_in_hz, 440.0);
    assert_eq!(
        dump.items
            .iter()
            .map(|item| item.midi_number)
            .collect::<Vec<_>>(),
        [60, 61, 62]
    );
    assert_eq!(
        dump.pitches().ok().unwrap(),
        [Pitch::from_midi(60), Pitch::from_midi(61), Pitch::from_midi(62)]
    );
}

#[test]
fn reject_invalid_pitches() {
    let output = call_cli(&["shift", "H4", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid pitch class name 'H'"));

    let output = call_cli(&["shift", "C4.5", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid octave '4.5'"));
}

#[test]
fn reject_invalid_concert_pitch() {
    let output = call_cli(&["--a4", "0", "midi", "69"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Concert pitch must be a positive"));
}

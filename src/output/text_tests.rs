use tempfile::TempDir;

use super::*;
use crate::checker::CheckStep;
use crate::session::Session;
use crate::test_fixtures::{BASE, CLONE, INSTRUCTIONS, write_participant};

fn plain() -> TextFormatter {
    TextFormatter::new(ColorMode::Never)
}

/// One participant, `dima`, with base and clone, plus the fixture instructions.
fn single_participant() -> (TempDir, Session) {
    let temp_dir = TempDir::new().unwrap();
    let reports = temp_dir.path().join("reports");
    write_participant(
        &reports.join("dima"),
        &[("report.03.base", BASE), ("report.03.clone", CLONE)],
    );
    let instructions = temp_dir.path().join("instruction.json");
    std::fs::write(&instructions, INSTRUCTIONS).unwrap();

    let mut session = Session::new();
    session.add_reports(&reports).unwrap();
    session.add_instructions(&instructions).unwrap();
    (temp_dir, session)
}

#[test]
fn empty_listings() {
    let session = Session::new();
    assert_eq!(
        plain().format_reports(session.reports()),
        "  =[ No reports imported ]=\n"
    );
    assert_eq!(
        plain().format_instructions(session.instructions()),
        " =[ No instructions imported ]=\n"
    );
    assert_eq!(
        plain().format_summary(&session.conclude()),
        " =[ Nothing to conclude: run 'start 2' first ]=\n"
    );
}

#[test]
fn instruction_listing_shows_scope() {
    let (_dir, session) = single_participant();

    let output = plain().format_instructions(session.instructions());

    assert_eq!(
        output,
        " =[ Imported instructions: ]=\n \
         Re: 10.10.10.\\d\n   Files (input):\treport.03.clone\n \
         Re: Script started on\n   Every imported file (output).\n \
         Re: vlan7\n   Files (input):\treport.03.base report.03.clone\n"
    );
}

#[test]
fn added_instruction_starts_with_success() {
    let mut session = Session::new();
    let added = session
        .add_regex("20.20.20.", "out", &["report.06.clone"])
        .unwrap();

    let output = plain().format_added_instructions([added]);

    assert_eq!(
        output,
        "Success\n\n Re: 20.20.20.\n   Files (output):\treport.06.clone\n"
    );
}

#[test]
fn added_reports_list_each_file() {
    let temp_dir = TempDir::new().unwrap();
    write_participant(
        &temp_dir.path().join("veniamin"),
        &[("report.03.bridge", ""), ("report.03.base", "")],
    );
    let mut session = Session::new();
    let added = session.add_reports(temp_dir.path()).unwrap();

    let output = plain().format_added_reports(added);

    let id = temp_dir.path().join("veniamin").display().to_string();
    assert_eq!(
        output,
        format!("Success\n{id}   report.03.base\n{id}   report.03.bridge\n")
    );
}

#[test]
fn reports_listing() {
    let (_dir, session) = single_participant();
    let id = &session.reports().participants()[0].id;

    let output = plain().format_reports(session.reports());

    assert_eq!(
        output,
        format!(
            "  =[ Imported reports: ]=\nParticipant: {id}, files:\n\treport.03.base\treport.03.clone\n"
        )
    );
}

#[test]
fn syntax_check_without_instructions_prints_notice_first() {
    let (dir, _) = single_participant();
    let mut session = Session::new();
    session.add_reports(&dir.path().join("reports")).unwrap();
    let participant = &session.reports().participants()[0];
    let id = participant.id.clone();
    let base = participant.files[0].path.display().to_string();
    let clone = participant.files[1].path.display().to_string();

    let output = plain().format_check(&session.start(CheckStep::Syntax));

    assert_eq!(
        output,
        format!(
            "No instructions imported! => Second step is skipped\n\
             Use 'addins INSTRUCTION_FILE'\n\
             Or  'addreg REGEX in|out FILE1 FILE2...'\n  \
             ==[ CHECK STARTS:  Going through 1 steps ]==\n  \
             =[ SYNTAX CHECK ]=\n\
             Participant: '{id}', files:\n\t {base}\n\t {clone}\n  \
             ==[ CHECK ENDED ]==\n"
        )
    );
}

#[test]
fn syntax_check_with_instructions_has_no_notice() {
    let (_dir, mut session) = single_participant();

    let output = plain().format_check(&session.start(CheckStep::Syntax));

    assert!(output.starts_with("  ==[ CHECK STARTS:  Going through 1 steps ]==\n"));
    assert!(!output.contains("SEMANTIC CHECK"));
}

#[test]
fn semantic_check_transcript() {
    let (_dir, mut session) = single_participant();

    let output = plain().format_check(&session.start(CheckStep::Semantic));

    assert!(output.contains("  ==[ CHECK STARTS:  Going through 2 steps ]==\n"));
    assert!(output.contains("  =[ SEMANTIC CHECK ]=\n"));
    assert!(output.contains(
        "  Checking file report.03.base:\n    \
         RE 0: 'Script started on' (output).\n      \
         Match 1 in line 0:\n        \
         Script started on 2022-03-11 10:08:28+00:00 [TERM=\"linux\" TTY=\"/dev/tty1\"]\n  \
         1 / 1 REGEXs matched in file report.03.base\n\n    \
         RE 1: 'vlan7' (input).\n      \
         Match 1 in line 1:\n        \
         ip link add link eth1 name vlan7 type vlan id 7\n      \
         Match 2 in line 2:\n        \
         ip address add dev vlan7 10.10.10.7/24\n  \
         1 / 1 REGEXs matched in file report.03.base\n\n\n"
    ));
    assert!(output.contains(
        "    RE 2: 'vlan7' (input).\n      \
         No matches in 0 lines!\n  \
         0 / 1 REGEXs matched in file report.03.clone\n"
    ));
    assert!(output.ends_with("  ==[ CHECK ENDED ]==\n"));
}

#[test]
fn no_reports_check_does_zero_steps() {
    let mut session = Session::new();

    let output = plain().format_check(&session.start(CheckStep::Semantic));

    assert!(output.contains("No reports imported! => Nothing to check\n"));
    assert!(output.contains("Going through 0 steps"));
    assert!(!output.contains("SYNTAX CHECK"));
}

#[test]
fn summary_lists_ratios() {
    let (_dir, mut session) = single_participant();
    let id = session.reports().participants()[0].id.clone();
    session.start(CheckStep::Semantic);

    let output = plain().format_summary(&session.conclude());

    assert_eq!(
        output,
        format!(
            "==[ RESULTS ]==\nParticipant '{id}' results:\n\n  \
             report.03.base:\t2 / 2\n  report.03.clone:\t2 / 3\n\n"
        )
    );
}

#[test]
fn colors_applied_when_enabled() {
    let (_dir, mut session) = single_participant();
    session.start(CheckStep::Semantic);

    let output = TextFormatter::new(ColorMode::Always).format_summary(&session.conclude());

    assert!(output.contains("\x1b[32m2 / 2\x1b[0m"));
    assert!(output.contains("\x1b[33m2 / 3\x1b[0m"));
}

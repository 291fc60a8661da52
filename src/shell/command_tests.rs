use super::*;

fn parse(line: &str) -> Command {
    Command::parse(line).unwrap().unwrap()
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("   \t").unwrap(), None);
}

#[test]
fn simple_commands() {
    assert_eq!(parse("reset"), Command::Reset);
    assert_eq!(parse("importedreports"), Command::ImportedReports);
    assert_eq!(parse("importedinstructions"), Command::ImportedInstructions);
    assert_eq!(parse("conclude"), Command::Conclude);
    assert_eq!(parse("exit"), Command::Exit);
    assert_eq!(parse("  quit  "), Command::Exit);
}

#[test]
fn path_commands_keep_rest_of_line() {
    assert_eq!(
        parse("addrep input_example/"),
        Command::AddReports(PathBuf::from("input_example/"))
    );
    assert_eq!(
        parse("addins  my rules.json "),
        Command::AddInstructions(PathBuf::from("my rules.json"))
    );
}

#[test]
fn path_commands_require_argument() {
    let err = Command::parse("addrep").unwrap_err();
    assert!(matches!(
        err,
        VerdictError::MissingArgument {
            command: "addrep",
            usage: "addrep REPORTS_DIR"
        }
    ));
}

#[test]
fn addreg_splits_pattern_direction_files() {
    assert_eq!(
        parse("addreg 20.20.20. out report.06.clone report.06.base"),
        Command::AddRegex {
            pattern: "20.20.20.".to_string(),
            direction: "out".to_string(),
            files: vec!["report.06.clone".to_string(), "report.06.base".to_string()],
        }
    );
    assert_eq!(
        parse("addreg 20.20.20. out"),
        Command::AddRegex {
            pattern: "20.20.20.".to_string(),
            direction: "out".to_string(),
            files: Vec::new(),
        }
    );
}

#[test]
fn addreg_requires_pattern_and_direction() {
    for line in ["addreg", "addreg onlypattern"] {
        assert!(matches!(
            Command::parse(line).unwrap_err(),
            VerdictError::MissingArgument {
                command: "addreg",
                ..
            }
        ));
    }
}

#[test]
fn start_with_and_without_step() {
    assert_eq!(parse("start"), Command::Start(None));
    assert_eq!(parse("start 1"), Command::Start(Some(CheckStep::Syntax)));
    assert_eq!(parse("start 2"), Command::Start(Some(CheckStep::Semantic)));
    assert!(matches!(
        Command::parse("start 5").unwrap_err(),
        VerdictError::InvalidStep(_)
    ));
}

#[test]
fn help_with_topic() {
    assert_eq!(parse("help"), Command::Help(None));
    assert_eq!(parse("help start"), Command::Help(Some("start".to_string())));
}

#[test]
fn unknown_command() {
    let err = Command::parse("frobnicate now").unwrap_err();
    assert!(matches!(err, VerdictError::UnknownCommand(ref c) if c == "frobnicate"));
}

#[test]
fn every_command_has_help() {
    for name in [
        "reset",
        "addrep",
        "addins",
        "addreg",
        "importedreports",
        "importedinstructions",
        "start",
        "conclude",
        "help",
        "exit",
    ] {
        assert!(find_help(name).is_some(), "{name}");
    }
}

//! Integration tests for complete command flows
//!
//! These tests drive the `Terminal` facade end-to-end: echo, dispatch,
//! control commands, and history recall, over both a small fixture
//! profile and the bundled profile.

use folioterm::config::TerminalConfig;
use folioterm::models::{Identity, LineKind, Profile, SkillCategory};
use folioterm::terminal::FAREWELL;
use folioterm::{SubmitOutcome, Terminal};

fn fixture_profile() -> Profile {
    Profile {
        identity: Identity {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: vec!["+44-20-0000".to_string()],
            location: vec!["London".to_string()],
            linkedin: "linkedin.com/in/ada".to_string(),
            github: "github.com/ada".to_string(),
            objective: "Programs for the analytical engine.".to_string(),
        },
        skills: vec![SkillCategory {
            category: "Mathematics".to_string(),
            details: "Number theory".to_string(),
        }],
        languages: Vec::new(),
        experiences: Vec::new(),
        education: Vec::new(),
        projects: Vec::new(),
        achievements: Vec::new(),
    }
}

fn open_terminal() -> Terminal {
    Terminal::new(&fixture_profile(), &TerminalConfig::default())
}

#[test]
fn submitting_echoes_prompt_plus_raw_text() {
    let mut terminal = open_terminal();
    let before = terminal.line_count();

    terminal.submit("skills extra args");

    let echo = &terminal.lines()[before];
    assert_eq!(echo.kind, LineKind::Input);
    assert_eq!(echo.text, "adalovelace@portfolio:~$ skills extra args");
}

#[test]
fn whitespace_only_input_appends_blank_and_skips_history() {
    let mut terminal = open_terminal();
    let before = terminal.line_count();

    let outcome = terminal.submit(" \t ");

    assert_eq!(outcome, SubmitOutcome::Appended);
    assert_eq!(terminal.line_count(), before + 2);
    let appended = &terminal.lines()[before..];
    assert_eq!(appended[0].kind, LineKind::Input);
    assert_eq!(appended[1].kind, LineKind::Output);
    assert!(appended[1].text.is_empty());
    assert!(terminal.input().history().is_empty());
}

#[test]
fn known_command_appends_exactly_its_registry_lines() {
    let mut terminal = open_terminal();
    let expected: Vec<String> = terminal
        .registry()
        .lookup("skills")
        .unwrap()
        .to_vec();
    let before = terminal.line_count();

    terminal.submit("skills");

    let appended = &terminal.lines()[before + 1..];
    assert_eq!(appended.len(), expected.len());
    for (line, want) in appended.iter().zip(&expected) {
        assert_eq!(line.kind, LineKind::Output);
        assert_eq!(&line.text, want);
    }
}

#[test]
fn mixed_case_keyword_matches_like_lowercase() {
    let mut upper = open_terminal();
    let mut lower = open_terminal();

    upper.submit("WHOAMI");
    lower.submit("whoami");

    let collect = |t: &Terminal| {
        t.lines()
            .iter()
            .filter(|l| l.kind == LineKind::Output)
            .map(|l| l.text.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(collect(&upper), collect(&lower));
}

#[test]
fn unknown_command_produces_one_error_line_with_literal_token() {
    let mut terminal = open_terminal();
    let before = terminal.line_count();

    terminal.submit("SudoMakeMeASandwich --now");

    assert_eq!(terminal.line_count(), before + 2);
    let error = terminal.lines().last().unwrap();
    assert_eq!(error.kind, LineKind::Error);
    assert!(error.text.contains("SudoMakeMeASandwich"));
    assert!(error.text.contains("help"));
}

#[test]
fn clear_empties_the_buffer_immediately() {
    let mut terminal = open_terminal();
    terminal.submit("whoami");
    terminal.submit("skills");
    assert!(terminal.line_count() > 0);

    let outcome = terminal.submit("clear");

    assert_eq!(outcome, SubmitOutcome::Cleared);
    assert_eq!(terminal.line_count(), 0);
}

#[test]
fn exit_appends_farewell_and_reports_closing_once() {
    let mut terminal = open_terminal();

    let outcome = terminal.submit("exit");

    assert_eq!(outcome, SubmitOutcome::Closing);
    let farewell = terminal.lines().last().unwrap();
    assert_eq!(farewell.kind, LineKind::Output);
    assert_eq!(farewell.text, FAREWELL);
    // The farewell stays in the buffer until the host unmounts.
    assert!(terminal.line_count() > 0);
}

#[test]
fn history_recall_walks_back_saturates_and_walks_forward() {
    let mut terminal = open_terminal();
    for cmd in ["ls", "whoami", "skills"] {
        terminal.submit(cmd);
    }

    terminal.recall_previous();
    assert_eq!(terminal.input().text(), "skills");
    terminal.recall_previous();
    assert_eq!(terminal.input().text(), "whoami");
    terminal.recall_previous();
    assert_eq!(terminal.input().text(), "ls");
    terminal.recall_previous();
    assert_eq!(terminal.input().text(), "ls");

    terminal.recall_next();
    assert_eq!(terminal.input().text(), "whoami");
}

#[test]
fn help_output_mentions_clear_and_exit() {
    let mut terminal = open_terminal();
    terminal.submit("help");

    let text: String = terminal
        .lines()
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(text.contains("clear"));
    assert!(text.contains("exit"));
}

#[test]
fn reopening_starts_from_a_fresh_banner() {
    let profile = fixture_profile();
    let config = TerminalConfig::default();

    let mut first = Terminal::new(&profile, &config);
    first.submit("whoami");
    first.submit("projects");
    drop(first);

    let second = Terminal::new(&profile, &config);
    // Only the welcome banner; nothing survives the unmount.
    assert_eq!(second.line_count(), 3);
    assert!(second.input().history().is_empty());
}

#[test]
fn bundled_profile_supports_the_full_command_set() {
    let profile = Profile::builtin().expect("bundled profile must parse");
    let mut terminal = Terminal::new(&profile, &TerminalConfig::default());

    for cmd in [
        "help",
        "ls",
        "pwd",
        "whoami",
        "about",
        "contact",
        "skills",
        "languages",
        "experience",
        "education",
        "projects",
        "achievements",
        "uname",
    ] {
        let before = terminal.line_count();
        let outcome = terminal.submit(cmd);
        assert_eq!(outcome, SubmitOutcome::Appended, "command '{cmd}'");
        assert!(
            terminal.line_count() > before + 1,
            "command '{cmd}' should produce output"
        );
        assert!(
            terminal.lines()[before + 1..]
                .iter()
                .all(|l| l.kind == LineKind::Output),
            "command '{cmd}' should not error"
        );
    }
}

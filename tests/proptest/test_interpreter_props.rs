//! Property-based tests for the line interpreter
//!
//! Checks the submission invariants over generated input: the echo line,
//! whitespace handling, dispatch line counts, and the unknown-command
//! error shape.

use proptest::prelude::*;

use folioterm::config::TerminalConfig;
use folioterm::models::{Identity, LineKind, Profile};
use folioterm::{SubmitOutcome, Terminal};

fn fixture_profile() -> Profile {
    Profile {
        identity: Identity {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: Vec::new(),
            location: Vec::new(),
            linkedin: String::new(),
            github: String::new(),
            objective: "Engines.".to_string(),
        },
        skills: Vec::new(),
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

proptest! {
    /// Every submission echoes exactly one Input line: prompt + raw text.
    #[test]
    fn echo_line_is_prompt_plus_raw(raw in "[ -~]{0,60}") {
        // `clear` discards the echo along with the rest of the buffer.
        let first = raw.trim().split_whitespace().next().unwrap_or("").to_lowercase();
        prop_assume!(first != "clear");

        let mut terminal = open_terminal();
        let before = terminal.line_count();
        let prompt = terminal.prompt().to_string();

        terminal.submit(&raw);

        let appended = &terminal.lines()[before..];
        let inputs: Vec<_> = appended
            .iter()
            .filter(|l| l.kind == LineKind::Input)
            .collect();
        prop_assert_eq!(inputs.len(), 1);
        prop_assert_eq!(&inputs[0].text, &format!("{prompt}{raw}"));
    }

    /// Whitespace-only submissions add one blank Output line and never
    /// touch history.
    #[test]
    fn whitespace_only_is_a_blank_noop(raw in "[ \t]{0,10}") {
        let mut terminal = open_terminal();
        let before = terminal.line_count();

        let outcome = terminal.submit(&raw);

        prop_assert_eq!(outcome, SubmitOutcome::Appended);
        prop_assert_eq!(terminal.line_count(), before + 2);
        let blank = terminal.lines().last().unwrap();
        prop_assert_eq!(blank.kind, LineKind::Output);
        prop_assert!(blank.text.is_empty());
        prop_assert!(terminal.input().history().is_empty());
    }

    /// A registered keyword appends exactly the registry's line count,
    /// regardless of case or trailing arguments.
    #[test]
    fn known_keyword_appends_registry_line_count(
        keyword in prop::sample::select(vec!["help", "whoami", "ls", "pwd", "uname", "about"]),
        uppercase in any::<bool>(),
        args in "( [a-z]{1,8}){0,3}",
    ) {
        let mut terminal = open_terminal();
        let expected = terminal.registry().lookup(keyword).unwrap().len();
        let typed = if uppercase {
            format!("{}{}", keyword.to_uppercase(), args)
        } else {
            format!("{keyword}{args}")
        };
        let before = terminal.line_count();

        terminal.submit(&typed);

        prop_assert_eq!(terminal.line_count(), before + 1 + expected);
    }

    /// An unregistered first token yields exactly one Error line carrying
    /// the literal token as typed.
    #[test]
    fn unknown_token_yields_one_error_with_literal_token(
        token in "zq[A-Za-z]{1,10}",
        args in "( [a-z]{1,6}){0,2}",
    ) {
        let mut terminal = open_terminal();
        let before = terminal.line_count();

        let outcome = terminal.submit(&format!("{token}{args}"));

        prop_assert_eq!(outcome, SubmitOutcome::Appended);
        let errors: Vec<_> = terminal.lines()[before..]
            .iter()
            .filter(|l| l.kind == LineKind::Error)
            .collect();
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors[0].text.contains(&token));
    }

    /// History stores raw text in submission order; recall-previous
    /// saturates at the oldest entry.
    #[test]
    fn recall_previous_saturates(count in 1usize..6) {
        let mut terminal = open_terminal();
        let commands: Vec<String> = (0..count).map(|i| format!("cmd{i}")).collect();
        for cmd in &commands {
            terminal.submit(cmd);
        }

        for _ in 0..count + 3 {
            terminal.recall_previous();
        }
        prop_assert_eq!(terminal.input().text(), commands[0].as_str());
    }
}

//! Unit tests for registry output shapes
//!
//! Asserts the exact line formats each report command renders from the
//! bundled profile: headers, numbering, indentation, and the trailing
//! blank line that closes every block.

use folioterm::models::Profile;
use folioterm::terminal::CommandRegistry;

fn registry() -> (Profile, CommandRegistry) {
    let profile = Profile::builtin().expect("bundled profile must parse");
    let registry = CommandRegistry::build(&profile);
    (profile, registry)
}

#[test]
fn whoami_reports_identity_summary() {
    let (profile, registry) = registry();
    let lines = registry.lookup("whoami").unwrap();

    assert_eq!(lines[0], format!("User: {}", profile.identity.username()));
    assert_eq!(lines[1], format!("Role: {}", profile.identity.title));
    assert_eq!(lines[2], "Host: portfolio-v1");
    assert_eq!(lines[3], "");
}

#[test]
fn skills_iterate_in_declaration_order_with_indented_details() {
    let (profile, registry) = registry();
    let lines = registry.lookup("skills").unwrap();

    assert_eq!(lines[0], "Technical Skills:");
    assert_eq!(lines[1], "");

    // Each category renders three lines: header, indented details, blank.
    let mut cursor = 2;
    for skill in &profile.skills {
        assert_eq!(lines[cursor], format!("{}:", skill.category));
        assert_eq!(lines[cursor + 1], format!("  {}", skill.details));
        assert_eq!(lines[cursor + 2], "");
        cursor += 3;
    }
    assert_eq!(cursor, lines.len());
}

#[test]
fn experience_entries_are_numbered_with_bullets() {
    let (profile, registry) = registry();
    let lines = registry.lookup("experience").unwrap();

    assert_eq!(lines[0], "Work Experience:");
    let first = &profile.experiences[0];
    assert_eq!(
        lines[2],
        format!("1. {} @ {}", first.title, first.company)
    );
    assert_eq!(lines[3], format!("   {} | {}", first.period, first.location));
    assert_eq!(lines[4], format!("   - {}", first.highlights[0]));

    // Numbering continues across entries.
    let second_header = format!(
        "2. {} @ {}",
        profile.experiences[1].title, profile.experiences[1].company
    );
    assert!(lines.iter().any(|l| l == &second_header));
}

#[test]
fn education_entries_are_numbered() {
    let (profile, registry) = registry();
    let lines = registry.lookup("education").unwrap();

    assert_eq!(lines[0], "Education:");
    let first = &profile.education[0];
    assert_eq!(lines[2], format!("1. {}", first.degree));
    assert_eq!(
        lines[3],
        format!("   {}, {}", first.institution, first.location)
    );
    assert_eq!(
        lines[4],
        format!("   {} | Grade: {}", first.period, first.grade)
    );
}

#[test]
fn projects_join_technologies_and_show_demo_links() {
    let (profile, registry) = registry();
    let lines = registry.lookup("projects").unwrap();

    assert_eq!(lines[0], "Projects:");
    assert_eq!(lines[2], format!("1. {}", profile.projects[0].title));

    let tech_line = format!(
        "   Tech: {}",
        profile.projects[0].technologies.join(", ")
    );
    assert!(lines.iter().any(|l| l == &tech_line));

    // At least one bundled project carries a demo link.
    let with_demo = profile
        .projects
        .iter()
        .filter(|p| p.demo_link.is_some())
        .count();
    let demo_lines = lines.iter().filter(|l| l.starts_with("   Demo: ")).count();
    assert_eq!(with_demo, demo_lines);
    assert!(demo_lines > 0);
}

#[test]
fn project_descriptions_are_summarized() {
    let (_, registry) = registry();
    let lines = registry.lookup("projects").unwrap();

    for line in lines.iter().filter(|l| l.starts_with("   ")) {
        assert!(
            line.chars().count() <= 3 + 80 + 3,
            "summary too long: {line}"
        );
    }
}

#[test]
fn achievements_are_numbered_with_descriptions() {
    let (profile, registry) = registry();
    let lines = registry.lookup("achievements").unwrap();

    assert_eq!(lines[0], "Achievements & Activities:");
    assert_eq!(lines[2], format!("1. {}", profile.achievements[0].title));
    assert!(lines[3].starts_with("   "));
}

#[test]
fn contact_lists_every_channel() {
    let (profile, registry) = registry();
    let lines = registry.lookup("contact").unwrap();

    assert_eq!(lines[0], format!("Email: {}", profile.identity.email));
    assert!(lines.iter().any(|l| l.starts_with("Phone: ")));
    assert!(lines.iter().any(|l| l.starts_with("LinkedIn: ")));
    assert!(lines.iter().any(|l| l.starts_with("GitHub: ")));
}

#[test]
fn languages_use_name_dash_level() {
    let (profile, registry) = registry();
    let lines = registry.lookup("languages").unwrap();

    assert_eq!(lines[0], "Languages:");
    let first = &profile.languages[0];
    assert_eq!(lines[2], format!("{} - {}", first.name, first.level));
}

#[test]
fn single_line_commands() {
    let (profile, registry) = registry();

    let ls = registry.lookup("ls").unwrap();
    assert_eq!(ls.len(), 1);
    assert!(ls[0].contains("projects/"));
    assert!(ls[0].contains("resume.pdf"));

    let pwd = registry.lookup("pwd").unwrap();
    assert_eq!(pwd.len(), 1);
    assert_eq!(pwd[0], format!("/home/{}", profile.identity.username()));

    let uname = registry.lookup("uname").unwrap();
    assert_eq!(uname.len(), 1);
    assert!(uname[0].contains("folioterm"));
}

#[test]
fn every_multi_line_command_ends_with_a_blank_line() {
    let (_, registry) = registry();

    for entry in registry.entries() {
        if entry.lines.len() > 1 {
            assert_eq!(
                entry.lines.last().map(String::as_str),
                Some(""),
                "command '{}' must end with a blank line",
                entry.name
            );
        }
    }
}

#[test]
fn help_aligns_names_and_lists_the_reserved_commands() {
    let (_, registry) = registry();
    let help = registry.lookup("help").unwrap();

    assert_eq!(help[0], "Available commands:");
    for line in help.iter().skip(1).filter(|l| !l.is_empty()) {
        assert!(line.starts_with("  "), "entry not indented: {line}");
        assert!(line.contains("- "), "entry missing description: {line}");
    }
    assert!(help.iter().any(|l| l.trim_start().starts_with("clear")));
    assert!(help.iter().any(|l| l.trim_start().starts_with("exit")));
    // help itself is not in its own listing
    assert!(!help.iter().any(|l| l.trim_start().starts_with("help")));
}

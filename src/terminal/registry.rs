//! Command Registry
//!
//! A fixed mapping from command keyword to the output lines it produces.
//! The registry is built once from the profile record and is immutable
//! afterwards; because the profile never changes, every command's output
//! is rendered up front and lookups just return the prepared lines.
//!
//! Invariant: every registered name is lowercase. Callers resolve the
//! first whitespace token of a submission to lowercase before lookup.

use std::collections::HashMap;

use crate::models::Profile;

/// Command that clears the session buffer. Handled by the interpreter,
/// never dispatched through the generic lookup path.
pub const CLEAR_COMMAND: &str = "clear";

/// Command that closes the terminal. Handled by the interpreter, never
/// dispatched through the generic lookup path.
pub const EXIT_COMMAND: &str = "exit";

/// Column width names are padded to in the `help` listing.
const HELP_NAME_WIDTH: usize = 13;

/// Maximum characters of a project description shown in the listing.
const PROJECT_SUMMARY_CHARS: usize = 80;

/// Wrap width for the `about` paragraph.
const ABOUT_WRAP_COLS: usize = 76;

/// One registered command
#[derive(Debug, Clone)]
pub struct CommandEntry {
    /// Keyword the user types (lowercase)
    pub name: String,
    /// One-line description shown by `help`
    pub description: String,
    /// Prepared output lines
    pub lines: Vec<String>,
}

/// Registry of available commands
#[derive(Debug)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Build the registry from a profile record.
    ///
    /// Commands are registered in the order `help` presents them.
    pub fn build(profile: &Profile) -> Self {
        let username = profile.identity.username();

        let mut commands: Vec<(&str, &str, Vec<String>)> = vec![
            (
                "ls",
                "List virtual directories",
                vec!["projects/  experience/  education/  achievements/  resume.pdf".to_string()],
            ),
            ("pwd", "Show current working directory", vec![format!("/home/{username}")]),
            ("whoami", "Display personal information", render_whoami(profile, &username)),
            ("about", "Show the profile summary", render_about(profile)),
            ("contact", "Show contact channels", render_contact(profile)),
            ("skills", "List my technical skills", render_skills(profile)),
            ("languages", "List spoken languages", render_languages(profile)),
            ("experience", "Show work experience", render_experience(profile)),
            ("education", "Display education details", render_education(profile)),
            ("projects", "List my projects", render_projects(profile)),
            ("achievements", "Show achievements", render_achievements(profile)),
            ("uname", "Display system information", vec![render_uname()]),
            (CLEAR_COMMAND, "Clear the terminal", Vec::new()),
            (EXIT_COMMAND, "Close the terminal", Vec::new()),
        ];

        // `help` enumerates every other command, so it is rendered from the
        // list above and registered first.
        let mut help_lines = vec!["Available commands:".to_string()];
        for (name, description, _) in &commands {
            help_lines.push(format!("  {name:<HELP_NAME_WIDTH$}- {description}"));
        }
        help_lines.push(String::new());

        let mut entries = Vec::with_capacity(commands.len() + 1);
        entries.push(CommandEntry {
            name: "help".to_string(),
            description: "List available commands".to_string(),
            lines: help_lines,
        });
        for (name, description, lines) in commands.drain(..) {
            entries.push(CommandEntry {
                name: name.to_string(),
                description: description.to_string(),
                lines,
            });
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// Look up the output lines for a keyword.
    ///
    /// The keyword must already be lowercased; registered names always are.
    pub fn lookup(&self, keyword: &str) -> Option<&[String]> {
        self.index
            .get(keyword)
            .map(|&i| self.entries[i].lines.as_slice())
    }

    /// Check whether a keyword is registered
    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    /// All registered commands, in registration order
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry holds no commands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Report renderers
// ---------------------------------------------------------------------------

fn render_whoami(profile: &Profile, username: &str) -> Vec<String> {
    vec![
        format!("User: {username}"),
        format!("Role: {}", profile.identity.title),
        "Host: portfolio-v1".to_string(),
        String::new(),
    ]
}

fn render_about(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["About:".to_string(), String::new()];
    lines.extend(wrap_text(&profile.identity.objective, ABOUT_WRAP_COLS));
    lines.push(String::new());
    lines
}

fn render_contact(profile: &Profile) -> Vec<String> {
    let id = &profile.identity;
    let mut lines = vec![format!("Email: {}", id.email)];
    if !id.phone.is_empty() {
        lines.push(format!("Phone: {}", id.phone.join(", ")));
    }
    if !id.location.is_empty() {
        lines.push(format!("Location: {}", id.location.join(", ")));
    }
    if !id.linkedin.is_empty() {
        lines.push(format!("LinkedIn: {}", id.linkedin));
    }
    if !id.github.is_empty() {
        lines.push(format!("GitHub: {}", id.github));
    }
    lines.push(String::new());
    lines
}

fn render_skills(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Technical Skills:".to_string(), String::new()];
    for skill in &profile.skills {
        lines.push(format!("{}:", skill.category));
        lines.push(format!("  {}", skill.details));
        lines.push(String::new());
    }
    lines
}

fn render_languages(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Languages:".to_string(), String::new()];
    for language in &profile.languages {
        lines.push(format!("{} - {}", language.name, language.level));
    }
    lines.push(String::new());
    lines
}

fn render_experience(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Work Experience:".to_string(), String::new()];
    for (index, exp) in profile.experiences.iter().enumerate() {
        lines.push(format!("{}. {} @ {}", index + 1, exp.title, exp.company));
        lines.push(format!("   {} | {}", exp.period, exp.location));
        for highlight in &exp.highlights {
            lines.push(format!("   - {highlight}"));
        }
        lines.push(String::new());
    }
    lines
}

fn render_education(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Education:".to_string(), String::new()];
    for (index, edu) in profile.education.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, edu.degree));
        lines.push(format!("   {}, {}", edu.institution, edu.location));
        lines.push(format!("   {} | Grade: {}", edu.period, edu.grade));
        lines.push(String::new());
    }
    lines
}

fn render_projects(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Projects:".to_string(), String::new()];
    for (index, project) in profile.projects.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, project.title));
        lines.push(format!(
            "   {}",
            summarize(&project.description, PROJECT_SUMMARY_CHARS)
        ));
        if !project.technologies.is_empty() {
            lines.push(format!("   Tech: {}", project.technologies.join(", ")));
        }
        if let Some(demo) = &project.demo_link {
            lines.push(format!("   Demo: {demo}"));
        }
        lines.push(String::new());
    }
    lines
}

fn render_achievements(profile: &Profile) -> Vec<String> {
    let mut lines = vec!["Achievements & Activities:".to_string(), String::new()];
    for (index, achievement) in profile.achievements.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, achievement.title));
        lines.push(format!("   {}", achievement.description));
        lines.push(String::new());
    }
    lines
}

fn render_uname() -> String {
    format!(
        "Linux portfolio {}-folioterm #1 SMP x86_64 GNU/Linux",
        env!("CARGO_PKG_VERSION")
    )
}

/// Truncate to `max` characters, appending an ellipsis when cut.
fn summarize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Greedy word wrap at `cols` columns. Words longer than the width get a
/// line of their own.
fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= cols {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

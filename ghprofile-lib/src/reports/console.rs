use super::ReportOptions;
use super::icons;
use crate::Result;
use crate::profile::{Bundle, Repo};
use core::fmt::Write;
use owo_colors::{OwoColorize, Style};
use std::collections::HashMap;
use terminal_size::{Width, terminal_size};

/// Widest the card gets, even on a wide terminal.
const MAX_CARD_WIDTH: usize = 88;

/// Left/right padding inside the border.
const CARD_PADDING: usize = 2;

#[derive(Debug, Clone, Copy)]
enum Role {
    Title,
    Url,
    Subtle,
    Label,
    Value,
    RepoTitle,
    Icon,
    Border,
}

impl Role {
    fn style(self) -> Style {
        match self {
            Self::Title | Self::Icon => Style::new().cyan().bold(),
            Self::Url => Style::new().blue().underline(),
            Self::Subtle => Style::new().bright_blue(),
            Self::Label => Style::new().magenta().bold(),
            Self::Value => Style::new().green().bold(),
            Self::RepoTitle => Style::new().yellow().bold(),
            Self::Border => Style::new().blue(),
        }
    }
}

#[derive(Debug)]
struct Painter<'a> {
    options: &'a ReportOptions,
}

impl Painter<'_> {
    fn paint(&self, text: &str, role: Role) -> String {
        if self.options.colors {
            text.style(role.style()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Icon followed by two spaces, or nothing when icons are off.
    fn icon(&self, glyph: &str) -> String {
        if self.options.icons {
            format!("{}  ", self.paint(glyph, Role::Icon))
        } else {
            String::new()
        }
    }
}

/// Render `bundle` as a profile card.
pub fn generate<W: Write>(bundle: &Bundle, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let painter = Painter { options };
    let width = options.width.unwrap_or_else(get_terminal_width).min(MAX_CARD_WIDTH);
    let content_width = if options.border {
        width.saturating_sub(2 + 2 * CARD_PADDING)
    } else {
        width
    };

    let mut lines = Vec::new();
    header(bundle, &painter, content_width, &mut lines);
    stats(bundle, &painter, &mut lines);
    languages(&bundle.repos, &painter, &mut lines);
    top_repos(&bundle.repos, &painter, &mut lines);

    if options.border {
        framed(&lines, &painter, writer)?;
    } else {
        for line in &lines {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

fn header(bundle: &Bundle, painter: &Painter<'_>, width: usize, lines: &mut Vec<String>) {
    let profile = &bundle.profile;
    let title = if profile.name.is_empty() { &profile.login } else { &profile.name };

    lines.push(format!(
        "{}{}  {}",
        painter.icon(icons::USER),
        painter.paint(title, Role::Title),
        painter.paint(&profile.html_url, Role::Url)
    ));

    for paragraph in profile.bio.lines() {
        for line in wrap_words(paragraph, width) {
            lines.push(painter.paint(&line, Role::Subtle));
        }
    }

    lines.push(String::new());
}

fn stats(bundle: &Bundle, painter: &Painter<'_>, lines: &mut Vec<String>) {
    let profile = &bundle.profile;
    let or_na = |v: Option<u64>| v.map_or_else(|| "n/a".to_string(), |v| v.to_string());

    let entries = [
        (icons::FOLLOWERS, "Followers:", profile.followers.to_string()),
        (icons::FOLLOWING, "Following:", profile.following.to_string()),
        (icons::REPO, "Public repos:", profile.public_repos.to_string()),
        (icons::GIST, "Public gists:", profile.public_gists.to_string()),
        (icons::STAR, "Total stars:", or_na(profile.total_stars)),
        (icons::FORK, "Total forks:", or_na(profile.total_forks)),
        (
            icons::STAR,
            "Avg stars/repo:",
            profile.avg_stars_per_repo.map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.2}")),
        ),
    ];

    let label_width = entries.iter().map(|(_, label, _)| label.len()).max().unwrap_or(0);

    for (icon, label, value) in entries {
        let label = format!("{label:<label_width$}");
        lines.push(format!(
            "{}{} {}",
            painter.icon(icon),
            painter.paint(&label, Role::Label),
            painter.paint(&value, Role::Value)
        ));
    }
}

/// Repository count per language, most common first. Repositories without a
/// language are left out.
fn language_counts(repos: &[Repo]) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repos.iter().filter(|r| !r.language.is_empty()) {
        *counts.entry(repo.language.as_str()).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
}

fn languages(repos: &[Repo], painter: &Painter<'_>, lines: &mut Vec<String>) {
    let counts = language_counts(repos);
    if counts.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(painter.paint("Languages:", Role::Subtle));
    for (language, count) in counts {
        lines.push(format!(
            "{}{}: {count}",
            painter.icon(icons::language_icon(language)),
            painter.paint(language, Role::Label)
        ));
    }
}

/// The `n` most starred repositories, ties broken by full name.
fn most_starred(repos: &[Repo], n: usize) -> Vec<&Repo> {
    let mut sorted: Vec<&Repo> = repos.iter().collect();
    sorted.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.full_name.cmp(&b.full_name))
    });
    sorted.truncate(n);
    sorted
}

fn top_repos(repos: &[Repo], painter: &Painter<'_>, lines: &mut Vec<String>) {
    let top = most_starred(repos, painter.options.top_n);
    if top.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(painter.paint("Top repos:", Role::Subtle));
    for (index, repo) in top.into_iter().enumerate() {
        let (language, star, fork) = if painter.options.icons {
            (painter.icon(icons::language_icon(&repo.language)), painter.icon(icons::STAR), painter.icon(icons::FORK))
        } else {
            (
                if repo.language.is_empty() { String::new() } else { format!("{}  ", repo.language) },
                "★ ".to_string(),
                "forks ".to_string(),
            )
        };

        lines.push(format!(
            "{}. {}  {language}{star}{}  {fork}{}",
            index + 1,
            painter.paint(&repo.full_name, Role::RepoTitle),
            repo.stargazers_count,
            repo.forks_count
        ));
        lines.push(format!("   {}", painter.paint(&repo.html_url, Role::Url)));
    }
}

fn framed<W: Write>(lines: &[String], painter: &Painter<'_>, writer: &mut W) -> Result<()> {
    let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2 * CARD_PADDING;
    let horizontal = "─".repeat(inner);
    let side = painter.paint("│", Role::Border);
    let blank = " ".repeat(inner);

    writeln!(writer, "{}", painter.paint(&format!("╭{horizontal}╮"), Role::Border))?;
    writeln!(writer, "{side}{blank}{side}")?;
    for line in lines {
        let fill = inner - CARD_PADDING - visible_width(line);
        writeln!(writer, "{side}{:pad$}{line}{:fill$}{side}", "", "", pad = CARD_PADDING)?;
    }
    writeln!(writer, "{side}{blank}{side}")?;
    writeln!(writer, "{}", painter.paint(&format!("╰{horizontal}╯"), Role::Border))?;

    Ok(())
}

/// Number of characters that occupy a column, ignoring ANSI SGR sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

/// Greedy word wrap to `width` columns. A word longer than `width` gets a
/// line of its own rather than being split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

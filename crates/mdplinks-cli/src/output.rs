//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use chrono::Local;
use mdplinks_core::{ErrorCode, Link, LinkError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single link
    pub fn print_link(&self, link: &Link) {
        match self.format {
            OutputFormat::Human => {
                println!("URL:     {}", link.url);
                if link.has_title() {
                    println!("Title:   {}", link.title);
                }
                if !link.tags.is_empty() {
                    println!("Tags:    {}", link.tags.join(", "));
                }
                println!("Created: {}", format_created(link));
            }
            OutputFormat::Json => {
                println!("{}", to_json(link));
            }
            OutputFormat::Quiet => {
                println!("{}", link.url);
            }
        }
    }

    /// Print a list of links
    pub fn print_links(&self, links: &[Link]) {
        match self.format {
            OutputFormat::Human => {
                if links.is_empty() {
                    println!("No links found.");
                    return;
                }
                for link in links {
                    println!("{}", link_line(link));
                }
                println!("\n{} link(s)", links.len());
            }
            OutputFormat::Json => {
                println!("{}", to_json(links));
            }
            OutputFormat::Quiet => {
                for link in links {
                    println!("{}", link.url);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Report a failed command on stderr
    ///
    /// Engine errors are shown with their catalog message, and a link that
    /// could not be saved is still printed.
    pub fn error(&self, err: &anyhow::Error) {
        let link_err = err.downcast_ref::<LinkError>();

        if let Some(link) = link_err.and_then(LinkError::unsaved_link) {
            self.print_link(link);
        }

        match self.format {
            OutputFormat::Json => {
                let code = link_err
                    .map(LinkError::code)
                    .or_else(|| err.downcast_ref::<ErrorCode>().copied())
                    .map(ErrorCode::value);
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "status": "error",
                        "code": code,
                        "message": format!("{:#}", err)
                    })
                );
            }
            OutputFormat::Human | OutputFormat::Quiet => {
                match link_err {
                    Some(e) => eprintln!("Error: {}: {:#}", e.code(), err),
                    None => eprintln!("Error: {:#}", err),
                }
                if let Some(hint) = link_err.and_then(LinkError::recovery_suggestion) {
                    eprintln!("Hint: {}", hint);
                }
            }
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Creation date in the local timezone
fn format_created(link: &Link) -> String {
    link.created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// One-line summary used in link lists
fn link_line(link: &Link) -> String {
    let title = if link.has_title() {
        truncate(&link.title, 35)
    } else {
        "(no title)".to_string()
    };
    format!(
        "{} | {} | {} | {}",
        link.created_at.with_timezone(&Local).format("%Y-%m-%d"),
        title,
        truncate(&link.url, 45),
        link.tags.join(",")
    )
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
        assert_eq!(truncate("ñandú ñandú ñandú", 8), "ñandú...");
    }

    #[test]
    fn test_link_line() {
        let link = Link::new(
            "http://x.com",
            vec!["news".to_string(), "tech".to_string()],
            "",
        );
        let line = link_line(&link);
        assert!(line.contains("(no title)"));
        assert!(line.contains("http://x.com"));
        assert!(line.ends_with("news,tech"));
    }

    #[test]
    fn test_json_uses_store_field_names() {
        let link = Link::new("http://x.com", vec!["news".to_string()], "X");
        let json = to_json(&link);
        assert!(json.contains("\"Url\": \"http://x.com\""));
        assert!(json.contains("\"CreatedAt\""));
    }
}

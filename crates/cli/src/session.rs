use std::io::{self, Write};
use std::path::Path;

use auditus_core::{AuditTarget, Auditor, PdfConfig, render_text, write_pdf_report};
use owo_colors::OwoColorize;

use crate::VERSION;
use crate::echo;

const BANNER_WIDTH: usize = 60;

/// Interactive menu session driving audits over stdin/stdout.
///
/// Prompts, the menu, and audit reports go to stdout; status messages go
/// to stderr through [`echo`]. The API key lives on the [`Auditor`] for
/// the lifetime of the session and is never persisted.
pub struct Session {
    auditor: Auditor,
    pdf_config: PdfConfig,
}

impl Session {
    pub fn new(auditor: Auditor) -> Self {
        Self { auditor, pdf_config: PdfConfig::default() }
    }

    /// Run the menu loop until the user exits or stdin closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        print_banner();

        loop {
            print_menu();

            let Some(choice) = prompt("Select an option (1-3): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.setup_api_key()?,
                "2" => self.run_audit().await?,
                "3" => {
                    println!("\nThank you for using auditus!");
                    break;
                }
                _ => echo::print_error("Invalid option. Please select 1, 2, or 3."),
            }
        }

        Ok(())
    }

    /// Menu option 1: store a PageSpeed API key for this session.
    fn setup_api_key(&mut self) -> anyhow::Result<()> {
        println!("\nGoogle PageSpeed Insights API key setup");
        println!("{}", "-".repeat(45));
        println!("To get a key:");
        println!("1. Visit https://developers.google.com/speed/docs/insights/v5/get-started");
        println!("2. Create a project and enable the PageSpeed Insights API");
        println!("3. Generate an API key");
        println!();

        let Some(key) = prompt("Enter your API key (or press Enter to skip): ")? else {
            return Ok(());
        };

        if key.is_empty() {
            echo::print_warning("No API key provided. PageSpeed analysis will be skipped.");
        } else {
            self.auditor.set_api_key(key);
            echo::print_success("API key saved for this session.");
        }

        Ok(())
    }

    /// Menu option 2: prompt for a target, audit it, and write the reports.
    async fn run_audit(&mut self) -> anyhow::Result<()> {
        println!("\nSEO AUDIT ANALYZER");
        println!("{}", "-".repeat(25));

        let Some(url) = prompt("Enter website URL (with https://): ")? else {
            return Ok(());
        };
        if !url.starts_with("http://") && !url.starts_with("https://") {
            echo::print_error("Please enter a valid URL starting with http:// or https://");
            return Ok(());
        }

        let Some(keyword) = prompt("Enter keyword to analyze: ")? else {
            return Ok(());
        };
        if keyword.is_empty() {
            echo::print_error("Keyword cannot be empty");
            return Ok(());
        }

        let target = match AuditTarget::new(&url, &keyword) {
            Ok(target) => target,
            Err(e) => {
                echo::print_error(&e.to_string());
                return Ok(());
            }
        };

        println!("\nStarting SEO audit for: {}", target.url());
        println!("Target keyword: '{}'", target.keyword());
        println!("{}", "-".repeat(50));

        let report = match self.auditor.audit(&target).await {
            Ok(report) => report,
            Err(e) => {
                echo::print_error(&format!("Error fetching URL: {}", e));
                return Ok(());
            }
        };

        println!("{}", render_text(&report));

        let filename = report.report_filename();
        match write_pdf_report(&report, Path::new(&filename), &self.pdf_config) {
            Ok(()) => {
                echo::print_success("Audit completed successfully!");
                echo::print_info(&format!("PDF report saved as: {}", filename));
            }
            Err(e) => {
                echo::print_warning(&format!("Audit completed but PDF generation failed: {}", e));
            }
        }

        let _ = prompt("\nPress Enter to return to the main menu...")?;
        Ok(())
    }
}

/// Print the prompt, flush, and read one trimmed line from stdin.
///
/// Returns `Ok(None)` when stdin has reached end of input, which callers
/// treat as a request to wind down.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn print_banner() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{} {}{}", "auditus".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    println!("{}", "SEO audit and keyword ranking for web pages".dimmed());
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Features:");
    println!("  {} Title & meta description analysis", "✓".green());
    println!("  {} Keyword frequency breakdown", "✓".green());
    println!("  {} H1 tags analysis", "✓".green());
    println!("  {} Image ALT coverage audit", "✓".green());
    println!("  {} Schema markup detection", "✓".green());
    println!("  {} PageSpeed Insights integration", "✓".green());
    println!("  {} PDF reports", "✓".green());
    println!("{}", "=".repeat(BANNER_WIDTH));
}

fn print_menu() {
    println!("\nMAIN MENU:");
    println!("1. Set Google PageSpeed API key");
    println!("2. Run SEO audit");
    println!("3. Exit");
    println!("{}", "-".repeat(30));
}

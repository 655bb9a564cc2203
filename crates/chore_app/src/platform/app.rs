use chore_engine::Automation;
use chore_logging::{chore_error, chore_info, chore_warn, LevelFilter};

use super::cli::Cli;
use super::config::{load_config, save_config, AppConfig};
use super::logging::{build_logger, LogDestination};

const RULE_WIDTH: usize = 60;

/// Per-task success flags of one driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub moved_images: bool,
    pub extracted_emails: bool,
    pub scraped_title: bool,
}

pub async fn run_app(cli: Cli) {
    if cli.generate_config {
        handle_generate_config(&cli);
        return;
    }

    let (mut config, config_problem) = match load_config(&cli.config) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(format!("{err:#}"))),
    };
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = build_logger(
        &LogDestination::for_run(config.log_file.clone(), cli.quiet),
        level,
    );
    if let Some(problem) = config_problem {
        chore_warn!(logger, "Using default configuration: {problem}");
    }
    chore_info!(logger, "Configuration: {}", cli.config.display());

    let automation = match Automation::with_http(
        logger.clone(),
        config.move_settings(),
        config.fetch_settings(),
    ) {
        Ok(automation) => automation,
        Err(err) => {
            chore_error!(logger, "Could not build HTTP client: {err}");
            return;
        }
    };

    let outcome = run_tasks(&config, &automation).await;
    chore_info!(
        logger,
        "Run finished: move_images={} extract_emails={} scrape_title={}",
        outcome.moved_images,
        outcome.extracted_emails,
        outcome.scraped_title
    );

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("AUTOMATION COMPLETE!");
    println!(
        "Check the output paths for results and '{}' for detailed logs.",
        config.log_file.display()
    );
    println!("{}", "=".repeat(RULE_WIDTH));
    logger.flush();
}

/// Runs the three tasks in fixed order. A failed task never stops the next one.
pub async fn run_tasks(config: &AppConfig, automation: &Automation) -> RunOutcome {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("TASK AUTOMATION");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();

    print_task_header(1, "Moving image files");
    let moved_images = automation.move_images(&config.images.source, &config.images.destination);
    print_task_result(1, moved_images);

    print_task_header(2, "Extracting email addresses");
    let extracted_emails = automation.extract_emails(&config.emails.input, &config.emails.output);
    print_task_result(2, extracted_emails);

    print_task_header(3, "Scraping webpage title");
    let scraped_title = automation
        .scrape_title(&config.scrape.url, &config.scrape.output)
        .await;
    print_task_result(3, scraped_title);

    RunOutcome {
        moved_images,
        extracted_emails,
        scraped_title,
    }
}

fn print_task_header(number: usize, title: &str) {
    let heading = format!("TASK {number}: {title}");
    println!("{heading}");
    println!("{}", "-".repeat(heading.len()));
}

fn print_task_result(number: usize, success: bool) {
    if success {
        println!("✅ Task {number} completed successfully!");
    } else {
        println!("❌ Task {number} failed. Check the logs for details.");
    }
    println!();
}

fn handle_generate_config(cli: &Cli) {
    if cli.config.exists() {
        eprintln!(
            "Refusing to overwrite existing configuration file: {}",
            cli.config.display()
        );
        return;
    }
    match save_config(&cli.config, &AppConfig::default()) {
        Ok(path) => {
            println!("Generated configuration file: {}", path.display());
            println!("\nTo use this configuration:");
            println!("  chores --config {}", path.display());
        }
        Err(err) => eprintln!("Failed to generate configuration file: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use chore_logging::{Level, TaskLogger};
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::platform::fixtures::{seed_demo_workspace, SAMPLE_IMAGES};

    async fn demo_page() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "<!DOCTYPE html>\n<html>\n<head>\n  <title>\n    Moby-Dick &amp; Other   Tales\n  </title>\n</head></html>",
                "text/html; charset=utf-8",
            ))
            .mount(&server)
            .await;
        server
    }

    fn automation_for(config: &AppConfig, log: TaskLogger) -> Automation {
        Automation::with_http(log, config.move_settings(), config.fetch_settings()).unwrap()
    }

    #[tokio::test]
    async fn demo_run_completes_every_task() {
        let server = demo_page().await;
        let temp = TempDir::new().unwrap();
        let mut config = seed_demo_workspace(temp.path());
        config.scrape.url = format!("{}/html", server.uri());

        let (log, captured) = TaskLogger::capturing();
        let outcome = run_tasks(&config, &automation_for(&config, log)).await;

        assert_eq!(
            outcome,
            RunOutcome {
                moved_images: true,
                extracted_emails: true,
                scraped_title: true,
            }
        );
        for name in SAMPLE_IMAGES {
            assert!(config.images.destination.join(name).is_file());
            assert!(!config.images.source.join(name).exists());
        }
        let emails = fs::read_to_string(&config.emails.output).unwrap();
        assert_eq!(emails.lines().count(), 8);
        assert_eq!(emails.lines().next(), Some("john.doe@example.com"));

        let report = fs::read_to_string(&config.scrape.output).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("URL: {}", config.scrape.url));
        assert_eq!(lines[1], "Title: Moby-Dick & Other Tales");
        assert!(lines[2].starts_with("Scraped at: "));
        assert!(captured.messages_at(Level::Error).is_empty());
    }

    #[tokio::test]
    async fn failed_tasks_do_not_stop_later_ones() {
        let temp = TempDir::new().unwrap();
        let mut config = seed_demo_workspace(temp.path());
        config.images.source = temp.path().join("no_such_folder");
        config.scrape.url = "not a url".to_string();

        let (log, captured) = TaskLogger::capturing();
        let outcome = run_tasks(&config, &automation_for(&config, log)).await;

        assert_eq!(
            outcome,
            RunOutcome {
                moved_images: false,
                extracted_emails: true,
                scraped_title: false,
            }
        );
        assert_eq!(captured.messages_at(Level::Error).len(), 2);
        assert!(!config.scrape.output.exists());
    }

    #[tokio::test]
    async fn run_app_reads_config_and_writes_log_file() {
        let server = demo_page().await;
        let temp = TempDir::new().unwrap();
        let mut config = seed_demo_workspace(temp.path());
        config.scrape.url = format!("{}/html", server.uri());
        let config_path = temp.path().join("chores.ron");
        save_config(&config_path, &config).unwrap();
        let log_path = temp.path().join("run.log");

        run_app(Cli {
            config: config_path,
            log_file: Some(log_path.clone()),
            verbose: false,
            quiet: true,
            generate_config: false,
        })
        .await;

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Moved: photo1.jpg"));
        assert!(log.contains("Extracted 8 unique email addresses"));
        assert!(log.contains("Title scraped successfully: Moby-Dick & Other Tales"));
        assert!(config.scrape.output.is_file());
    }

    #[test]
    fn generate_config_writes_defaults_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chores.ron");
        let cli = Cli {
            config: path.clone(),
            log_file: None,
            verbose: false,
            quiet: false,
            generate_config: true,
        };

        handle_generate_config(&cli);
        assert_eq!(load_config(&path).unwrap(), AppConfig::default());

        fs::write(&path, "(log_file: \"custom.log\")").unwrap();
        handle_generate_config(&cli);
        assert_eq!(
            load_config(&path).unwrap().log_file,
            PathBuf::from("custom.log")
        );
    }
}

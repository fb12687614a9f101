use std::collections::HashMap;
use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::{ColoredString, Colorize};
use itertools::Itertools;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::link::LinkTemplate;
use crate::output::{self, OutputFormat, PaginationView, RenderOptions};
use crate::paginate::{PageParams, PaginationSummary, PerPageLimits};
use crate::selfcheck::{self, CheckReport, Vector};
use crate::window::{self, MAX_NEIGHBOR_OFFSET};

pub const DEFAULT_NEIGHBOR_OFFSET: u32 = 2;

fn tag(label: &str, color: fn(ColoredString) -> ColoredString) -> String {
    format!(
        "{}{}{}",
        "[".bold().white(),
        color(label.bold()),
        "]".bold().white()
    )
}

pub fn log_info(msg: &str) {
    println!("{} {}", tag("INF", |s| s.blue()), msg);
}

pub fn log_warn(msg: &str) {
    println!("{} {}", tag("WRN", |s| s.yellow()), msg);
}

pub fn error_line(msg: &str) -> String {
    format!("{} {}", tag("ERR", |s| s.red()), msg)
}

pub fn log_error(msg: &str) {
    println!("{}", error_line(msg));
}

pub fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<12}: {}", label, value);
}

fn render_custom_help() -> String {
    let cmd = CliArgs::command();
    let mut out = String::new();

    out.push_str(cmd.get_name());
    if let Some(version) = cmd.get_version() {
        out.push(' ');
        out.push_str(version);
    }
    out.push('\n');
    if let Some(long_about) = cmd.get_long_about() {
        out.push('\n');
        out.push_str(&long_about.to_string());
        out.push('\n');
    }
    out.push_str(&format!("\nUsage: {} [OPTIONS]\n\n", cmd.get_name()));

    let mut headings: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<&clap::Arg>> = HashMap::new();
    for arg in cmd.get_arguments().filter(|a| !a.is_hide_set()) {
        let heading = arg.get_help_heading().unwrap_or("Options").to_string();
        if !grouped.contains_key(&heading) {
            headings.push(heading.clone());
        }
        grouped.entry(heading).or_default().push(arg);
    }

    for heading in headings {
        out.push_str(&format!("{heading}:\n"));
        for arg in grouped.get(&heading).into_iter().flatten() {
            let mut names: Vec<String> = Vec::new();
            if let Some(short) = arg.get_short() {
                names.push(format!("-{short}"));
            }
            if let Some(long) = arg.get_long() {
                names.push(format!("--{long}"));
            }
            for alias in arg.get_visible_aliases().unwrap_or_default() {
                names.push(format!("--{alias}"));
            }
            let mut flags = names.join(", ");
            if arg.get_action().takes_values() {
                let value_name = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.as_str())
                    .unwrap_or("VALUE");
                flags.push_str(&format!(" <{value_name}>"));
            }
            out.push_str(&format!("  {flags}\n"));
            if let Some(help) = arg.get_help() {
                out.push_str(&format!("          {}\n", help.to_string().trim()));
            }
            out.push('\n');
        }
    }

    out
}

#[derive(Clone, Debug)]
struct RenderJob {
    page: i64,
    total_pages: i64,
    summary: Option<PaginationSummary>,
}

#[derive(Clone, Debug)]
struct RunConfig {
    verbose: u8,
    no_color: bool,
    config_path: Option<PathBuf>,
    init_config: bool,
    check_builtin: bool,
    vectors_path: Option<PathBuf>,
    render: Option<RenderJob>,
    neighbor_offset: u32,
    link: Option<LinkTemplate>,
    output: Option<String>,
    output_format: OutputFormat,
    render_options: RenderOptions,
}

fn build_run_config(
    args: CliArgs,
    cfg: ConfigFile,
    config_path: Option<PathBuf>,
) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let neighbor_offset = args
        .offset
        .or(cfg.neighbor_offset)
        .unwrap_or(DEFAULT_NEIGHBOR_OFFSET);
    if neighbor_offset > MAX_NEIGHBOR_OFFSET {
        return Err(format!(
            "invalid neighbor_offset {neighbor_offset} in config, expected at most {MAX_NEIGHBOR_OFFSET}"
        ));
    }

    let defaults = PerPageLimits::default();
    let limits = PerPageLimits::new(
        cfg.default_per_page.unwrap_or(defaults.default_per_page()),
        cfg.max_per_page.unwrap_or(defaults.max_per_page()),
    )
    .map_err(|e| e.to_string())?;

    let render = match (args.total_pages, args.total_records) {
        (Some(total_pages), _) => Some(RenderJob {
            page: args.page.unwrap_or(1),
            total_pages,
            summary: None,
        }),
        (None, Some(total_records)) => {
            let params = PageParams::prepare(args.page, args.per_page.or(cfg.per_page), limits);
            let summary = PaginationSummary::from_params(params, total_records);
            Some(RenderJob {
                page: summary.page,
                total_pages: summary.display_total_pages(),
                summary: Some(summary),
            })
        }
        (None, None) => None,
    };

    let link = if let Some(raw) = args.link.as_deref() {
        Some(LinkTemplate::parse(raw).map_err(|e| format!("invalid --link '{raw}': {e}"))?)
    } else if let Some(base) = args.base_url.as_deref() {
        Some(LinkTemplate::with_page_param(base))
    } else if let Some(raw) = cfg.link.as_deref() {
        Some(LinkTemplate::parse(raw).map_err(|e| format!("invalid link in config '{raw}': {e}"))?)
    } else {
        None
    };

    let output = args.output.or(cfg.output).map(|p| {
        config::expand_tilde(&p).to_string_lossy().to_string()
    });
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text, json, or html"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let defaults = RenderOptions::default();
    let render_options = RenderOptions {
        aria_label: cfg.aria_label.unwrap_or(defaults.aria_label),
        list_class: cfg.list_class.unwrap_or(defaults.list_class),
        active_class: cfg.active_class.unwrap_or(defaults.active_class),
    };

    Ok(RunConfig {
        verbose: args.verbose,
        no_color,
        config_path,
        init_config: args.init_config,
        check_builtin: args.check,
        vectors_path: args.vectors.map(|p| config::expand_tilde(&p)),
        render,
        neighbor_offset,
        link,
        output,
        output_format,
        render_options,
    })
}

fn print_report(label: &str, report: &CheckReport, verbose: u8, vectors: &[Vector]) {
    if verbose >= 2 {
        for v in vectors {
            let failed = report.failures.iter().any(|f| &f.vector == v);
            let status = if failed { "FAIL".red() } else { "ok".green() };
            println!("   {status} {v}");
        }
    }
    for failure in &report.failures {
        log_error(&format!("{}", failure.vector));
        if failure.mismatched() {
            println!("      got [{}]", failure.actual.iter().join(","));
        }
        for violation in &failure.violations {
            println!("      {violation}");
        }
    }
    let summary = format!("{label}: {}/{} vectors passed", report.passed(), report.total);
    if report.is_ok() {
        log_info(&summary);
    } else {
        log_warn(&summary);
    }
}

fn run_checks(run: &RunConfig) -> Result<(), String> {
    let mut failed = 0usize;

    if run.check_builtin {
        let vectors = selfcheck::builtin_vectors();
        let report = selfcheck::run(&vectors);
        print_report("built-in", &report, run.verbose, &vectors);
        failed += report.failures.len();
    }

    if let Some(path) = run.vectors_path.as_ref() {
        let vectors = selfcheck::load_vectors(path).map_err(|e| e.to_string())?;
        let report = selfcheck::run(&vectors);
        print_report(&path.display().to_string(), &report, run.verbose, &vectors);
        failed += report.failures.len();
    }

    if failed > 0 {
        return Err(format!("{failed} vector(s) failed"));
    }
    Ok(())
}

fn colored_window_line(view: &PaginationView) -> String {
    view.items
        .iter()
        .map(|item| {
            if item.is_ellipsis() {
                item.label.dimmed().to_string()
            } else if item.active {
                format!("[{}]", item.label).bold().green().to_string()
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_render(run: &RunConfig, job: &RenderJob) -> Result<(), String> {
    let window = window::generate(job.page, job.total_pages, run.neighbor_offset);
    let view = PaginationView::new(
        window,
        job.page,
        job.total_pages,
        run.neighbor_offset,
        run.link.as_ref(),
    );

    if run.verbose >= 1 {
        format_kv_line("Page", &job.page.to_string());
        format_kv_line("Total pages", &job.total_pages.to_string());
        format_kv_line("Offset", &run.neighbor_offset.to_string());
        if let Some(summary) = job.summary.as_ref() {
            format_kv_line("Records", &summary.total_records.to_string());
            format_kv_line("Per page", &summary.per_page.to_string());
            format_kv_line("First record", &summary.record_offset().to_string());
        }
        if let Some(link) = run.link.as_ref() {
            format_kv_line("Link", link.as_str());
        }
        format_kv_line("Format", run.output_format.label());
        println!();
    }
    if view.active_item().is_none() {
        log_warn(&format!(
            "page {} is not shown in the window, no link is marked active",
            job.page
        ));
    }

    let rendered = output::render(&view, run.output_format, &run.render_options);

    match run.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
            log_info(&format!("wrote {} bytes to {path}", rendered.len()));
        }
        None if run.output_format == OutputFormat::Text => {
            println!("{}", colored_window_line(&view));
        }
        None => {
            print!("{}", String::from_utf8_lossy(&rendered));
        }
    }
    Ok(())
}

fn execute(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    if run.init_config {
        let path = run
            .config_path
            .clone()
            .ok_or_else(|| "cannot determine config path, use --config".to_string())?;
        if config::ensure_default_config_file(&path)? {
            log_info(&format!("wrote default config to {}", path.display()));
        } else {
            log_info(&format!("config already exists at {}", path.display()));
        }
    }

    if run.check_builtin || run.vectors_path.is_some() {
        run_checks(&run)?;
    }

    if let Some(job) = run.render.as_ref() {
        run_render(&run, job)?;
    }

    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", render_custom_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                print!("{}", CliArgs::command().render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let (config_path, cfg) = match args.config.as_deref() {
        Some(raw) => {
            let path = config::expand_tilde(raw);
            let cfg = config::load_config(&path, args.init_config)?;
            (Some(path), cfg)
        }
        None => match config::default_config_path() {
            Some(path) => {
                let cfg = config::load_config(&path, true)?;
                (Some(path), cfg)
            }
            None => (None, ConfigFile::default()),
        },
    };

    let run_config = build_run_config(args, cfg, config_path)?;
    execute(run_config)
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        let mut full = vec!["pagewindow"];
        full.extend_from_slice(argv);
        CliArgs::parse_from(full)
    }

    #[test]
    fn offset_defaults_to_two() {
        let run = build_run_config(parse(&["-t", "20"]), ConfigFile::default(), None).unwrap();
        assert_eq!(run.neighbor_offset, 2);
        let job = run.render.unwrap();
        assert_eq!(job.page, 1);
        assert_eq!(job.total_pages, 20);
    }

    #[test]
    fn cli_overrides_config() {
        let cfg = ConfigFile {
            neighbor_offset: Some(3),
            output_format: Some("json".to_string()),
            ..ConfigFile::default()
        };
        let run = build_run_config(parse(&["-t", "20", "-N", "1"]), cfg.clone(), None).unwrap();
        assert_eq!(run.neighbor_offset, 1);
        assert_eq!(run.output_format, OutputFormat::Json);

        let run = build_run_config(parse(&["-t", "20"]), cfg, None).unwrap();
        assert_eq!(run.neighbor_offset, 3);
    }

    #[test]
    fn records_mode_normalises_page_and_per_page() {
        let cfg = ConfigFile {
            max_per_page: Some(50),
            ..ConfigFile::default()
        };
        let run =
            build_run_config(parse(&["-p", "-4", "-r", "1000", "-P", "80"]), cfg, None).unwrap();
        let job = run.render.unwrap();
        let summary = job.summary.unwrap();
        assert_eq!(job.page, 1);
        assert_eq!(summary.per_page, 50);
        assert_eq!(job.total_pages, 20);
    }

    #[test]
    fn empty_listing_still_has_one_page() {
        let run = build_run_config(parse(&["-r", "0"]), ConfigFile::default(), None).unwrap();
        assert_eq!(run.render.unwrap().total_pages, 1);
    }

    #[test]
    fn format_inferred_from_output_path() {
        let run = build_run_config(
            parse(&["-t", "10", "-o", "nav.html", "-b", "/admin/users?sort=id"]),
            ConfigFile::default(),
            None,
        )
        .unwrap();
        assert_eq!(run.output_format, OutputFormat::Html);
        assert_eq!(
            run.link.unwrap().as_str(),
            "/admin/users?sort=id&page=:page"
        );
    }

    #[test]
    fn invalid_config_values_are_reported() {
        let cfg = ConfigFile {
            default_per_page: Some(200),
            ..ConfigFile::default()
        };
        assert!(build_run_config(parse(&["-t", "10"]), cfg, None).is_err());

        let cfg = ConfigFile {
            link: Some("/users".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(parse(&["-t", "10"]), cfg, None).is_err());
    }

    #[test]
    fn config_offset_shares_the_window_cap() {
        let cfg = ConfigFile {
            neighbor_offset: Some(MAX_NEIGHBOR_OFFSET + 1),
            ..ConfigFile::default()
        };
        assert!(build_run_config(parse(&["-t", "10"]), cfg, None).is_err());
        assert_eq!(validation::MAX_NEIGHBOR_OFFSET, window::MAX_NEIGHBOR_OFFSET);
    }

    #[test]
    fn error_line_carries_tag_and_message() {
        let line = error_line("vector file has no vectors: empty.txt");
        assert!(line.contains("ERR"));
        assert!(line.ends_with(" vector file has no vectors: empty.txt"));
    }

    #[test]
    fn help_groups_arguments_by_heading() {
        let help = render_custom_help();
        assert!(help.contains("Window:\n"));
        assert!(help.contains("--total-pages"));
        assert!(help.contains("Check:\n"));
    }
}

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pagewindow",
    version,
    about = "pagination window generator",
    long_about = "Pagewindow computes which page links and ellipsis gaps a pagination control shows, and renders them as text, JSON or an HTML fragment.\n\nExamples:\n  pagewindow -p 5 -t 10 -N 1\n  pagewindow -p 3 -r 1234 -P 25 -A html -l '/admin/users?page=:page'\n  pagewindow --check\n\nTip: Use --config to persist rendering settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "page",
        value_name = "N",
        allow_negative_numbers = true,
        help_heading = "Window",
        help = "Current page (out-of-range values are accepted and collapse onto the nearest edge)."
    )]
    pub page: Option<i64>,

    #[arg(
        short = 't',
        long = "tp",
        visible_alias = "total-pages",
        value_name = "N",
        help_heading = "Window",
        help = "Total number of pages."
    )]
    pub total_pages: Option<i64>,

    #[arg(
        short = 'N',
        long = "off",
        visible_alias = "offset",
        value_name = "N",
        help_heading = "Window",
        help = "Pages shown on each side of the current page."
    )]
    pub offset: Option<u32>,

    #[arg(
        short = 'r',
        long = "tr",
        visible_alias = "total-records",
        value_name = "N",
        help_heading = "Records",
        help = "Total record count; total pages are derived from it and --per-page."
    )]
    pub total_records: Option<i64>,

    #[arg(
        short = 'P',
        long = "pp",
        visible_alias = "per-page",
        value_name = "N",
        help_heading = "Records",
        help = "Records per page (capped at the configured maximum)."
    )]
    pub per_page: Option<i64>,

    #[arg(
        short = 'l',
        long = "lnk",
        visible_alias = "link",
        value_name = "TEMPLATE",
        help_heading = "Rendering",
        help = "Page link template; ':page' is replaced by the page number."
    )]
    pub link: Option<String>,

    #[arg(
        short = 'b',
        long = "bu",
        visible_alias = "base-url",
        value_name = "URL",
        help_heading = "Rendering",
        help = "List-page URL; links are built by appending a page=:page parameter."
    )]
    pub base_url: Option<String>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Rendering",
        help = "Write the rendered window to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Rendering",
        help = "Output format (text, json, html)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'k',
        long = "chk",
        visible_alias = "check",
        help_heading = "Check",
        help = "Verify the generator against the built-in reference vectors."
    )]
    pub check: bool,

    #[arg(
        short = 'f',
        long = "vf",
        visible_alias = "vectors",
        value_name = "FILE",
        help_heading = "Check",
        help = "Verify the generator against vectors from a file ('PAGE TOTAL OFFSET => E1,E2,...' per line)."
    )]
    pub vectors: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Config",
        help = "Path to config file (defaults to ~/.pagewindow/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Config",
        help = "Write a commented default config file if none exists."
    )]
    pub init_config: bool,
}

use crate::cli::args::CliArgs;
use crate::link::LinkTemplate;
use crate::output::OutputFormat;

pub use crate::window::MAX_NEIGHBOR_OFFSET;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(offset) = args.offset {
        if offset > MAX_NEIGHBOR_OFFSET {
            return Err(format!(
                "invalid offset {offset}, expected at most {MAX_NEIGHBOR_OFFSET}"
            ));
        }
    }
    if let Some(total_pages) = args.total_pages {
        if total_pages < 1 {
            return Err("invalid total-pages, expected positive integer".to_string());
        }
    }
    if let Some(total_records) = args.total_records {
        if total_records < 0 {
            return Err("invalid total-records, expected non-negative integer".to_string());
        }
    }
    if let Some(per_page) = args.per_page {
        if per_page < 1 {
            return Err("invalid per-page, expected positive integer".to_string());
        }
    }
    if args.total_pages.is_some() && args.total_records.is_some() {
        return Err("use either --total-pages or --total-records, not both".to_string());
    }
    if args.per_page.is_some() && args.total_records.is_none() {
        return Err("--per-page requires --total-records".to_string());
    }
    if args.link.is_some() && args.base_url.is_some() {
        return Err("use either --link or --base-url, not both".to_string());
    }
    if let Some(raw) = args.link.as_deref() {
        LinkTemplate::parse(raw).map_err(|e| format!("invalid --link '{raw}': {e}"))?;
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text, json, or html"
            ));
        }
    }
    let checking = args.check || args.vectors.is_some();
    let rendering = args.total_pages.is_some() || args.total_records.is_some();
    if !checking && !rendering && !args.init_config {
        return Err("either --total-pages or --total-records is required".to_string());
    }
    Ok(())
}

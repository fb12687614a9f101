use pagewindow::paginate::{PageParams, PaginationSummary, PerPageLimits};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let limits = PerPageLimits::new(15, 100)?;
    let params = PageParams::prepare(Some(7), Some(250), limits);
    let summary = PaginationSummary::from_params(params, 4321);

    println!("Page: {} of {}", summary.page, summary.display_total_pages());
    println!("Per page: {}", summary.per_page);
    println!("First record: {}", summary.record_offset());
    println!("Window: {}", summary.window(2));
    println!("Slots: {:?}", pagewindow::window::two_offset_slots(summary.page, summary.display_total_pages()));

    Ok(())
}

use pagewindow::link::LinkTemplate;
use pagewindow::output::{render_html, PaginationView, RenderOptions};
use pagewindow::window::generate;

fn main() {
    let link = LinkTemplate::with_page_param("/admin/files?sort=name");
    for (page, total, offset) in [(1, 5, 1), (5, 10, 1), (10, 20, 2), (222, 20, 2)] {
        let window = generate(page, total, offset);
        println!("generate({page}, {total}, {offset}) = {window}");

        let view = PaginationView::new(window, page, total, offset, Some(&link));
        print!(
            "{}",
            String::from_utf8_lossy(&render_html(&view, &RenderOptions::default()))
        );
    }
}

use crate::link::LinkTemplate;
use crate::output::{self, OutputFormat, PaginationView, RenderOptions};
use crate::paginate::{PageParams, PaginationSummary, PerPageLimits};
use crate::selfcheck;
use crate::window::{generate, Marker};

#[test]
fn literal_scenarios() {
    assert_eq!(generate(-11, 5, 1).to_sentinels(), vec![1, 2, 3, 4, 5]);
    assert_eq!(generate(5, 10, 1).to_sentinels(), vec![1, 0, 4, 5, 6, 0, 10]);
    assert_eq!(generate(7, 10, 1).to_sentinels(), vec![1, 0, 6, 7, 8, 9, 10]);
    assert_eq!(
        generate(1, 20, 2).to_sentinels(),
        vec![1, 2, 3, 4, 5, 6, 7, 0, 20]
    );
    assert_eq!(
        generate(10, 20, 2).to_sentinels(),
        vec![1, 0, 8, 9, 10, 11, 12, 0, 20]
    );
    assert_eq!(
        generate(16, 20, 2).to_sentinels(),
        vec![1, 0, 14, 15, 16, 17, 18, 19, 20]
    );
    assert_eq!(
        generate(1, 100, 100).to_sentinels(),
        (1..=100).collect::<Vec<i64>>()
    );
}

#[test]
fn generation_is_deterministic() {
    for page in [-5, 1, 9, 17, 40] {
        assert_eq!(generate(page, 33, 2), generate(page, 33, 2));
    }
}

#[test]
fn window_edges_are_first_and_last_page() {
    for page in -10..60 {
        let w = generate(page, 50, 3);
        assert_eq!(w.markers().first(), Some(&Marker::Page(1)));
        assert_eq!(w.markers().last(), Some(&Marker::Page(50)));
    }
}

#[test]
fn list_page_flow_from_query_to_html() {
    let params = PageParams::prepare(Some(4), Some(10), PerPageLimits::default());
    let summary = PaginationSummary::from_params(params, 137);
    assert_eq!(summary.total_pages, 14);
    assert_eq!(summary.record_offset(), 30);

    let link = LinkTemplate::with_page_param("/admin/users?sort=email");
    let window = summary.window(2);
    assert_eq!(window.to_sentinels(), vec![1, 2, 3, 4, 5, 6, 7, 0, 14]);

    let view = PaginationView::new(window, summary.page, 14, 2, Some(&link));
    let html = String::from_utf8(output::render(
        &view,
        OutputFormat::Html,
        &RenderOptions::default(),
    ))
    .unwrap();
    assert!(html.contains(
        "<a class=\"admin-pagination__link admin-active\" href=\"/admin/users?sort=email&amp;page=4\">4</a>"
    ));
    assert!(html.contains("href=\"/admin/users?sort=email&amp;page=14\">14</a>"));
}

#[test]
fn fixed_slots_agree_with_vector_form() {
    for page in -3..25 {
        let slots = crate::window::two_offset_slots(page, 20);
        let flat = generate(page, 20, 2).to_sentinels();
        assert_eq!(&slots[..flat.len()], flat.as_slice());
        assert!(slots[flat.len()..].iter().all(|&s| s == -1));
    }
}

#[test]
fn vectors_file_round_trip_through_checker() {
    let text = selfcheck::builtin_vectors()
        .iter()
        .map(|v| {
            format!(
                "{} {} {} => {}",
                v.page,
                v.total_pages,
                v.neighbor_offset,
                v.expected
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let vectors = selfcheck::parse_vectors(&text).unwrap();
    assert_eq!(vectors, selfcheck::builtin_vectors());
    assert!(selfcheck::run(&vectors).is_ok());
}

#[test]
fn load_vectors_reports_missing_and_empty_files() {
    let dir = std::env::temp_dir().join(format!("pagewindow-vectors-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let missing = dir.join("missing.txt");
    assert!(matches!(
        selfcheck::load_vectors(&missing),
        Err(selfcheck::VectorError::Read { .. })
    ));

    let empty = dir.join("empty.txt");
    std::fs::write(&empty, "# only comments\n\n").unwrap();
    assert!(matches!(
        selfcheck::load_vectors(&empty),
        Err(selfcheck::VectorError::Empty { .. })
    ));

    let good = dir.join("good.txt");
    std::fs::write(&good, "7 10 1 => 1,0,6,7,8,9,10\n").unwrap();
    assert_eq!(selfcheck::load_vectors(&good).unwrap().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

use markdown_strata_config::{BlockConfig, Config, InlineConfig};
use markdown_strata_engine::parsing::{classify_lines, parse_inline_for_line, snapshot};
use markdown_strata_engine::{EmphasisCategory, LineKind, ListKind};
use pretty_assertions::assert_eq;
use xi_rope::Rope;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn snapshot_nested_containers() {
    assert_source(
        "nested_containers",
        "# Title *one*\n- item **bold**\n  > quoted _it_\n\t1. tabbed",
    );
}

fn assert_source(name: &str, md: &str) {
    init_logging();
    let rope = Rope::from(md);
    let config = Config::default();

    let lines = classify_lines(&rope, &config.blocks);
    snapshot::invariants(&rope, &lines, &config.inline);

    let snap = snapshot::normalize(&rope, &lines, &config.inline);
    insta::assert_yaml_snapshot!(name, snap);
}

/// Every line span slices back to the text it was classified from.
#[test]
fn cursors_slice_back_to_line_text() {
    init_logging();
    let md = "> - one\r\n\n```rust\n    indented";
    let rope = Rope::from(md);
    let lines = classify_lines(&rope, &BlockConfig::default());

    let texts: Vec<_> = lines
        .iter()
        .map(|l| rope.slice_to_cow(l.cursor.start..l.cursor.end).into_owned())
        .collect();
    assert_eq!(texts, vec!["> - one", "", "```rust", "indented"]);
    snapshot::invariants(&rope, &lines, &InlineConfig::default());
}

#[test]
fn list_continuation_across_lines() {
    init_logging();
    let rope = Rope::from("1. first\n2. second\n3) third\n- other");
    let lines = classify_lines(&rope, &BlockConfig::default());

    let kinds: Vec<ListKind> = lines
        .iter()
        .map(|l| match &l.kind {
            LineKind::List(kind, _) => *kind,
            other => panic!("expected list line, got {other:?}"),
        })
        .collect();

    assert!(kinds[1].is_continuation_of(&kinds[0]));
    assert!(!kinds[2].is_continuation_of(&kinds[1]));
    assert!(!kinds[3].is_continuation_of(&kinds[0]));
    assert_eq!(kinds[0].width(), 2);
}

#[test]
fn emphasis_resolved_inside_quoted_list_item() {
    init_logging();
    let md = "> * *a* *b* *c*";
    let rope = Rope::from(md);
    let lines = classify_lines(&rope, &BlockConfig::default());
    assert_eq!(lines[0].depth(), 2);

    let parsed = parse_inline_for_line(&rope, &lines[0], &InlineConfig::default());
    let found: Vec<_> = parsed
        .emphasis
        .iter()
        .map(|e| (e.category, &md[e.span.start..e.span.end]))
        .collect();
    assert_eq!(
        found,
        vec![
            (EmphasisCategory::Bold, "*a*"),
            (EmphasisCategory::Bold, "*b*"),
            (EmphasisCategory::Bold, "*c*"),
        ]
    );
}

#[test]
fn non_text_lines_have_no_inline_content() {
    init_logging();
    let rope = Rope::from("***\n```*x*\n");
    let lines = classify_lines(&rope, &BlockConfig::default());
    for line in &lines {
        assert!(
            parse_inline_for_line(&rope, line, &InlineConfig::default())
                .emphasis
                .is_empty()
        );
    }
}

#[test]
fn nesting_limit_from_toml_config() {
    init_logging();
    let config = Config::from_toml_str("[blocks]\nmax_nesting = 1\n").unwrap();
    let rope = Rope::from("> > deep");
    let lines = classify_lines(&rope, &config.blocks);

    let LineKind::Quote(inner) = &lines[0].kind else {
        panic!("expected quote, got {:?}", lines[0].kind);
    };
    assert_eq!(inner.kind, LineKind::Text);
    assert_eq!(lines[0].depth(), 1);
}

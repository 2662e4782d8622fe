use taskdot::graph::Graph;

const PROJECT: &str = "\
first: @write the plan
second: do the work
third: celebrate
options
cleanup color_complete
dependencies
second <- first
third <- second
";

fn canonicalized(text: &str) -> String {
    let mut graph = Graph::parse(text).unwrap();
    graph.handle_options();
    graph.transitive_reduction();
    graph.compress_representation();
    graph.to_markup()
}

#[test]
fn rewrite_starts_with_the_shebang_header() {
    let markup = canonicalized(PROJECT);
    assert!(markup.starts_with("#!/usr/bin/env taskdot\n"));
    assert!(markup.contains("# 1 <- 2,3 => 1 requires 2 and 3\n"));
    assert!(markup.contains("# 2 -> 3,4 => 2 provides 3 and 4\n"));
}

#[test]
fn definitions_are_numbered_and_keep_their_flags() {
    let markup = canonicalized(PROJECT);
    assert!(markup.contains("   1: @write the plan\n"));
    assert!(markup.contains("   2: do the work\n"));
    assert!(markup.contains("   3: celebrate\n"));
}

#[test]
fn options_line_lists_the_enabled_options() {
    let markup = canonicalized(PROJECT);
    assert!(markup.contains("options\n  cleanup color_complete\n"));
}

#[test]
fn each_relationship_is_written_once_after_compression() {
    let markup = canonicalized(PROJECT);
    let dependencies = markup.split("dependencies\n").nth(1).unwrap();

    assert!(dependencies.contains("  2 <- 1\n"));
    assert!(dependencies.contains("  3 <- 2\n"));
    assert!(!dependencies.contains("->"));
}

#[test]
fn derived_next_tag_writes_no_flag_character() {
    let mut graph =
        Graph::parse("1: @base\n2: build\noptions\ncolor_next\ndependencies\n2 <- 1\n").unwrap();
    graph.handle_options();
    let markup = graph.to_markup();

    assert!(markup.contains("   1: @base\n"));
    assert!(markup.contains("   2: build\n"));
    assert!(!markup.contains(": _"));
}

#[test]
fn numbers_are_right_aligned_in_a_fixed_width_column() {
    let mut text = String::new();
    for i in 1..=12 {
        text.push_str(&format!("t{i}: task {i}\n"));
    }
    let graph = Graph::parse(&text).unwrap();
    let markup = graph.to_markup();

    assert!(markup.contains("   9: task 9\n"));
    assert!(markup.contains("  10: task 10\n"));
    assert!(markup.contains("  12: task 12\n"));
}

#[test]
fn canonical_output_parses_back_into_the_same_graph() {
    let markup = canonicalized(PROJECT);
    let reparsed = Graph::parse(&markup).unwrap();

    assert_eq!(reparsed.nodes().len(), 3);
    let second = reparsed.find_node("2").unwrap();
    let first = reparsed.find_node("1").unwrap();
    assert!(reparsed.node(second).requires.contains(&first));
}

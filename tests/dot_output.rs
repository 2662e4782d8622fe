use taskdot::graph::Graph;

#[test]
fn dot_header_and_footer() {
    let graph = Graph::parse("a: alpha\n").unwrap();
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph g{\n"));
    assert!(dot.contains("  rankdir=LR;\n"));
    assert!(dot.contains("  ratio=fill;\n"));
    assert!(dot.contains("  node [style=filled];\n"));
    assert!(dot.contains("  overlap=false;\n"));
    assert!(dot.ends_with("}\n"));
    assert!(!dot.contains("layout=neato"));
}

#[test]
fn circular_adds_the_neato_layout_line() {
    let graph = Graph::parse("a: alpha\noptions\ncircular\n").unwrap();
    assert!(graph.to_dot().contains("  layout=neato;\n"));
}

#[test]
fn edges_are_written_from_both_endpoints() {
    let graph = Graph::parse("a: alpha\nb: beta\ndependencies\nb <- a\n").unwrap();
    let dot = graph.to_dot();

    // once while visiting the provider, once while visiting the requirer;
    // rendering engines deduplicate visually
    let edge = "\"alpha (1)\" -> \"beta (2)\"";
    assert_eq!(dot.matches(edge).count(), 2);
}

#[test]
fn publish_suppresses_node_numbers_everywhere() {
    let graph =
        Graph::parse("a: alpha\nb: beta\noptions\npublish\ndependencies\nb <- a\n").unwrap();
    let dot = graph.to_dot();

    assert!(dot.contains("\"alpha\" -> \"beta\""));
    assert!(!dot.contains("(1)"));
    assert!(!dot.contains("(2)"));
}

#[test]
fn complete_nodes_are_colored_when_the_option_is_enabled() {
    let graph = Graph::parse("a: @alpha\noptions\ncolor_complete\n").unwrap();
    assert!(
        graph
            .to_dot()
            .contains("  \"alpha (1)\" [color=\"springgreen\"];\n")
    );
}

#[test]
fn decorations_are_dropped_when_the_option_is_disabled() {
    let graph = Graph::parse("a: @alpha\n").unwrap();
    let dot = graph.to_dot();
    assert!(dot.contains("  \"alpha (1)\"\n"));
    assert!(!dot.contains("springgreen"));
}

#[test]
fn urgent_nodes_are_colored_crimson() {
    let graph = Graph::parse("a: !alpha\noptions\ncolor_urgent\n").unwrap();
    assert!(graph.to_dot().contains("[color=\"crimson\"];"));
}

#[test]
fn derived_next_nodes_are_colored_after_option_resolution() {
    let mut graph = Graph::parse(
        "a: @alpha\nb: beta\noptions\ncolor_complete color_next\ndependencies\nb <- a\n",
    )
    .unwrap();
    graph.handle_options();

    let dot = graph.to_dot();
    assert!(dot.contains("\"beta (2)\" [color=\"lightskyblue\"];"));
}

#[test]
fn removal_marked_nodes_render_undecorated_without_the_option() {
    let graph = Graph::parse("a: &alpha\n").unwrap();
    let dot = graph.to_dot();
    assert!(dot.contains("  \"alpha (1)\"\n"));
    assert!(!dot.contains("color"));
}

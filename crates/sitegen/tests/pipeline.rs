use pretty_assertions::assert_eq;
use sitegen::inline::{extract_markdown_images, split_nodes_delimiter};
use sitegen::{
    classify_block, convert_document, extract_title, segment_blocks, text_to_textnodes,
    BlockKind, ConvertOptions, Converter, SitegenError, TextKind, TextNode,
};

fn render(markdown: &str) -> String {
    convert_document(markdown, &ConvertOptions::default())
        .unwrap()
        .render()
}

#[test]
fn test_heading_round_trip() {
    assert_eq!(render("# Hi"), "<div><h1>Hi</h1></div>");
}

#[test]
fn test_unordered_list_round_trip() {
    assert_eq!(render("- a\n- b"), "<div><ul><li>a</li><li>b</li></ul></div>");
}

#[test]
fn test_non_sequential_ordered_list_is_paragraph() {
    assert_eq!(classify_block("1. a\n3. b"), BlockKind::Paragraph);
    assert_eq!(render("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
}

#[test]
fn test_extract_title() {
    assert_eq!(extract_title("# Title\n\nbody").as_deref(), Some("Title"));
    assert_eq!(extract_title("body only"), None);
}

#[test]
fn test_odd_delimiter_count_fails() {
    assert!(matches!(
        text_to_textnodes("a **b"),
        Err(SitegenError::UnmatchedDelimiter { .. })
    ));
}

#[test]
fn test_image_takes_precedence_over_link() {
    assert_eq!(
        text_to_textnodes("![x](u)").unwrap(),
        vec![TextNode::image("x", "u")]
    );
}

#[test]
fn test_span_kinds_render_to_expected_tags() {
    let nodes = text_to_textnodes("p **b** _i_ `c` [l](/l) ![m](/m.png)").unwrap();
    let html: String = nodes.iter().map(|n| n.to_html_node().render()).collect();
    assert_eq!(
        html,
        r#"p <b>b</b> <i>i</i> <code>c</code> <a href="/l">l</a> <img src="/m.png" alt="m"></img>"#
    );
}

#[test]
fn test_segment_blocks_idempotent() {
    let md = "# A\n\n\n\n  text  \nmore\n\n> q\n>\n> r\n";
    let blocks = segment_blocks(md);
    assert_eq!(segment_blocks(&blocks.join("\n\n")), blocks);
}

#[test]
fn test_individual_passes_compose() {
    let nodes = vec![TextNode::plain("**x** and `y`")];
    let nodes = split_nodes_delimiter(nodes, "**", TextKind::Bold).unwrap();
    let nodes = split_nodes_delimiter(nodes, "`", TextKind::Code).unwrap();
    assert_eq!(
        nodes,
        vec![
            TextNode::new("x", TextKind::Bold),
            TextNode::plain(" and "),
            TextNode::new("y", TextKind::Code),
        ]
    );
    assert!(extract_markdown_images("no images").is_empty());
}

#[test]
fn test_converter_render_page() {
    let page = Converter::new()
        .render_page("# Docs\n\n1. one\n2. two", "<h>{{ Title }}</h>{{ Content }}")
        .unwrap();
    assert_eq!(
        page,
        "<h>Docs</h><div><h1>Docs</h1><ol><li>one</li><li>two</li></ol></div>"
    );
}

#[test]
fn test_conversion_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let md = format!("# Page {i}\n\n- item **{i}**");
                Converter::new().to_html(&md).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("<div><h1>Page {i}</h1><ul><li>item <b>{i}</b></li></ul></div>")
        );
    }
}

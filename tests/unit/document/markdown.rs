use super::*;

#[test]
fn info_string_splits_language_and_meta() {
    let node = CodeBlockNode::from_info("ts filename=a.ts highlight={1-2}", "x");
    assert_eq!(node.language.as_deref(), Some("ts"));
    assert_eq!(node.meta.as_deref(), Some("filename=a.ts highlight={1-2}"));
    assert_eq!(node.value, "x");

    let bare = CodeBlockNode::from_info("  rust  ", "");
    assert_eq!(bare.language.as_deref(), Some("rust"));
    assert_eq!(bare.meta, None);

    let empty = CodeBlockNode::from_info("", "y");
    assert_eq!(empty.language, None);
    assert_eq!(empty.meta, None);
}

#[test]
fn fenced_blocks_are_collected_in_order_without_trailing_newline() {
    let md = "# Title\n\nSome prose.\n\n```ts filename=a.ts\nconst a = 1;\nconst b = 2;\n```\n\nMore prose.\n\n```py\nprint(1)\n```\n";
    let blocks = parse_code_blocks(md);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].language.as_deref(), Some("ts"));
    assert_eq!(blocks[0].meta.as_deref(), Some("filename=a.ts"));
    assert_eq!(blocks[0].value, "const a = 1;\nconst b = 2;");
    assert_eq!(blocks[1].language.as_deref(), Some("py"));
    assert_eq!(blocks[1].meta, None);
    assert_eq!(blocks[1].value, "print(1)");
}

#[test]
fn empty_fenced_block_has_empty_value() {
    let blocks = parse_code_blocks("```txt filename=e.txt\n```\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].value, "");
}

#[test]
fn only_one_trailing_newline_is_removed() {
    let blocks = parse_code_blocks("```txt\na\n\n```\n");
    assert_eq!(blocks[0].value, "a\n");
}

#[test]
fn indented_blocks_have_no_language() {
    let blocks = parse_code_blocks("para\n\n    indented code\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].language, None);
    assert_eq!(blocks[0].value, "indented code");
}

#[test]
fn documents_without_code_yield_nothing() {
    assert!(parse_code_blocks("just *text*\n").is_empty());
}

#[test]
fn nested_code_blocks_are_skipped() {
    let md = "```ts filename=a.ts\nlet a = 1;\n```\n\n> ```ts\n> oops();\n> ```\n\n- item\n\n  ```ts\n  nested();\n  ```\n";
    let blocks = parse_code_blocks(md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].meta.as_deref(), Some("filename=a.ts"));
    assert_eq!(blocks[0].value, "let a = 1;");
}

#[test]
fn root_blocks_after_containers_are_kept() {
    let md = "> quoted prose\n\n1. first\n2. second\n\n```py filename=b.py\nprint(2)\n```\n";
    let blocks = parse_code_blocks(md);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].value, "print(2)");
}

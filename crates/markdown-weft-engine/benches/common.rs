// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](http://example.com).\n\n- Bullet point\n    - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

/// Each level nests one blockquote deeper than the last.
#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let quote = "> ".repeat(current_level - 2);
    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!(
        "{quote}{} Subsection Level {}\n{quote}\n",
        header_prefix, current_level
    ));
    content.push_str(&format!("{quote}Some paragraph content with `inline code`, _emphasis_ and multiple sentences.\n{quote}This helps create realistic document structure for benchmarking.\n{quote}\n"));

    for i in 0..3 {
        let indent = "    ".repeat((current_level - 2).min(3));
        content.push_str(&format!(
            "{quote}{}{}. Item {} at level {}\n",
            indent,
            i + 1,
            i,
            current_level
        ));
    }
    content.push_str(&format!("{quote}\n"));

    if current_level % 3 == 0 {
        content.push_str(&format!("{quote}```rust\n{quote}fn benchmark_function() {{\n{quote}    let value = 42;\n{quote}}}\n{quote}```\n{quote}\n"));
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(50, 4)
}

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title with *emphasis*\n\nParagraph with **strong** and `code *spans*` text.\n\n- Bullet point\n  - Nested _item_\n- Another item\n\n> Quoted ~~text~~\n> 1. numbered\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_delimiter_heavy_line(pairs: usize) -> String {
    let mut line = String::new();
    for i in 0..pairs {
        match i % 3 {
            0 => line.push_str("*a* "),
            1 => line.push_str("**b __c__** "),
            _ => line.push_str("x_y_z ~~d~~ "),
        }
    }
    line
}

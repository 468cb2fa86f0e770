// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with **some** content and a [link](http://example.com).\n\n- Bullet point\n- Another *item*\n___\n>> A quoted line\nthat continues here.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy_line(pairs: usize) -> String {
    let mut line = String::from("start");
    for i in 0..pairs {
        line.push_str(&format!(" **bold {i}** and *italic {i}*"));
    }
    line
}

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_comment_thread(size: usize) -> String {
    let base = "Cross-posted from r/rust and /r/programming.\nfoor/bar is not a reference, neither is r/ on its own.\nTry r/learnrust_2024 (or r/Über) for help.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_marker_heavy_line(size: usize) -> String {
    "ar/b r/ ".repeat(size)
}

//! Classify a snippet, list its tokens, and print the per-byte style letters.

fn main() {
    let input = "\
// running total
int total = 0;
string label = \"sum\";
total = total + 42;
";

    let tokens = synlens::classify(input);

    println!("Tokens: {}", tokens.len());
    print!("{}", synlens::format_tokens(input, &tokens));

    // One letter per byte, so line offsets carry over to the style string.
    let letters = synlens::style_string(&synlens::project(input.len(), &tokens));
    println!("\nStyles:");
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let text = line.trim_end();
        println!("  {text}");
        println!("  {}", &letters[offset..offset + text.len()]);
        offset += line.len();
    }
}

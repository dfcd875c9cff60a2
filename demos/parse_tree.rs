//! Parse a snippet and print its syntax tree, then rebuild it after an edit.

use synlens::{LanguageTables, TextChange, TreeView};

fn main() {
    let input = "\
int count = 3;
while (count) {
\tcount = count - 1;
\tif (count) { total = total * 2; } else { return total; }
}
";

    let tree = synlens::parse(input);
    println!("Nodes: {}", tree.node_count());
    print!("{}", synlens::format_tree(&tree));

    let mut view = TreeView::new(LanguageTables::default());
    view.show("x = 1;");
    let edited = "x = 1 + 2 * 3;";
    view.on_text_changed(edited, TextChange::insert(5, 8));
    if let Some(tree) = view.tree() {
        println!("\nAfter edit:\n{}", synlens::format_tree(tree));
    }
}

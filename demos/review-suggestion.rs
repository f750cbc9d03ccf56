use std::{env, fs, process};

use redline::{ChangeRecord, DecisionArena, ResolutionPolicy, diff_blocks, resolve_blocks};

/// Diffs a document against a suggested rewrite, prints the change set, then
/// confirms every change one by one and prints the merged document. Note the
/// asymmetry: additions and modifications land by accepting them, removals
/// by rejecting the removed content.
///
/// Run it with:
/// `cargo run --example review-suggestion original.html suggested.html`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: review-suggestion <original> <suggested>");
        process::exit(1);
    }

    let original = fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", args[1], e);
        process::exit(1);
    });
    let suggested = fs::read_to_string(&args[2]).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", args[2], e);
        process::exit(1);
    });

    let records = diff_blocks(&original, &suggested);

    let mut decisions = DecisionArena::new();
    for record in &records {
        let label = match record {
            ChangeRecord::Unchanged { .. } => "  ",
            ChangeRecord::Added { .. } => "+ ",
            ChangeRecord::Removed { .. } => "- ",
            ChangeRecord::Modified { .. } => "~ ",
        };
        println!("{}{}", label, record.display_text());

        match record {
            ChangeRecord::Removed { id, .. } => decisions.reject(*id),
            ChangeRecord::Added { id, .. } | ChangeRecord::Modified { id, .. } => {
                decisions.accept(*id);
            }
            ChangeRecord::Unchanged { .. } => {}
        }
    }

    println!();
    print!(
        "{}",
        resolve_blocks(&records, &decisions, ResolutionPolicy::Selective)
    );
}

//! Display functions for command results

use crate::commands::JumbleResult;
use colored::Colorize;

/// Print a summary of a jumble run
pub fn print_jumble_result(result: &JumbleResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "JUMBLE:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    if result.dictionary_size == 0 {
        println!("   Entries loaded:   {}", "0 (no word can match)".red());
    } else {
        println!("   Entries loaded:   {}", result.dictionary_size);
    }

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Combinations:     {}", result.stats.combinations);
    println!("   Permutations:     {}", result.stats.permutations);
    println!(
        "   Matches:          {}",
        result.stats.matches.to_string().bright_yellow().bold()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    println!(
        "\n✅ Results written to {}",
        result.output_path.display().to_string().green()
    );
}

//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, highlight_step};
use crate::commands::{BenchmarkResult, CompareResult, FindResult, LongestResult, NeighborsResult};
use colored::Colorize;

/// Print the result of a path search
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} → {}  ({})",
        "Ladder:".bright_cyan().bold(),
        result.source.text().to_uppercase().bright_yellow().bold(),
        result
            .destination
            .text()
            .to_uppercase()
            .bright_yellow()
            .bold(),
        result.algorithm
    );
    println!("{}", "─".repeat(60).cyan());

    if result.outcome.found() {
        println!();
        let mut previous = None;
        for (i, word) in result.outcome.path.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, highlight_step(previous, word));
            previous = Some(word);
        }

        println!();
        println!(
            "{}",
            format!("✅ Found a ladder of {} steps", result.outcome.path_edges())
                .green()
                .bold()
        );
    } else {
        println!();
        println!("{}", "❌ No ladder exists between these words".red().bold());
    }

    if verbose {
        println!("\n  Edges explored: {}", result.outcome.edges_explored);
        println!("  Time taken:     {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the result of a longest-path search
pub fn print_longest_result(result: &LongestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        "Longest ladder from:".bright_cyan().bold(),
        result.source.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", format_path(&result.outcome.path));
    println!(
        "\n{}",
        format!(
            "🏁 {} words ({} steps), {} edges explored",
            result.outcome.path.len(),
            result.outcome.path_edges(),
            result.outcome.edges_explored
        )
        .green()
        .bold()
    );
    println!("  Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print the result of a neighbor query
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}{}",
        "Neighbors of:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold(),
        if result.in_vocabulary {
            String::new()
        } else {
            " (not in vocabulary)".bright_black().to_string()
        }
    );
    println!("{}", "─".repeat(60).cyan());

    if result.neighbors.is_empty() {
        println!("\n  {}", "no adjacent words".bright_black());
    } else {
        println!();
        for neighbor in &result.neighbors {
            println!("  {}", highlight_step(Some(&result.word), neighbor));
        }
        println!("\n  {} adjacent words", result.neighbors.len());
    }
}

/// Print the algorithm comparison table
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "ALGORITHM COMPARISON:".bright_cyan().bold(),
        result.source.text().to_uppercase().bright_yellow().bold(),
        result
            .destination
            .text()
            .to_uppercase()
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {:<14} {:>6} {:>8} {:>12}",
        "algorithm", "words", "edges", "time"
    );
    for row in &result.rows {
        let words = if row.outcome.found() {
            row.outcome.path.len().to_string()
        } else {
            "—".to_string()
        };
        println!(
            "   {:<14} {:>6} {:>8} {:>10.3}ms",
            row.algorithm.name(),
            words,
            row.outcome.edges_explored,
            row.duration.as_secs_f64() * 1000.0
        );
    }

    for row in &result.rows {
        if row.outcome.found() {
            println!(
                "\n   {}: {}",
                row.algorithm.name().bright_cyan(),
                format_path(&row.outcome.path)
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs_tested);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).bright_yellow().bold()
    );
    println!("   Avg path words:   {:.2}", result.average_path_words);
    println!("   Avg edges:        {:.1}", result.average_edges);
    println!("   Max edges:        {}", result.max_edges);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if !result.path_length_distribution.is_empty() {
        println!("\n📈 {}", "Path length distribution:".bright_cyan().bold());
        let mut lengths: Vec<_> = result.path_length_distribution.iter().collect();
        lengths.sort();
        for (length, &count) in lengths {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {length:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

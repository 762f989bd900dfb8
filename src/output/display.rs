//! Display functions for the console front-end and command results

use super::formatters::{KeyState, create_progress_bar, key_state, round_summary};
use crate::commands::SimulationResult;
use crate::engine::rules::ALPHABET;
use crate::engine::{Dialog, GameStatus, Toast, ToastKind};
use crate::storage::Statistics;
use colored::Colorize;

/// Print the words, counters and letter keyboard
pub fn print_board(status: &GameStatus) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, progress) in status.word_progress.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            progress.bright_white().bold()
        );
    }
    println!("  {}", round_summary(status).bright_black());

    println!(
        "\n  Levens: {}   Score: {}   Streak: {}   Hints: {}",
        status.lives_bar().red(),
        status.score.to_string().bright_yellow().bold(),
        status.streak,
        status.hints_used
    );

    let keys: Vec<String> = ALPHABET
        .iter()
        .map(|&letter| {
            let text = letter.to_string();
            match key_state(status, letter) {
                KeyState::Unused => text.white().to_string(),
                KeyState::Partial => text.green().to_string(),
                KeyState::Done => text.bright_black().to_string(),
                KeyState::Wrong => text.red().strikethrough().to_string(),
            }
        })
        .collect();
    println!("\n  {}", keys.join(" "));

    if status.hint_available() {
        println!("  {}", "💡 Typ 'hint' voor een hint".bright_cyan());
    }
}

/// Print a modal end-of-round message
pub fn print_dialog(dialog: &Dialog) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("  {}", dialog.title.bright_green().bold());
    println!("  {}", dialog.body.bright_white());
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a transient notification
pub fn print_toast(toast: &Toast) {
    let title = match toast.kind {
        ToastKind::Success => toast.title.green().bold(),
        ToastKind::Info => toast.title.cyan().bold(),
        ToastKind::Error => toast.title.red().bold(),
    };
    println!("  {title} {}", toast.body);
}

/// Print the key and command reference
pub fn print_help() {
    println!("\n{}", "🎮 WOORDPUZZEL".bright_cyan().bold());
    println!("  A-Z     Raad een letter");
    println!("  hint    Onthul een willekeurige letter (alleen met minder dan 2 levens)");
    println!("  new     Nieuw spel");
    println!("  sound   Geluid aan/uit");
    println!("  help    Deze hulp");
    println!("  quit    Stoppen\n");
    println!("Doel: Raad de Nederlandse woorden voordat je levens op zijn!");
}

/// Print persisted lifetime statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTIEKEN".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Games gespeeld:   {}", stats.total_games_played);
    println!("   Woorden geraden:  {}", stats.total_words_guessed);
    println!(
        "   Hoogste score:    {}",
        stats.high_score.to_string().bright_yellow().bold()
    );
    match stats.last_played {
        Some(secs) => println!("   Laatst gespeeld:  {secs} (unix)"),
        None => println!("   Laatst gespeeld:  nooit"),
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(result.win_rate, 1.0, 30).green(),
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Average score:    {:.1}", result.average_score);
    println!("   Best score:       {}", result.best_score);
    println!("   Avg wrong guesses {:.2}", result.average_wrong_guesses);
    println!("   Hints used:       {}", result.total_hints);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.won > 0 {
        println!("\n📈 {}", "Lives left after a win:".bright_cyan().bold());
        for (lives, &count) in &result.lives_distribution {
            let pct = (count as f64 / result.won as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {lives}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

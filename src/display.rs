use crate::app::App;
use crate::views::InputError;

pub fn display_screen(app: &App) {
    print!("{}", app.render());
    println!();
}

/// Blocking notification of a rejected submission.
pub fn display_alert(error: &InputError, line: Option<u64>) {
    match line {
        Some(line) => eprintln!("line {line}: {error}"),
        None => eprintln!("{error}"),
    }
}

pub fn display_batch_summary(accepted: usize, rejected: &[u64]) {
    println!(
        "Projects accepted/rejected/total: {}/{}/{}",
        accepted,
        rejected.len(),
        accepted + rejected.len()
    );
    if !rejected.is_empty() {
        println!("Rejected lines:");
        for line in rejected {
            println!("  - line {line}");
        }
    }
}

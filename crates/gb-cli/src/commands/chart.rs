use comfy_table::{ContentArrangement, Table};

use gb_oracle::chaos::{MAX_CHAOS, MIN_CHAOS};
use gb_oracle::{ChaosFactor, Odds, Verdict, classify, compute_probability};

pub fn run(chaos: Option<u32>) -> Result<(), String> {
    match chaos {
        Some(value) if (MIN_CHAOS..=MAX_CHAOS).contains(&value) => {
            print_bands(ChaosFactor::new(value));
            Ok(())
        }
        Some(value) => Err(format!(
            "chaos factor must be between {MIN_CHAOS} and {MAX_CHAOS}, got {value}"
        )),
        None => {
            print_chart();
            Ok(())
        }
    }
}

/// Yes-probability for every odds label at every chaos level.
fn print_chart() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Odds".to_string()];
    header.extend((MIN_CHAOS..=MAX_CHAOS).map(|c| format!("CF {c}")));
    table.set_header(header);

    for odds in Odds::all() {
        let mut row = vec![odds.to_string()];
        row.extend(
            (MIN_CHAOS..=MAX_CHAOS)
                .map(|c| compute_probability(ChaosFactor::new(c), *odds).to_string()),
        );
        table.add_row(row);
    }

    println!("{table}");
}

/// Roll ranges of each verdict at one chaos level.
fn print_bands(chaos: ChaosFactor) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Odds", "Yes %", "Exc. Yes", "Yes", "No", "Exc. No"]);

    for odds in Odds::all() {
        let probability = compute_probability(chaos, *odds);
        let band = |verdict: Verdict| {
            let rolls: Vec<u32> = (1..=100)
                .filter(|roll| classify(*roll, probability) == verdict)
                .collect();
            match (rolls.first(), rolls.last()) {
                (Some(lo), Some(hi)) if lo == hi => lo.to_string(),
                (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
                _ => "-".to_string(),
            }
        };
        table.add_row(vec![
            odds.to_string(),
            probability.to_string(),
            band(Verdict::ExceptionalYes),
            band(Verdict::Yes),
            band(Verdict::No),
            band(Verdict::ExceptionalNo),
        ]);
    }

    println!("  Chaos Factor {chaos}");
    println!("{table}");
}

use crate::coinrep::CoinRep;
use crate::currency::Currency;
use crate::orderliness::CounterexampleReport;
use comfy_table::Table;

pub fn format_check_screen(currency: &Currency, report: Option<&CounterexampleReport>) -> String {
    let mut components = vec![];

    match report {
        None => {
            components.push(title(&format!("Currency {} is orderly.", currency)));
            components.push("Greedy change is always optimal.".to_string());
        }
        Some(report) => {
            components.push(title(&format!("Currency {} is not orderly.", currency)));

            let mut table = Table::new();
            table.set_header(vec!["Denomination", "Counterexample", "Greedy"]);
            for ((denomination, count), (_, greedy_count)) in report
                .counterexample()
                .entries()
                .iter()
                .zip(report.greedy().entries())
            {
                table.add_row(vec![
                    denomination.to_string(),
                    count.to_string(),
                    greedy_count.to_string(),
                ]);
            }
            table.add_row(vec![
                "Total".to_string(),
                report.optimal_size().to_string(),
                report.greedy_size().to_string(),
            ]);

            components.push(format!(
                "{}\n{}",
                title(&format!("Counterexample for value {}", report.value())),
                table
            ));
            components.push(format!(
                "Greedy uses {} coins where {} suffice.",
                report.greedy_size(),
                report.optimal_size()
            ));
        }
    }

    components.push(release());
    components.join("\n\n")
}

pub fn format_change_screen(value: i64, currency: &Currency, coinrep: &CoinRep) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Denomination", "Count"]);
    for (denomination, count) in coinrep.entries() {
        table.add_row(vec![denomination.to_string(), count.to_string()]);
    }
    table.add_row(vec!["Total".to_string(), coinrep.size().to_string()]);

    let components = vec![
        format!(
            "{}\n{}",
            title(&format!("Change for {} with {}", value, currency)),
            table
        ),
        release(),
    ];

    components.join("\n\n")
}

fn release() -> String {
    format!("Release: {}", env!("RELEASE"))
}

fn title(string: &str) -> String {
    let string_length = string.len();
    string.to_string() + "\n" + &"=".repeat(string_length)
}

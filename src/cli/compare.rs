use anyhow::Context;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::matching::aligner::{AlignmentEvent, SkipAligner};
use crate::matching::oracle::GlobalIdentityScorer;
use crate::matching::report::{format_event, format_event_tsv, ProductTransition};
use crate::parsing::genbank;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let old_record = genbank::parse_file(&cli.old)
        .with_context(|| format!("failed to load {}", cli.old.display()))?;
    let new_record = genbank::parse_file(&cli.new)
        .with_context(|| format!("failed to load {}", cli.new.display()))?;

    info!(
        "comparing {} against {} (threshold {}, skip budget {})",
        old_record.name,
        new_record.name,
        cli.match_identity_threshold,
        cli.allowed_skipped_genes
    );

    if matches!(cli.format, OutputFormat::Text) {
        println!("Features in old assembly: {}", old_record.features.len());
        println!("Features in new assembly: {}", new_record.features.len());
    }

    let oracle = GlobalIdentityScorer::new(cli.match_identity_threshold);
    let aligner = SkipAligner::new(&oracle, cli.allowed_skipped_genes);

    let mut events = Vec::new();
    let result = aligner.align(&old_record.features, &new_record.features, &mut events);

    // Events emitted before a fatal alignment failure are still reported;
    // the error itself surfaces afterwards as a non-zero exit.
    match cli.format {
        OutputFormat::Text => {
            for event in &events {
                print!("{}", format_event(event));
            }
        }
        OutputFormat::Json => print_json(&old_record.name, &new_record.name, &events)?,
        OutputFormat::Tsv => {
            println!("event\tidentity\tlength_diff\told\tnew");
            for event in &events {
                println!("{}", format_event_tsv(event));
            }
        }
    }

    result.map_err(anyhow::Error::from)
}

fn print_json(old_name: &str, new_name: &str, events: &[AlignmentEvent]) -> anyhow::Result<()> {
    let event_values: Vec<serde_json::Value> = events
        .iter()
        .map(|event| {
            let mut value = serde_json::to_value(event)?;
            if let AlignmentEvent::Match { old, new, identity, .. } = event {
                value["exact"] = serde_json::Value::Bool(*identity >= 1.0);
                if let Some(transition) = ProductTransition::between(old, new) {
                    value["product_transition"] = serde_json::to_value(transition)?;
                }
            }
            Ok(value)
        })
        .collect::<Result<_, serde_json::Error>>()?;

    let output = serde_json::json!({
        "old_record": old_name,
        "new_record": new_name,
        "event_count": events.len(),
        "events": event_values,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

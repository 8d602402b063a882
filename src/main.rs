use clap::Parser;
use country_time_finder::utils::logger;
use country_time_finder::{
    CliConfig, CountryTable, LookupEngine, LookupOutcome, RenderConfig, SearchHit, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting country-time-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let render = match &config.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(render) => render,
            Err(e) => {
                tracing::error!("Failed to load render config from {}: {}", path, e);
                eprintln!("Failed to load render config: {}", e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };

    let table = match CountryTable::load() {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to load country reference table: {}", e);
            eprintln!("Failed to load country reference table: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded {} country records", table.len());

    let engine = LookupEngine::new(table, SystemClock);

    if config.scan {
        let outcomes = engine.scan_page(&config.query);
        if outcomes.is_empty() {
            println!("No results found");
        } else if config.json {
            print_outcomes_json(&outcomes, &render);
        } else {
            for outcome in &outcomes {
                println!("{}", render_outcome(outcome, &render));
            }
        }
        return Ok(());
    }

    // A single number first; anything unparseable falls back to the
    // directory search.
    if let Some(outcome) = engine.lookup_number(&config.query) {
        if config.json {
            print_outcomes_json(std::slice::from_ref(&outcome), &render);
        } else {
            println!("{}", render_outcome(&outcome, &render));
        }
        return Ok(());
    }

    let hits = engine.search(&config.query);
    if hits.is_empty() {
        println!("No results found");
    } else if config.json {
        print_hits_json(&hits, &render);
    } else {
        for hit in &hits {
            println!("{}", render_hit(hit, &render));
        }
    }

    Ok(())
}

fn render_outcome(outcome: &LookupOutcome, render: &RenderConfig) -> String {
    let mut line = String::new();

    match &outcome.payload {
        Some(payload) => {
            if render.show_icons {
                line.push_str(payload.glyph);
                line.push(' ');
            }
            line.push_str(&format!(
                "{}: {} ({})",
                payload.country_name, payload.message, payload.local_time
            ));
        }
        None => {
            line.push_str(&format!(
                "{}: no timezone information",
                outcome.country.country_name
            ));
        }
    }

    if let Some(zone) = outcome.closest_zone {
        line.push_str(&format!(" · closest reference zone: {}", zone.label()));
    }

    line
}

fn render_hit(hit: &SearchHit, render: &RenderConfig) -> String {
    let country = &hit.country;
    let mut line = String::new();

    if render.show_icons {
        if let Some(payload) = &hit.payload {
            line.push_str(payload.glyph);
            line.push(' ');
        }
    }

    line.push_str(&format!(
        "{} ({}) · {} · +{} · .{}",
        country.country_name,
        country.iso2,
        country.capital,
        country.phone_code,
        country.top_level_domain
    ));

    if let Some(time) = &hit.current_time {
        line.push_str(&format!(" · {}", time));
    }
    if let Some(payload) = &hit.payload {
        line.push_str(&format!(" · {}", payload.message));
    }

    line
}

fn print_outcomes_json(outcomes: &[LookupOutcome], render: &RenderConfig) {
    let results: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "candidate": &outcome.candidate,
                "country": &outcome.country,
                "payload": &outcome.payload,
                "closest_zone": outcome.closest_zone.map(|z| z.label()),
            })
        })
        .collect();

    let envelope = serde_json::json!({ "render": render, "results": results });
    println!("{}", envelope);
}

fn print_hits_json(hits: &[SearchHit], render: &RenderConfig) {
    let results: Vec<serde_json::Value> = hits
        .iter()
        .map(|hit| {
            serde_json::json!({
                "country": &hit.country,
                "payload": &hit.payload,
                "current_time": &hit.current_time,
            })
        })
        .collect();

    let envelope = serde_json::json!({ "render": render, "results": results });
    println!("{}", envelope);
}
